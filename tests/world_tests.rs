//! World state transition tests

use mail_robot::simulation::{Location, Parcel, RoadNetwork, WorldState, POST_OFFICE};

fn loc(name: &str) -> Location {
    Location::from(name)
}

fn alice_network() -> RoadNetwork {
    RoadNetwork::build(["Post Office-Alice's House"]).unwrap()
}

#[test]
fn test_move_delivers_parcel() {
    let network = alice_network();
    let first = WorldState::new(
        POST_OFFICE,
        vec![Parcel::new(POST_OFFICE, "Alice's House")],
    );

    let next = first.move_to(&network, &loc("Alice's House"));

    assert_eq!(next.place(), &loc("Alice's House"));
    assert!(next.parcels().is_empty());
    assert!(next.is_complete());

    // The original snapshot is untouched
    assert_eq!(first.place(), &loc("Post Office"));
    assert_eq!(first.parcels().len(), 1);
}

#[test]
fn test_illegal_move_is_noop() {
    let network = alice_network();
    let first = WorldState::new(
        POST_OFFICE,
        vec![Parcel::new(POST_OFFICE, "Alice's House")],
    );

    let next = first.move_to(&network, &loc("Bob's House"));

    assert_eq!(next, first);
    assert_eq!(next.place(), &loc("Post Office"));
    assert_eq!(next.parcels(), first.parcels());
}

#[test]
fn test_illegal_move_from_every_location() {
    let network = RoadNetwork::meadowfield().unwrap();

    for from in network.locations() {
        let state = WorldState::new(
            from.clone(),
            vec![Parcel::new(from.clone(), "Nowhere In Particular")],
        );
        for to in network.locations() {
            if network.is_adjacent(from, to) {
                continue;
            }
            assert_eq!(state.move_to(&network, to), state, "{} -> {}", from, to);
        }
    }
}

#[test]
fn test_move_never_mutates_input() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(
        POST_OFFICE,
        vec![
            Parcel::new(POST_OFFICE, "Marketplace"),
            Parcel::new(POST_OFFICE, "Farm"),
            Parcel::new("Shop", "Cabin"),
        ],
    );
    let snapshot = state.clone();

    for destination in network.locations() {
        let _ = state.move_to(&network, destination);
        assert_eq!(state, snapshot);
    }
}

#[test]
fn test_only_colocated_parcels_travel() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(
        POST_OFFICE,
        vec![
            Parcel::new(POST_OFFICE, "Farm"),
            Parcel::new("Shop", "Marketplace"),
            Parcel::new(POST_OFFICE, "Cabin"),
        ],
    );

    let next = state.move_to(&network, &loc("Marketplace"));

    assert_eq!(next.place(), &loc("Marketplace"));
    assert_eq!(
        next.parcels(),
        &[
            Parcel::new("Marketplace", "Farm"),
            Parcel::new("Shop", "Marketplace"),
            Parcel::new("Marketplace", "Cabin"),
        ]
    );
}

#[test]
fn test_parcel_waiting_at_destination_is_not_delivered() {
    // The parcel waits at the Shop, away from the robot
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(
        POST_OFFICE,
        vec![Parcel::new("Shop", "Marketplace")],
    );

    let next = state.move_to(&network, &loc("Marketplace"));

    assert_eq!(next.parcels(), &[Parcel::new("Shop", "Marketplace")]);
    assert!(!next.is_complete());
}

#[test]
fn test_no_delivered_parcels_after_legal_move() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(
        "Town Hall",
        vec![
            Parcel::new("Town Hall", "Shop"),
            Parcel::new("Town Hall", "Marketplace"),
            Parcel::new("Town Hall", "Cabin"),
            Parcel::new("Farm", "Shop"),
        ],
    );

    for destination in network.neighbors(&loc("Town Hall")).unwrap() {
        let next = state.move_to(&network, destination);
        assert_eq!(next.place(), destination);
        assert!(next.parcels().iter().all(|parcel| !parcel.is_delivered()));

        let carried = state.parcels_at(&loc("Town Hall")).count();
        let delivered = state
            .parcels_at(&loc("Town Hall"))
            .filter(|parcel| parcel.address == *destination)
            .count();
        assert_eq!(next.parcels_at(destination).count(), carried - delivered);
        assert_eq!(next.parcels().len(), state.parcels().len() - delivered);
    }
}

#[test]
fn test_parcels_at() {
    let state = WorldState::new(
        POST_OFFICE,
        vec![
            Parcel::new(POST_OFFICE, "Farm"),
            Parcel::new("Shop", "Farm"),
            Parcel::new(POST_OFFICE, "Cabin"),
        ],
    );

    let post_office = loc(POST_OFFICE);
    let here: Vec<&Parcel> = state.parcels_at(&post_office).collect();
    assert_eq!(here.len(), 2);
    assert!(state.parcels_at(&loc("Cabin")).next().is_none());
}

#[test]
fn test_hypothetical_moves_are_independent() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(POST_OFFICE, vec![Parcel::new(POST_OFFICE, "Cabin")]);

    let via_alice = state.move_to(&network, &loc("Alice's House"));
    let via_market = state.move_to(&network, &loc("Marketplace"));

    assert_eq!(via_alice.parcels(), &[Parcel::new("Alice's House", "Cabin")]);
    assert_eq!(via_market.parcels(), &[Parcel::new("Marketplace", "Cabin")]);

    let delivered = via_alice.move_to(&network, &loc("Cabin"));
    assert!(delivered.is_complete());
    assert_eq!(via_alice.parcels().len(), 1);
}

#[test]
fn test_can_move_to_matches_roads() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(POST_OFFICE, Vec::new());

    assert!(state.can_move_to(&network, &loc("Alice's House")));
    assert!(state.can_move_to(&network, &loc("Marketplace")));
    assert!(!state.can_move_to(&network, &loc("Cabin")));
    assert!(!state.can_move_to(&network, &loc(POST_OFFICE)));
}

#[test]
fn test_network_shared_across_threads() {
    let network = RoadNetwork::meadowfield().unwrap();
    let state = WorldState::new(
        POST_OFFICE,
        vec![
            Parcel::new(POST_OFFICE, "Alice's House"),
            Parcel::new(POST_OFFICE, "Marketplace"),
        ],
    );

    let results: Vec<WorldState> = std::thread::scope(|scope| {
        let handles: Vec<_> = ["Alice's House", "Marketplace", "Cabin"]
            .into_iter()
            .map(|destination| {
                let (network, state) = (&network, &state);
                scope.spawn(move || state.move_to(network, &loc(destination)))
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(results[0].parcels(), &[Parcel::new("Alice's House", "Marketplace")]);
    assert_eq!(results[1].parcels(), &[Parcel::new("Marketplace", "Alice's House")]);
    assert_eq!(results[2], state);
    assert_eq!(state.parcels().len(), 2);
}
