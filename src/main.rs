use anyhow::{Context, Result};
use clap::Parser;
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mail_robot::simulation::{
    random_initial_state, Journey, Location, Parcel, RoadNetwork, WorldState,
    DEFAULT_PARCEL_COUNT, POST_OFFICE,
};

#[derive(Parser)]
#[command(name = "mail_robot")]
#[command(about = "Mail delivery robot simulation on the Meadowfield road network")]
struct Cli {
    /// Number of parcels to generate
    #[arg(long, default_value_t = DEFAULT_PARCEL_COUNT)]
    parcels: usize,

    /// Seed for reproducible parcel generation
    #[arg(long)]
    seed: Option<u64>,

    /// Location the robot starts from
    #[arg(long, default_value = POST_OFFICE)]
    start: String,

    /// Comma-separated list of destinations to visit in order
    #[arg(long, value_delimiter = ',')]
    route: Vec<String>,

    /// Run the single-parcel Post Office to Alice's House demonstration
    #[arg(long)]
    demo: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let network = RoadNetwork::meadowfield().context("Failed to build Meadowfield roads")?;
    if !network.is_connected() {
        warn!(
            "Road network has {} disconnected groups; some parcels may be undeliverable",
            network.component_count()
        );
    }

    if cli.demo {
        run_demo(&network);
        return Ok(());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let start = Location::from(cli.start);
    let initial = random_initial_state(cli.parcels, &start, &network, &mut rng)
        .context("Failed to generate initial state")?;

    println!("=== Initial State ===");
    print_state(&initial);
    println!();

    let route: Vec<Location> = cli.route.into_iter().map(Location::from).collect();
    let mut journey = Journey::new(initial);
    journey.follow(&network, &route);

    println!("=== Final State ===");
    print_state(journey.state());
    println!("Turns: {}", journey.turns());
    println!("Illegal moves: {}", journey.illegal_moves());
    println!(
        "Visited: {}",
        journey
            .visited()
            .iter()
            .map(Location::as_str)
            .collect::<Vec<_>>()
            .join(" -> ")
    );
    println!("Complete: {}", journey.is_complete());

    Ok(())
}

/// Moves a single parcel from the post office to Alice's house
fn run_demo(network: &RoadNetwork) {
    let first = WorldState::new(
        POST_OFFICE,
        vec![Parcel::new(POST_OFFICE, "Alice's House")],
    );
    let next = first.move_to(network, &Location::from("Alice's House"));

    println!("{}", next.place());
    println!("{:?}", next.parcels());
    println!("{}", first.place());
}

fn print_state(state: &WorldState) {
    println!("Robot at: {}", state.place());
    println!("Parcels: {}", state.parcels().len());
    for parcel in state.parcels() {
        println!("  {}", parcel);
    }
}
