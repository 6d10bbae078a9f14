use std::error::Error;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use war_console::game::GameState;
use war_console::map::{Faction, Map};
use war_console::mission::Mission;
use war_console::setup::{self, DEFAULT_TERRITORY_COUNT};

#[derive(Parser, Debug)]
#[command(name = "war_console")]
#[command(about = "A turn-based territory-conquest game on the console")]
struct Args {
    /// Random seed (uses a random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Load territory definitions from a JSON file instead of registering
    /// them interactively
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Faction the player commands
    #[arg(short, long, default_value = "Azul")]
    player: String,

    /// Number of territories to register interactively
    #[arg(short, long, default_value_t = DEFAULT_TERRITORY_COUNT)]
    territories: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    println!("Starting game with seed: {}", seed);

    let player = Faction::new(&args.player)?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let map = match &args.map {
        Some(path) => Map::from_json_file(path)?,
        None => setup::register_territories(args.territories, &mut input)?,
    };

    let mission = Mission::draw(&mut rng);

    println!("\nWelcome to the war!");
    println!("You command the {} army.", player);
    println!("Your secret mission has been drawn!");

    let mut game = GameState::new(map, player, mission);
    game.run(&mut rng, &mut input)?;

    Ok(())
}
