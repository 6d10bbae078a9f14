//! The main menu loop: map display, attack phase, victory checks.

use std::io::{self, BufRead, Write};

use rand::Rng;

use crate::combat::resolve_attack;
use crate::map::{Faction, Map};
use crate::mission::Mission;

/// A running game session: the map, the player's faction, and the secret
/// mission drawn at startup.
pub struct GameState {
    map: Map,
    player: Faction,
    mission: Mission,
}

fn prompt(message: &str) -> io::Result<()> {
    print!("{}", message);
    io::stdout().flush()
}

/// Read one trimmed line; `None` means the input is exhausted.
fn read_line_opt(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

impl GameState {
    pub fn new(map: Map, player: Faction, mission: Mission) -> Self {
        GameState {
            map,
            player,
            mission,
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn player(&self) -> &Faction {
        &self.player
    }

    pub fn mission(&self) -> Mission {
        self.mission
    }

    /// Whether the player's mission currently holds. Pure query; checking
    /// any number of times changes nothing.
    pub fn check_victory(&self) -> bool {
        self.mission
            .is_accomplished(self.map.territories(), &self.player)
    }

    pub fn print_map(&self) {
        println!("\n=== WORLD MAP ===");
        println!("{:<20} | {:<12} | {:>6}", "Territory", "Faction", "Troops");
        println!("{}", "-".repeat(44));
        for territory in self.map.territories() {
            println!(
                "{:<20} | {:<12} | {:>6}",
                territory.name, territory.faction, territory.troops
            );
        }
        println!("{}", "-".repeat(44));
    }

    fn print_menu(&self) {
        println!("\n===== MAIN MENU =====");
        println!("1. Launch an attack");
        println!("2. Check victory");
        println!("0. Quit");
        println!("=====================");
    }

    /// Run the menu loop until the player quits or the input ends.
    pub fn run<R: Rng>(&mut self, rng: &mut R, input: &mut impl BufRead) -> io::Result<()> {
        loop {
            self.print_map();
            println!("\nYour mission: {}", self.mission.description());
            self.print_menu();

            prompt("Choose an option: ")?;
            let Some(choice) = read_line_opt(input)? else {
                break;
            };

            match choice.as_str() {
                "1" => self.attack_phase(rng, input)?,
                "2" => {
                    if self.check_victory() {
                        println!("\nCongratulations! Mission accomplished!");
                    } else {
                        println!("\nMission not yet accomplished. Keep fighting!");
                    }
                }
                "0" => {
                    println!("\nLeaving the war...");
                    break;
                }
                _ => println!("\nInvalid option! Try again."),
            }
        }
        Ok(())
    }

    /// Read a 1-based territory selection; `None` for anything unparsable
    /// or out of range.
    fn read_selection(&self, input: &mut impl BufRead) -> io::Result<Option<usize>> {
        let Some(line) = read_line_opt(input)? else {
            return Ok(None);
        };
        match line.parse::<usize>() {
            Ok(n) if (1..=self.map.len()).contains(&n) => Ok(Some(n - 1)),
            _ => Ok(None),
        }
    }

    /// One attack attempt. Invalid selections report the problem and drop
    /// back to the menu, so combat only ever sees validated pairs.
    fn attack_phase<R: Rng>(&mut self, rng: &mut R, input: &mut impl BufRead) -> io::Result<()> {
        println!("\n=== ATTACK PHASE ===");
        for (i, territory) in self.map.territories().iter().enumerate() {
            println!(
                "{} - {} (faction: {}, troops: {})",
                i + 1,
                territory.name,
                territory.faction,
                territory.troops
            );
        }

        prompt("\nChoose the attacking territory (number): ")?;
        let Some(origin) = self.read_selection(input)? else {
            println!("\nInvalid territory!");
            return Ok(());
        };

        prompt("Choose the target territory (number): ")?;
        let Some(target) = self.read_selection(input)? else {
            println!("\nInvalid territory!");
            return Ok(());
        };

        if origin == target {
            println!("\nOrigin and target are the same! Choose different territories.");
            return Ok(());
        }

        let origin_troops = self.map.get(origin).map_or(0, |t| t.troops);
        if origin_troops < 2 {
            println!("\nThe attacking territory does not have enough troops.");
            return Ok(());
        }

        let (attacker, defender) = self.map.pair_mut(origin, target);
        println!(
            "\nSimulating attack from {} against {}...",
            attacker.name, defender.name
        );

        let report = resolve_attack(attacker, defender, rng);
        println!(
            "Attack roll: {} | Defense roll: {}",
            report.attack_roll, report.defense_roll
        );
        if report.conquered {
            println!(
                "Attack succeeded! {} now belongs to {}.",
                defender.name, defender.faction
            );
        } else {
            println!(
                "Attack failed! {} remains under {}.",
                defender.name, defender.faction
            );
        }
        Ok(())
    }
}
