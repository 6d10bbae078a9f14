//! Interactive territory registration.
//!
//! Prompts for each territory's name, faction, and troop count, re-prompting
//! until the input is valid. Reads from any `BufRead` so tests can script the
//! session.

use std::error::Error;
use std::io::{self, BufRead, Write};

use crate::map::{Faction, Map, Territory, MAX_NAME_LEN};

/// Default map size.
pub const DEFAULT_TERRITORY_COUNT: usize = 5;

fn prompt(message: &str) -> io::Result<()> {
    print!("{}", message);
    io::stdout().flush()
}

fn read_trimmed(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before registration finished",
        ));
    }
    Ok(line.trim().to_string())
}

/// Read a territory name, re-prompting until non-empty and within length.
fn read_name(input: &mut impl BufRead) -> io::Result<String> {
    loop {
        prompt("Territory name: ")?;
        let line = read_trimmed(input)?;
        if line.is_empty() {
            println!("Territory name cannot be empty.");
            continue;
        }
        if line.chars().count() > MAX_NAME_LEN {
            println!("Territory name must be at most {} characters.", MAX_NAME_LEN);
            continue;
        }
        return Ok(line);
    }
}

/// Read a faction name, re-prompting until it validates.
pub fn read_faction(input: &mut impl BufRead) -> io::Result<Faction> {
    loop {
        prompt("Dominant faction: ")?;
        match Faction::new(&read_trimmed(input)?) {
            Ok(faction) => return Ok(faction),
            Err(e) => println!("Invalid input: {}.", e),
        }
    }
}

/// Read a troop count, re-prompting until it is a positive number.
/// Digits only; signs and decimals are rejected.
pub fn read_troop_count(input: &mut impl BufRead) -> io::Result<u32> {
    loop {
        prompt("Troop count: ")?;
        let line = read_trimmed(input)?;
        if line.is_empty() || !line.chars().all(|c| c.is_ascii_digit()) {
            println!("Invalid input! Enter digits only.");
            continue;
        }
        match line.parse::<u32>() {
            Ok(0) => println!("Enter a number greater than zero!"),
            Ok(n) => return Ok(n),
            Err(_) => println!("That number is too large."),
        }
    }
}

/// Register `count` territories interactively. A slot whose name or faction
/// duplicates an earlier entry is rejected and re-entered from scratch.
pub fn register_territories(
    count: usize,
    input: &mut impl BufRead,
) -> Result<Map, Box<dyn Error>> {
    let mut registered: Vec<Territory> = Vec::with_capacity(count);

    for slot in 0..count {
        loop {
            println!("\nRegistering territory {} of {}:", slot + 1, count);
            let name = read_name(input)?;
            let faction = read_faction(input)?;
            let troops = read_troop_count(input)?;

            let territory = match Territory::new(&name, faction, troops) {
                Ok(t) => t,
                Err(e) => {
                    println!("Invalid input: {}. Try again.", e);
                    continue;
                }
            };

            let taken = registered
                .iter()
                .any(|t| t.name == territory.name || t.faction == territory.faction);
            if taken {
                println!("\nName or faction already registered! Try again.");
                continue;
            }

            registered.push(territory);
            break;
        }
    }

    Ok(Map::new(registered)?)
}
