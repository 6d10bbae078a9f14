//! Territory map: the owned collection of territories the game mutates.
//!
//! Validation happens at construction time. Uniqueness of names and factions
//! is enforced only when the map is built; after that, conquest makes faction
//! sharing the normal state of affairs.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Maximum length of a territory name.
pub const MAX_NAME_LEN: usize = 49;

/// Maximum length of a faction name.
pub const MAX_FACTION_LEN: usize = 19;

/// Validation failure while building a map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapError {
    EmptyName,
    NameTooLong(String),
    EmptyFaction,
    FactionTooLong(String),
    /// Faction names are letters and spaces only.
    FactionBadChars(String),
    /// Every territory starts with at least one troop.
    NoTroops(String),
    DuplicateName(String),
    DuplicateFaction(String),
    EmptyMap,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapError::EmptyName => write!(f, "territory name cannot be empty"),
            MapError::NameTooLong(name) => {
                write!(f, "territory name '{}' exceeds {} characters", name, MAX_NAME_LEN)
            }
            MapError::EmptyFaction => write!(f, "faction name cannot be empty"),
            MapError::FactionTooLong(name) => {
                write!(f, "faction name '{}' exceeds {} characters", name, MAX_FACTION_LEN)
            }
            MapError::FactionBadChars(name) => {
                write!(f, "faction name '{}' may contain only letters and spaces", name)
            }
            MapError::NoTroops(name) => {
                write!(f, "territory '{}' must start with at least 1 troop", name)
            }
            MapError::DuplicateName(name) => {
                write!(f, "territory name '{}' is already registered", name)
            }
            MapError::DuplicateFaction(name) => {
                write!(f, "faction '{}' is already registered", name)
            }
            MapError::EmptyMap => write!(f, "a map needs at least one territory"),
        }
    }
}

impl Error for MapError {}

/// A faction identified by name. Letters and spaces only, validated on
/// construction. Comparison is exact string equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Faction(String);

impl Faction {
    pub fn new(name: &str) -> Result<Self, MapError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MapError::EmptyFaction);
        }
        if name.chars().count() > MAX_FACTION_LEN {
            return Err(MapError::FactionTooLong(name.to_string()));
        }
        if !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
            return Err(MapError::FactionBadChars(name.to_string()));
        }
        Ok(Faction(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Faction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named map region with an owning faction and a troop count.
///
/// Combat keeps `troops >= 1`; a defeated territory retains a nominal
/// garrison rather than emptying out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub faction: Faction,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, faction: Faction, troops: u32) -> Result<Self, MapError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(MapError::EmptyName);
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(MapError::NameTooLong(name.to_string()));
        }
        if troops == 0 {
            return Err(MapError::NoTroops(name.to_string()));
        }
        Ok(Territory {
            name: name.to_string(),
            faction,
            troops,
        })
    }
}

/// On-disk form of a territory, for `--map` JSON files.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerritoryRecord {
    pub name: String,
    pub faction: String,
    pub troops: u32,
}

/// The ordered territory collection. Built once, entries mutated in place by
/// combat, never resized.
#[derive(Clone, Debug)]
pub struct Map {
    territories: Vec<Territory>,
}

impl Map {
    /// Build a map, rejecting duplicate territory names or factions.
    pub fn new(territories: Vec<Territory>) -> Result<Self, MapError> {
        if territories.is_empty() {
            return Err(MapError::EmptyMap);
        }
        for (i, territory) in territories.iter().enumerate() {
            for earlier in &territories[..i] {
                if earlier.name == territory.name {
                    return Err(MapError::DuplicateName(territory.name.clone()));
                }
                if earlier.faction == territory.faction {
                    return Err(MapError::DuplicateFaction(territory.faction.to_string()));
                }
            }
        }
        Ok(Map { territories })
    }

    /// Load territory definitions from a JSON array of records, validated
    /// through the same constructors as interactive registration.
    pub fn from_json_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let file = File::open(path)?;
        let records: Vec<TerritoryRecord> = serde_json::from_reader(BufReader::new(file))?;
        let mut territories = Vec::with_capacity(records.len());
        for record in records {
            let faction = Faction::new(&record.faction)?;
            territories.push(Territory::new(&record.name, faction, record.troops)?);
        }
        Ok(Map::new(territories)?)
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// Exclusive borrows of two distinct entries.
    ///
    /// Panics if `a == b` or either index is out of range; callers validate
    /// selections before combat, so a violation here is a programming error.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Territory, &mut Territory) {
        assert!(a != b, "pair_mut requires two distinct territories");
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            (&mut left[a], &mut right[0])
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            (&mut right[0], &mut left[b])
        }
    }
}
