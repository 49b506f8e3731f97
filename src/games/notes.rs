//! Note vocabulary and level table
//!
//! Both tables are fixed at compile time and never mutated.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GameError, GameResult};

/// One of the twelve solfege tokens: two octaves of seven degrees, upper
/// octave marked with a `2` suffix on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Note {
    Sa,
    Re,
    Ga,
    Ma,
    Pa,
    Dha,
    Ni,
    Sa2,
    Re2,
    Ga2,
    Ma2,
    Pa2,
}

/// The ordered vocabulary
pub const NOTES: [Note; 12] = [
    Note::Sa,
    Note::Re,
    Note::Ga,
    Note::Ma,
    Note::Pa,
    Note::Dha,
    Note::Ni,
    Note::Sa2,
    Note::Re2,
    Note::Ga2,
    Note::Ma2,
    Note::Pa2,
];

impl Note {
    pub fn as_str(&self) -> &'static str {
        match self {
            Note::Sa => "Sa",
            Note::Re => "Re",
            Note::Ga => "Ga",
            Note::Ma => "Ma",
            Note::Pa => "Pa",
            Note::Dha => "Dha",
            Note::Ni => "Ni",
            Note::Sa2 => "Sa2",
            Note::Re2 => "Re2",
            Note::Ga2 => "Ga2",
            Note::Ma2 => "Ma2",
            Note::Pa2 => "Pa2",
        }
    }

    pub fn parse(token: &str) -> Option<Note> {
        NOTES.iter().copied().find(|n| n.as_str() == token)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-level round configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub id: u8,
    pub pattern_length: usize,
    pub points: u32,
}

pub const LEVELS: [Level; 3] = [
    Level { id: 1, pattern_length: 3, points: 10 },
    Level { id: 2, pattern_length: 5, points: 20 },
    Level { id: 3, pattern_length: 7, points: 30 },
];

impl Level {
    /// Look up a level by its key. Anything outside the table is rejected
    /// rather than clamped.
    pub fn get(key: i64) -> GameResult<Level> {
        LEVELS
            .iter()
            .copied()
            .find(|l| i64::from(l.id) == key)
            .ok_or(GameError::InvalidLevel(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_is_distinct() {
        let unique: HashSet<_> = NOTES.iter().collect();
        assert_eq!(unique.len(), 12);
    }

    #[test]
    fn test_note_wire_format() {
        assert_eq!(serde_json::to_string(&Note::Dha).unwrap(), "\"Dha\"");
        assert_eq!(serde_json::from_str::<Note>("\"Ga2\"").unwrap(), Note::Ga2);
        assert_eq!(Note::parse("Pa2"), Some(Note::Pa2));
        assert_eq!(Note::parse("Xa"), None);
    }

    #[test]
    fn test_level_lookup() {
        assert_eq!(Level::get(1).unwrap().points, 10);
        assert_eq!(Level::get(2).unwrap().pattern_length, 5);
        assert_eq!(Level::get(3).unwrap().pattern_length, 7);
        assert_eq!(Level::get(0), Err(GameError::InvalidLevel(0)));
        assert_eq!(Level::get(4), Err(GameError::InvalidLevel(4)));
        assert_eq!(Level::get(-1), Err(GameError::InvalidLevel(-1)));
    }
}
