//! Identify the sour note
//!
//! A melody is five notes drawn with replacement; one position is tagged
//! sour. The tag decorates the pitch already drawn there, it is not a
//! fresh draw.

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::notes::{Note, NOTES};

pub const MELODY_LENGTH: usize = 5;
const SOUR_SUFFIX: &str = "_sour";

pub const CORRECT_MESSAGE: &str = "Correct! You identified the sour note!";
pub const INCORRECT_MESSAGE: &str = "Incorrect! Try again.";

/// A melody position. On the wire a sour note is its pitch plus `_sour`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MelodyNote {
    pub note: Note,
    pub sour: bool,
}

impl MelodyNote {
    pub fn clean(note: Note) -> Self {
        Self { note, sour: false }
    }

    pub fn soured(self) -> Self {
        Self { sour: true, ..self }
    }
}

impl fmt::Display for MelodyNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sour {
            write!(f, "{}{}", self.note, SOUR_SUFFIX)
        } else {
            write!(f, "{}", self.note)
        }
    }
}

impl Serialize for MelodyNote {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MelodyNote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let (token, sour) = match raw.strip_suffix(SOUR_SUFFIX) {
            Some(base) => (base, true),
            None => (raw.as_str(), false),
        };
        let note = Note::parse(token)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown note: {}", raw)))?;
        Ok(Self { note, sour })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourMelody {
    pub melody: Vec<MelodyNote>,
    pub sour_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourVerdict {
    pub correct: bool,
    pub message: String,
}

pub fn generate_sour_melody<R: Rng + ?Sized>(rng: &mut R) -> SourMelody {
    let mut melody: Vec<MelodyNote> = (0..MELODY_LENGTH)
        .map(|_| MelodyNote::clean(NOTES[rng.gen_range(0..NOTES.len())]))
        .collect();
    let sour_index = rng.gen_range(0..MELODY_LENGTH);
    melody[sour_index] = melody[sour_index].soured();
    SourMelody { melody, sour_index }
}

/// Plain index comparison. `correct_index` comes from the client.
pub fn check_sour_note(guessed_index: i64, correct_index: i64) -> SourVerdict {
    let correct = guessed_index == correct_index;
    let message = if correct { CORRECT_MESSAGE } else { INCORRECT_MESSAGE };
    SourVerdict {
        correct,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::rng::create_rng;

    #[test]
    fn test_melody_shape() {
        let mut rng = create_rng(Some(3));
        for _ in 0..100 {
            let round = generate_sour_melody(&mut rng);
            assert_eq!(round.melody.len(), MELODY_LENGTH);
            assert!(round.sour_index < MELODY_LENGTH);
            for (i, n) in round.melody.iter().enumerate() {
                assert_eq!(n.sour, i == round.sour_index);
            }
        }
    }

    #[test]
    fn test_sour_index_covers_every_position() {
        let mut rng = create_rng(Some(11));
        let mut hits = [false; MELODY_LENGTH];
        for _ in 0..200 {
            hits[generate_sour_melody(&mut rng).sour_index] = true;
        }
        assert!(hits.iter().all(|h| *h));
    }

    #[test]
    fn test_wire_format() {
        let sour = MelodyNote::clean(Note::Ga).soured();
        assert_eq!(serde_json::to_string(&sour).unwrap(), "\"Ga_sour\"");
        assert_eq!(serde_json::to_string(&MelodyNote::clean(Note::Sa2)).unwrap(), "\"Sa2\"");

        let parsed: MelodyNote = serde_json::from_str("\"Dha_sour\"").unwrap();
        assert_eq!(parsed, MelodyNote { note: Note::Dha, sour: true });
        assert!(serde_json::from_str::<MelodyNote>("\"Xa_sour\"").is_err());
    }

    #[test]
    fn test_check_sour_note() {
        let hit = check_sour_note(2, 2);
        assert!(hit.correct);
        assert_eq!(hit.message, CORRECT_MESSAGE);

        let miss = check_sour_note(1, 2);
        assert!(!miss.correct);
        assert_eq!(miss.message, INCORRECT_MESSAGE);
    }
}
