//! Games Module
//!
//! Round content generators and answer evaluators for the three mini-games.

pub mod notes;
pub mod rng;
pub mod pattern;
pub mod sour;
pub mod navarasa;

pub use notes::{Level, Note, LEVELS, NOTES};
pub use rng::{create_rng, fork_rng, GameRng};
pub use pattern::{check_pattern, generate_pattern, PatternRound, PatternVerdict};
pub use sour::{check_sour_note, generate_sour_melody, MelodyNote, SourMelody, SourVerdict};
pub use navarasa::{AnswerOutcome, Emotion, NavarasaSession, QuestionPayload, NAVARASA_AUDIO};
