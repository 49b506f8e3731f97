//! Pattern recall
//!
//! The server does not keep the pattern it hands out. The client sends it
//! back with the attempt, so `check_pattern` trusts whatever it is given.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::notes::{Level, Note, NOTES};
use crate::error::GameResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRound {
    pub pattern: Vec<Note>,
    pub points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternVerdict {
    pub correct: bool,
    pub points: u32,
}

/// Draw `pattern_length` distinct notes: a random permutation of the
/// vocabulary, truncated.
pub fn generate_pattern<R: Rng + ?Sized>(level: i64, rng: &mut R) -> GameResult<PatternRound> {
    let level = Level::get(level)?;
    let mut pool = NOTES;
    let (chosen, _) = pool.partial_shuffle(rng, level.pattern_length);
    Ok(PatternRound {
        pattern: chosen.to_vec(),
        points: level.points,
    })
}

/// Order-sensitive comparison. An unknown level is rejected even when the
/// attempt is wrong.
pub fn check_pattern(user: &[Note], correct: &[Note], level: i64) -> GameResult<PatternVerdict> {
    let level = Level::get(level)?;
    let correct = user == correct;
    Ok(PatternVerdict {
        correct,
        points: if correct { level.points } else { 0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::games::rng::create_rng;
    use std::collections::HashSet;

    #[test]
    fn test_pattern_lengths_and_uniqueness() {
        let mut rng = create_rng(Some(7));
        for (level, len, points) in [(1, 3, 10), (2, 5, 20), (3, 7, 30)] {
            for _ in 0..50 {
                let round = generate_pattern(level, &mut rng).unwrap();
                assert_eq!(round.pattern.len(), len);
                assert_eq!(round.points, points);
                let unique: HashSet<_> = round.pattern.iter().collect();
                assert_eq!(unique.len(), len, "duplicate note in {:?}", round.pattern);
                assert!(round.pattern.iter().all(|n| NOTES.contains(n)));
            }
        }
    }

    #[test]
    fn test_invalid_level_rejected() {
        let mut rng = create_rng(Some(1));
        assert_eq!(generate_pattern(0, &mut rng), Err(GameError::InvalidLevel(0)));
        assert_eq!(generate_pattern(4, &mut rng), Err(GameError::InvalidLevel(4)));
    }

    #[test]
    fn test_patterns_vary() {
        let mut rng = create_rng(Some(99));
        let seen: HashSet<Vec<Note>> = (0..20)
            .map(|_| generate_pattern(3, &mut rng).unwrap().pattern)
            .collect();
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_check_pattern() {
        use Note::*;
        let verdict = check_pattern(&[Sa, Re, Ga], &[Sa, Re, Ga], 1).unwrap();
        assert_eq!(verdict, PatternVerdict { correct: true, points: 10 });

        let verdict = check_pattern(&[Sa, Re, Ga], &[Sa, Ga, Re], 1).unwrap();
        assert_eq!(verdict, PatternVerdict { correct: false, points: 0 });

        let verdict = check_pattern(&[Sa, Re], &[Sa, Re, Ga], 2).unwrap();
        assert!(!verdict.correct);

        let verdict = check_pattern(&[Pa2; 7], &[Pa2; 7], 3).unwrap();
        assert_eq!(verdict.points, 30);
    }

    #[test]
    fn test_check_pattern_invalid_level() {
        assert_eq!(
            check_pattern(&[Note::Sa], &[Note::Sa], 5),
            Err(GameError::InvalidLevel(5))
        );
    }
}
