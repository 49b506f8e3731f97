//! Navarasa emotion game
//!
//! Each session holds a queue of the remaining emotion questions, the
//! emotion last handed out, and a running score. The queue is reshuffled
//! before every pop, so consumption order is re-randomized on each fetch
//! rather than fixed when the game is entered.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Shanta,
    Veera,
    Shringara,
    Karuna,
    Adbhuta,
    Bhayanaka,
}

impl Emotion {
    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Shanta => "Shanta",
            Emotion::Veera => "Veera",
            Emotion::Shringara => "Shringara",
            Emotion::Karuna => "Karuna",
            Emotion::Adbhuta => "Adbhuta",
            Emotion::Bhayanaka => "Bhayanaka",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionQuestion {
    pub emotion: Emotion,
    pub audio: &'static str,
}

/// The closed question universe, in presentation order.
pub const NAVARASA_AUDIO: [EmotionQuestion; 6] = [
    EmotionQuestion { emotion: Emotion::Shanta, audio: "static/audio/shanta.mp3" },
    EmotionQuestion { emotion: Emotion::Veera, audio: "static/audio/veera.mp3" },
    EmotionQuestion { emotion: Emotion::Shringara, audio: "static/audio/shringara.mp3" },
    EmotionQuestion { emotion: Emotion::Karuna, audio: "static/audio/karuna.mp3" },
    EmotionQuestion { emotion: Emotion::Adbhuta, audio: "static/audio/adbhuta.mp3" },
    EmotionQuestion { emotion: Emotion::Bhayanaka, audio: "static/audio/bhayanaka.mp3" },
];

/// Every emotion label, offered as the answer options for each question
pub fn emotion_options() -> Vec<&'static str> {
    NAVARASA_AUDIO.iter().map(|q| q.emotion.label()).collect()
}

/// Response to a question fetch. Both fields are `None` once the queue
/// is exhausted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionPayload {
    pub audio: Option<&'static str>,
    pub options: Option<Vec<&'static str>>,
}

impl QuestionPayload {
    pub fn exhausted() -> Self {
        Self { audio: None, options: None }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavarasaSession {
    score: u32,
    questions: Vec<EmotionQuestion>,
    current_emotion: Option<Emotion>,
}

impl Default for NavarasaSession {
    /// Full, unshuffled queue. Every fetch shuffles first, so the initial
    /// order never leaks.
    fn default() -> Self {
        Self {
            score: 0,
            questions: NAVARASA_AUDIO.to_vec(),
            current_emotion: None,
        }
    }
}

impl NavarasaSession {
    /// Entering the game: zero score, full shuffled queue, nothing asked yet.
    pub fn enter<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut session = Self::default();
        session.questions.shuffle(rng);
        session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn remaining(&self) -> usize {
        self.questions.len()
    }

    pub fn current_emotion(&self) -> Option<Emotion> {
        self.current_emotion
    }

    /// Shuffle what is left, pop one, remember its emotion.
    pub fn next_question<R: Rng + ?Sized>(&mut self, rng: &mut R) -> QuestionPayload {
        self.questions.shuffle(rng);
        match self.questions.pop() {
            Some(question) => {
                self.current_emotion = Some(question.emotion);
                QuestionPayload {
                    audio: Some(question.audio),
                    options: Some(emotion_options()),
                }
            }
            None => QuestionPayload::exhausted(),
        }
    }

    /// Compare against the server-held emotion. The current emotion is left
    /// in place, so a repeated correct submission scores again. Before any
    /// question has been fetched nothing matches, not even an empty answer;
    /// the reply then carries `correct_answer: ""` and the unchanged score.
    pub fn submit_answer(&mut self, answer: &str) -> AnswerOutcome {
        let correct_answer = self
            .current_emotion
            .map(|e| e.label().to_string())
            .unwrap_or_default();
        let correct = self.current_emotion.is_some() && answer == correct_answer;
        if correct {
            self.score += 1;
        }
        AnswerOutcome {
            correct,
            correct_answer,
            score: self.score,
        }
    }
}
