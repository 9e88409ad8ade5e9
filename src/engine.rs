//! Question/answer provider contract
//!
//! The core consumes exactly one question/answer pair per round and never
//! validates or scores answers; generation strategy belongs to the host.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// One question/answer pair, consumed at round start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answer: i32,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: i32) -> Self {
        Self {
            text: text.into(),
            answer,
        }
    }
}

/// Supplies the current question and expected answer for each round
pub trait GameEngine {
    /// Produce the pair for the round being prepared
    fn next_question(&mut self) -> Question;
}

/// Minimal counting game: continue the sequence "n, n+1, n+2, ?"
#[derive(Debug, Clone)]
pub struct CountingEngine {
    rng: Pcg32,
}

impl CountingEngine {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl GameEngine for CountingEngine {
    fn next_question(&mut self) -> Question {
        // Answers stay within 1..=10 so the default ten placeholder
        // labels include the answer
        let start = self.rng.random_range(1..=7);
        Question::new(
            format!("{}, {}, {}, ?", start, start + 1, start + 2),
            start + 3,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_continues_the_sequence() {
        let mut engine = CountingEngine::new(12);
        for _ in 0..50 {
            let q = engine.next_question();
            let first: i32 = q.text.split(',').next().unwrap().trim().parse().unwrap();
            assert_eq!(q.answer, first + 3);
            assert!((4..=10).contains(&q.answer));
        }
    }

    #[test]
    fn test_same_seed_same_questions() {
        let mut a = CountingEngine::new(99);
        let mut b = CountingEngine::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_question(), b.next_question());
        }
    }
}
