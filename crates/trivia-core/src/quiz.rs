//! Quiz rounds
//!
//! A round asks random questions from one category (or from all of them)
//! and never repeats a question it has already asked.

use rand::Rng;

use crate::{Question, QuestionBank, QuestionId, TriviaResult};

/// Questions asked so far in one quiz round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizRound {
    category: Option<String>,
    asked: Vec<QuestionId>,
}

impl QuizRound {
    /// Start a round, optionally limited to one category
    pub fn new(category: Option<String>) -> Self {
        Self {
            category,
            asked: Vec::new(),
        }
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Ids asked so far, oldest first
    pub fn asked(&self) -> &[QuestionId] {
        &self.asked
    }

    /// Ask the next question and remember it
    pub fn next<'a>(&mut self, bank: &'a QuestionBank) -> TriviaResult<&'a Question> {
        self.next_with(bank, &mut rand::thread_rng())
    }

    /// [`next`](Self::next) with a caller-supplied rng
    pub fn next_with<'a, R: Rng + ?Sized>(
        &mut self,
        bank: &'a QuestionBank,
        rng: &mut R,
    ) -> TriviaResult<&'a Question> {
        let question = bank.next_quiz_question_with(self.category(), &self.asked, rng)?;
        self.asked.push(question.id);
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Difficulty, TriviaError};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bank() -> QuestionBank {
        QuestionBank::new((1..=3).map(|i| Question {
            id: QuestionId(i),
            question: format!("Question {}", i),
            answer: "A".to_string(),
            category: if i == 3 { "Art" } else { "Science" }.to_string(),
            difficulty: Difficulty::Level(1),
            rating: 0,
        }))
    }

    #[test]
    fn round_runs_until_category_is_used_up() {
        let bank = bank();
        let mut rng = StdRng::seed_from_u64(11);
        let mut round = QuizRound::new(Some("Science".to_string()));

        let first = round.next_with(&bank, &mut rng).unwrap().id;
        let second = round.next_with(&bank, &mut rng).unwrap().id;
        assert_ne!(first, second);
        assert_eq!(round.asked(), &[first, second]);

        let err = round.next_with(&bank, &mut rng).unwrap_err();
        assert!(matches!(err, TriviaError::NoQuestionsLeft));
        assert_eq!(round.asked().len(), 2);
    }

    #[test]
    fn round_without_category_covers_the_bank() {
        let bank = bank();
        let mut round = QuizRound::default();
        while round.next(&bank).is_ok() {}
        let mut asked = round.asked().to_vec();
        asked.sort();
        assert_eq!(asked, vec![QuestionId(1), QuestionId(2), QuestionId(3)]);
    }

    #[test]
    fn unknown_category_asks_nothing() {
        let mut round = QuizRound::new(Some("Astrology".to_string()));
        assert!(matches!(
            round.next(&bank()),
            Err(TriviaError::CategoryNotFound(_))
        ));
        assert!(round.asked().is_empty());
    }
}
