//! In-memory question bank
//!
//! QuestionBank owns the questions a host renders as cards and applies the
//! cards' commands to them. Questions are always listed in ascending id order.

use std::collections::BTreeMap;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::{NewQuestion, Question, QuestionAction, QuestionId, TriviaError, TriviaResult};

/// Default number of questions per page
pub const RESULTS_PER_PAGE: usize = 10;

/// What a successfully applied command changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Rated { id: QuestionId, rating: u8 },
    Deleted { id: QuestionId },
}

impl ActionOutcome {
    pub fn id(&self) -> QuestionId {
        match self {
            ActionOutcome::Rated { id, .. } | ActionOutcome::Deleted { id } => *id,
        }
    }
}

/// Listing request: page number, size and optional filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based; 0 is read as 1
    pub page: usize,
    pub page_size: usize,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: RESULTS_PER_PAGE,
            category: None,
            search: None,
        }
    }
}

impl PageQuery {
    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }
}

/// One page of questions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub questions: Vec<Question>,
    /// Matching questions before pagination
    pub total_questions: usize,
    pub current_category: Option<String>,
    pub page: usize,
    pub page_size: usize,
}

impl Page {
    /// Number of pages the matching questions span (at least 1)
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            return 1;
        }
        self.total_questions.div_ceil(self.page_size).max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }
}

/// Shape of a question file: a bare array or an object with a `questions` key
#[derive(Deserialize)]
#[serde(untagged)]
enum QuestionFile {
    Bare(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

/// In-memory store of trivia questions keyed by id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBank {
    questions: BTreeMap<QuestionId, Question>,
}

impl QuestionBank {
    /// Create a bank from a set of questions
    ///
    /// A later question with a duplicate id replaces the earlier one.
    pub fn new(questions: impl IntoIterator<Item = Question>) -> Self {
        let questions = questions.into_iter().map(|q| (q.id, q)).collect();
        Self { questions }
    }

    /// Parse a question set from JSON
    pub fn from_json_str(json: &str) -> TriviaResult<Self> {
        let file: QuestionFile = serde_json::from_str(json)?;
        let questions = match file {
            QuestionFile::Bare(questions) | QuestionFile::Wrapped { questions } => questions,
        };
        tracing::debug!(count = questions.len(), "Parsed question set");
        Ok(Self::new(questions))
    }

    /// Load a question set from a JSON file
    pub fn load(path: impl AsRef<Path>) -> TriviaResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let bank = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), count = bank.len(), "Loaded questions");
        Ok(bank)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.get(&id)
    }

    /// All questions in id order
    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.values()
    }

    /// Apply a card command to the question it came from
    ///
    /// Ratings are stored verbatim.
    pub fn apply(&mut self, id: QuestionId, action: QuestionAction) -> TriviaResult<ActionOutcome> {
        match action {
            QuestionAction::Rate(rating) => {
                let question = self
                    .questions
                    .get_mut(&id)
                    .ok_or(TriviaError::QuestionNotFound(id))?;
                question.rating = i32::from(rating);
                tracing::debug!(%id, rating, "Rated question");
                Ok(ActionOutcome::Rated { id, rating })
            }
            QuestionAction::Delete => {
                self.questions
                    .remove(&id)
                    .ok_or(TriviaError::QuestionNotFound(id))?;
                tracing::debug!(%id, "Deleted question");
                Ok(ActionOutcome::Deleted { id })
            }
        }
    }

    /// Add a question with rating 0 and return its new id
    pub fn add(&mut self, new: NewQuestion) -> TriviaResult<QuestionId> {
        if new.question.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion("question text is empty".to_string()));
        }
        if new.answer.trim().is_empty() {
            return Err(TriviaError::InvalidQuestion("answer text is empty".to_string()));
        }

        let id = self.next_id()?;
        self.questions.insert(
            id,
            Question {
                id,
                question: new.question,
                answer: new.answer,
                category: new.category,
                difficulty: new.difficulty,
                rating: 0,
            },
        );
        tracing::debug!(%id, "Added question");
        Ok(id)
    }

    fn next_id(&self) -> TriviaResult<QuestionId> {
        match self.questions.keys().next_back() {
            Some(last) => last
                .0
                .checked_add(1)
                .map(QuestionId)
                .ok_or(TriviaError::IdSpaceExhausted(*last)),
            None => Ok(QuestionId(1)),
        }
    }

    /// Distinct categories, sorted
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            self.questions.values().map(|q| q.category.clone()).collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Pick a random quiz question that has not been asked yet
    ///
    /// With no category every question is eligible. Fails with
    /// `CategoryNotFound` for an unknown category and `NoQuestionsLeft` once
    /// every eligible question is in `previous`.
    pub fn next_quiz_question(
        &self,
        category: Option<&str>,
        previous: &[QuestionId],
    ) -> TriviaResult<&Question> {
        self.next_quiz_question_with(category, previous, &mut rand::thread_rng())
    }

    /// [`next_quiz_question`](Self::next_quiz_question) with a caller-supplied rng
    pub fn next_quiz_question_with<R: Rng + ?Sized>(
        &self,
        category: Option<&str>,
        previous: &[QuestionId],
        rng: &mut R,
    ) -> TriviaResult<&Question> {
        if let Some(category) = category {
            if !self.questions.values().any(|q| q.category == category) {
                return Err(TriviaError::CategoryNotFound(category.to_string()));
            }
        }

        let remaining: Vec<&Question> = self
            .questions
            .values()
            .filter(|q| category.is_none_or(|c| q.category == c))
            .filter(|q| !previous.contains(&q.id))
            .collect();

        let question = remaining
            .choose(rng)
            .copied()
            .ok_or(TriviaError::NoQuestionsLeft)?;
        tracing::debug!(
            id = %question.id,
            remaining = remaining.len(),
            "Picked quiz question"
        );
        Ok(question)
    }

    /// List one page of questions matching the query
    pub fn page(&self, query: &PageQuery) -> TriviaResult<Page> {
        if let Some(category) = &query.category {
            if !self.questions.values().any(|q| &q.category == category) {
                return Err(TriviaError::CategoryNotFound(category.clone()));
            }
        }

        let search = query.search.as_deref().filter(|term| !term.is_empty());
        let matching: Vec<&Question> = self
            .questions
            .values()
            .filter(|q| query.category.as_ref().is_none_or(|c| &q.category == c))
            .filter(|q| search.is_none_or(|term| q.matches_search(term)))
            .collect();

        let page = query.page.max(1);
        let start = (page - 1).saturating_mul(query.page_size);
        let questions = matching
            .iter()
            .skip(start)
            .take(query.page_size)
            .map(|q| (*q).clone())
            .collect();

        Ok(Page {
            questions,
            total_questions: matching.len(),
            current_category: query.category.clone(),
            page,
            page_size: query.page_size,
        })
    }
}
