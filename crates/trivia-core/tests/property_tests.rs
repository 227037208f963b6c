//! Property-based tests for the rating row, answer reveal and question bank
//!
//! Uses proptest to verify invariants that must hold for any input.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trivia_core::{
    checked_count, star_row, AnswerVisibility, Difficulty, PageQuery, Question, QuestionAction,
    QuestionBank, QuestionId, TriviaError, STAR_COUNT,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn category_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Science".to_string()),
        Just("Art".to_string()),
        Just("Geography".to_string()),
        Just("History".to_string()),
    ]
}

fn question_strategy() -> impl Strategy<Value = Question> {
    (
        1..500u64,
        prop::string::string_regex("[a-zA-Z0-9 ?]{1,60}").expect("valid regex"),
        category_strategy(),
        0..=5i32,
    )
        .prop_map(|(id, text, category, rating)| Question {
            id: QuestionId(id),
            question: text,
            answer: "answer".to_string(),
            category,
            difficulty: Difficulty::Level(1),
            rating,
        })
}

fn bank_strategy() -> impl Strategy<Value = QuestionBank> {
    prop::collection::vec(question_strategy(), 0..40).prop_map(QuestionBank::new)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Exactly `rating` stars are checked, and they form a prefix of the row
    #[test]
    fn in_range_rating_checks_prefix(rating in 0..=5i32) {
        let row = star_row(rating);
        let checked: Vec<bool> = row.iter().map(|s| s.checked).collect();
        let expected: Vec<bool> = (0..STAR_COUNT).map(|i| i < rating as usize).collect();
        prop_assert_eq!(checked, expected);
        prop_assert_eq!(row.iter().filter(|s| s.checked).count(), rating as usize);
    }

    /// Any rating at all renders without panicking and stays a prefix
    #[test]
    fn any_rating_renders_a_prefix(rating in any::<i32>()) {
        let row = star_row(rating);
        let count = row.iter().filter(|s| s.checked).count();
        prop_assert_eq!(count, checked_count(rating));
        prop_assert!(row.iter().take(count).all(|s| s.checked));
        prop_assert!(row.iter().skip(count).all(|s| !s.checked));
    }

    /// The star at position k always selects rating k
    #[test]
    fn star_selects_own_position(rating in any::<i32>(), index in 0..STAR_COUNT) {
        let star = star_row(rating)[index];
        prop_assert_eq!(star.action(), QuestionAction::Rate(index as u8 + 1));
    }

    /// An even number of toggles returns to the initial state
    #[test]
    fn toggle_parity(toggles in 0..50usize) {
        let mut state = AnswerVisibility::default();
        for _ in 0..toggles {
            state = state.toggled();
        }
        prop_assert_eq!(state.is_visible(), toggles % 2 == 1);
        prop_assert_eq!(
            state.toggle_label(),
            if toggles % 2 == 1 { "Hide Answer" } else { "Show Answer" }
        );
    }

    /// Walking every page yields each question exactly once, in id order
    #[test]
    fn pages_partition_the_bank(bank in bank_strategy(), page_size in 1..15usize) {
        let first = bank.page(&PageQuery::default().page_size(page_size)).unwrap();
        let mut seen = Vec::new();
        for page in 1..=first.page_count() {
            let listed = bank.page(&PageQuery::default().page(page).page_size(page_size)).unwrap();
            prop_assert!(listed.questions.len() <= page_size);
            seen.extend(listed.questions.into_iter().map(|q| q.id));
        }
        let all: Vec<QuestionId> = bank.iter().map(|q| q.id).collect();
        prop_assert_eq!(seen, all);
    }

    /// Rating a question changes nothing but that question's rating
    #[test]
    fn rate_touches_one_question(bank in bank_strategy(), pick in any::<prop::sample::Index>(), rating in 1..=5u8) {
        prop_assume!(!bank.is_empty());
        let target = *pick.get(&bank.iter().map(|q| q.id).collect::<Vec<_>>());

        let mut updated = bank.clone();
        updated.apply(target, QuestionAction::Rate(rating)).unwrap();

        prop_assert_eq!(updated.len(), bank.len());
        for (before, after) in bank.iter().zip(updated.iter()) {
            if before.id == target {
                prop_assert_eq!(after.rating, i32::from(rating));
            } else {
                prop_assert_eq!(before, after);
            }
        }
    }

    /// Deleting a question removes exactly that question
    #[test]
    fn delete_removes_one(bank in bank_strategy(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!bank.is_empty());
        let target = *pick.get(&bank.iter().map(|q| q.id).collect::<Vec<_>>());

        let mut updated = bank.clone();
        updated.apply(target, QuestionAction::Delete).unwrap();

        prop_assert_eq!(updated.len(), bank.len() - 1);
        prop_assert!(updated.get(target).is_none());
    }

    /// A quiz asks every eligible question exactly once, then runs dry
    #[test]
    fn quiz_asks_each_question_once(
        bank in bank_strategy(),
        category in prop::option::of(category_strategy()),
        seed in any::<u64>(),
    ) {
        let categories = bank.categories();
        prop_assume!(category.as_ref().is_none_or(|c| categories.contains(c)));

        let mut rng = StdRng::seed_from_u64(seed);
        let mut asked: Vec<QuestionId> = Vec::new();
        loop {
            match bank.next_quiz_question_with(category.as_deref(), &asked, &mut rng) {
                Ok(question) => {
                    prop_assert!(!asked.contains(&question.id));
                    if let Some(category) = &category {
                        prop_assert_eq!(&question.category, category);
                    }
                    asked.push(question.id);
                }
                Err(TriviaError::NoQuestionsLeft) => break,
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }

        let mut expected: Vec<QuestionId> = bank
            .iter()
            .filter(|q| category.as_ref().is_none_or(|c| &q.category == c))
            .map(|q| q.id)
            .collect();
        expected.sort();
        asked.sort();
        prop_assert_eq!(asked, expected);
    }
}
