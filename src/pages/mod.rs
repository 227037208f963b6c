mod question_list;
mod quiz;

pub use question_list::QuestionList;
pub use quiz::QuizView;
