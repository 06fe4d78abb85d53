use crate::models::{Question, Questions, UserAnswer};

/// Outcome of [`QuizEngine::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the next question.
    Next,
    /// The last question was left; reported exactly once per attempt.
    Completed { score: usize, total: usize },
    /// The attempt had already completed, nothing changed.
    Finished,
}

/// A single walk through a fixed, ordered question list.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    questions: Questions,
    index: usize,
    selected: Option<String>,
    answered: bool,
    score: usize,
    answers: Vec<UserAnswer>,
    completed: bool,
}

impl QuizEngine {
    pub fn new(questions: Questions) -> Self {
        Self {
            questions,
            index: 0,
            selected: None,
            answered: false,
            score: 0,
            answers: Vec::new(),
            completed: false,
        }
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_answered(&self) -> bool {
        self.answered
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn answers(&self) -> &[UserAnswer] {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Records `option` for the current question. The first answer wins:
    /// returns `false` and changes nothing if the question is already answered.
    pub fn select_answer(&mut self, option: &str) -> bool {
        if self.answered || self.completed {
            return false;
        }
        let Some(question) = self.questions.get(self.index) else {
            return false;
        };

        let is_correct = option == question.correct_answer;
        if is_correct {
            self.score += 1;
        }
        self.answers.push(UserAnswer {
            question_index: self.index,
            answer: option.to_string(),
            is_correct,
            feedback: question.explanation.clone(),
        });
        self.selected = Some(option.to_string());
        self.answered = true;

        true
    }

    pub fn advance(&mut self) -> Advance {
        if self.completed {
            return Advance::Finished;
        }

        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.selected = None;
            self.answered = false;
            Advance::Next
        } else {
            self.completed = true;
            Advance::Completed {
                score: self.score,
                total: self.questions.len(),
            }
        }
    }
}
