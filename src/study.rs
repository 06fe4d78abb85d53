//! Screen state machine for one browser session.
//!
//! Each [`Screen`] variant carries exactly what it needs to render, so a
//! dashboard or quiz can never exist without its study pack.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::{
    history::History,
    images,
    models::{AnalysisResult, AnalyzeRequest},
    quiz::{Advance, QuizEngine},
    service::{ServiceError, StudyService},
};

pub const ANALYSIS_FAILED_NOTICE: &str = "Prepster hit a small bump! Let's try that again.";

/// A finished analysis: the study material plus its banner image.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyPack {
    pub result: AnalysisResult,
    pub image: String,
}

#[derive(Debug, Clone)]
pub enum Screen {
    Landing,
    Uploading { notice: Option<String> },
    Analyzing { attempt: u64 },
    Dashboard { pack: Arc<StudyPack> },
    Quiz { pack: Arc<StudyPack>, engine: QuizEngine },
    QuizResults { pack: Arc<StudyPack>, score: usize, total: usize },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Uploading { .. } => "uploading",
            Screen::Analyzing { .. } => "analyzing",
            Screen::Dashboard { .. } => "dashboard",
            Screen::Quiz { .. } => "quiz",
            Screen::QuizResults { .. } => "quiz-results",
        }
    }
}

/// Notes handed in on the upload screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    content: String,
    image: Option<String>,
}

impl Submission {
    pub fn new(content: impl Into<String>, image: Option<String>) -> Self {
        Self {
            content: content.into(),
            image: image.filter(|i| !i.is_empty()),
        }
    }

    /// Text alone or an image alone is enough.
    pub fn is_empty(&self) -> bool {
        self.content.trim().is_empty() && self.image.is_none()
    }

    pub fn into_request(self) -> AnalyzeRequest {
        AnalyzeRequest {
            content: self.content,
            image: self.image,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    Empty,
    NotUploading,
}

/// Identifies one analysis attempt so a late result can be matched to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket(u64);

#[derive(Debug, Clone)]
pub struct StudySession {
    screen: Screen,
    history: History,
    attempts: u64,
}

impl Default for StudySession {
    fn default() -> Self {
        Self {
            screen: Screen::Landing,
            history: History::default(),
            attempts: 0,
        }
    }
}

impl StudySession {
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// The study pack currently on display, if any.
    pub fn current_pack(&self) -> Option<&StudyPack> {
        match &self.screen {
            Screen::Dashboard { pack }
            | Screen::Quiz { pack, .. }
            | Screen::QuizResults { pack, .. } => Some(pack),
            _ => None,
        }
    }

    fn go(&mut self, screen: Screen) {
        tracing::debug!("screen {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
    }

    /// Navigation to the landing page works from every screen.
    pub fn home(&mut self) -> bool {
        self.go(Screen::Landing);
        true
    }

    pub fn start(&mut self) -> bool {
        if !matches!(self.screen, Screen::Landing) {
            return false;
        }
        self.go(Screen::Uploading { notice: None });
        true
    }

    /// "New study pack" from the navigation bar, any screen but the landing page.
    pub fn new_notes(&mut self) -> bool {
        if matches!(self.screen, Screen::Landing) {
            return false;
        }
        self.go(Screen::Uploading { notice: None });
        true
    }

    pub fn submit(&mut self, submission: &Submission) -> Result<AnalysisTicket, SubmitError> {
        if !matches!(self.screen, Screen::Uploading { .. }) {
            return Err(SubmitError::NotUploading);
        }
        if submission.is_empty() {
            return Err(SubmitError::Empty);
        }

        self.attempts += 1;
        self.go(Screen::Analyzing {
            attempt: self.attempts,
        });
        Ok(AnalysisTicket(self.attempts))
    }

    /// An upload that could not be read stays on the upload screen with `notice`.
    pub fn upload_failed(&mut self, notice: impl Into<String>) -> bool {
        if !matches!(self.screen, Screen::Uploading { .. }) {
            return false;
        }
        self.go(Screen::Uploading {
            notice: Some(notice.into()),
        });
        true
    }

    /// Applies the outcome of an analysis attempt. Returns `false` when the
    /// session has moved on since `ticket` was issued; the outcome is dropped.
    pub fn finish_analysis(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<StudyPack, ServiceError>,
    ) -> bool {
        match self.screen {
            Screen::Analyzing { attempt } if attempt == ticket.0 => {}
            _ => {
                tracing::info!("discarding result of stale analysis attempt {}", ticket.0);
                return false;
            }
        }

        match outcome {
            Ok(pack) => {
                tracing::info!("study pack ready: {}", pack.result.topic_title);
                self.go(Screen::Dashboard {
                    pack: Arc::new(pack),
                });
            }
            Err(e) => {
                tracing::error!("analysis attempt {} failed: {e}", ticket.0);
                self.go(Screen::Uploading {
                    notice: Some(ANALYSIS_FAILED_NOTICE.to_string()),
                });
            }
        }
        true
    }

    pub fn take_quiz(&mut self) -> bool {
        let Screen::Dashboard { pack } = &self.screen else {
            return false;
        };
        let pack = pack.clone();
        let engine = QuizEngine::new(pack.result.questions.clone());
        self.go(Screen::Quiz { pack, engine });
        true
    }

    pub fn back(&mut self) -> bool {
        if !matches!(self.screen, Screen::Dashboard { .. }) {
            return false;
        }
        self.go(Screen::Uploading { notice: None });
        true
    }

    /// Answers the current question with the option at `option_idx`.
    pub fn select_answer(&mut self, option_idx: usize) -> bool {
        let Screen::Quiz { engine, .. } = &mut self.screen else {
            return false;
        };
        let Some(option) = engine
            .current()
            .and_then(|q| q.options.get(option_idx))
            .cloned()
        else {
            return false;
        };
        engine.select_answer(&option)
    }

    pub fn advance(&mut self, now: DateTime<Local>) -> bool {
        let Screen::Quiz { pack, engine } = &mut self.screen else {
            return false;
        };

        match engine.advance() {
            Advance::Next => true,
            Advance::Completed { score, total } => {
                let pack = pack.clone();
                self.history = self.history.record(score, total, now);
                self.go(Screen::QuizResults { pack, score, total });
                true
            }
            Advance::Finished => false,
        }
    }

    pub fn retry(&mut self) -> bool {
        let Screen::QuizResults { pack, .. } = &self.screen else {
            return false;
        };
        let pack = pack.clone();
        let engine = QuizEngine::new(pack.result.questions.clone());
        self.go(Screen::Quiz { pack, engine });
        true
    }

    pub fn done(&mut self) -> bool {
        let Screen::QuizResults { pack, .. } = &self.screen else {
            return false;
        };
        let pack = pack.clone();
        self.go(Screen::Dashboard { pack });
        true
    }
}

/// Runs both service calls in order: the analysis, then the banner image.
/// Only the analysis can fail; image problems fall back to a placeholder.
pub async fn run_analysis(
    service: &dyn StudyService,
    submission: Submission,
) -> Result<StudyPack, ServiceError> {
    let result = service.analyze(submission.into_request()).await?;
    let generated = service.generate_image(&result.image_prompt).await;
    let image = images::resolve_topic_image(&result.topic_title, generated);
    Ok(StudyPack { result, image })
}
