use std::time::Duration;

pub const HOME_URL: &str = "/";
pub const GO_HOME_URL: &str = "/home";
pub const START_URL: &str = "/start";
pub const NEW_NOTES_URL: &str = "/new-notes";
pub const SUBMIT_NOTES_URL: &str = "/notes";
pub const TAKE_QUIZ_URL: &str = "/take-quiz";
pub const BACK_URL: &str = "/back";
pub const ANSWER_URL: &str = "/answer";
pub const NEXT_QUESTION_URL: &str = "/next";
pub const RETRY_QUIZ_URL: &str = "/retry";
pub const DONE_URL: &str = "/done";

pub const ANALYZE_API_URL: &str = "/api/analyze";
pub const GENERATE_IMAGE_API_URL: &str = "/api/generate-image";

pub const STUDY_SESSION_COOKIE_NAME: &str = "study_session";
pub const SESSION_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);
pub const SESSION_SWEEP_INTERVAL: Duration = Duration::from_secs(10 * 60);

pub const APP_NAME: &str = "Prepster";

// Analyzing screen polls while the service calls are in flight
pub const ANALYZING_POLL_SECONDS: u32 = 2;

// Upload limit for note photos
pub const MAX_UPLOAD_MB: usize = 10;
pub const MAX_UPLOAD_BYTES: usize = MAX_UPLOAD_MB * 1024 * 1024;
