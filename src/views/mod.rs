pub mod components;
pub mod dashboard;
pub mod homepage;
pub mod layout;
pub mod quiz;
pub mod upload;

pub use layout::{page, render, titled};

use maud::Markup;

use crate::study::{Screen, StudySession};

/// Title and body for whatever screen the session is on.
pub fn screen(session: &StudySession) -> (&'static str, Markup) {
    match session.screen() {
        Screen::Landing => ("Welcome", homepage::landing_page()),
        Screen::Uploading { notice } => ("Upload Notes", upload::upload(notice.as_deref())),
        Screen::Analyzing { .. } => ("Analyzing", upload::analyzing()),
        Screen::Dashboard { pack } => ("Study Pack", dashboard::dashboard(pack, session.history())),
        Screen::Quiz { engine, .. } => ("Quiz", quiz::question(engine)),
        Screen::QuizResults { score, total, .. } => ("Quiz Results", quiz::results(*score, *total)),
    }
}

/// Renders the session's current screen.
pub fn current(is_htmx: bool, session: &StudySession) -> Markup {
    let show_actions = !matches!(session.screen(), Screen::Landing);
    let (title, body) = screen(session);
    render(is_htmx, title, body, show_actions)
}
