use maud::{html, Markup};

use crate::names;

pub fn upload(notice: Option<&str>) -> Markup {
    html! {
        article {
            h2 { "Upload Notes" }

            @if let Some(notice) = notice {
                p.notice role="alert" { (notice) }
            }

            form hx-post=(names::SUBMIT_NOTES_URL)
                 hx-encoding="multipart/form-data"
                 hx-indicator="#analyzing-indicator"
                 hx-disabled-elt="find button" {
                div.grid {
                    label {
                        "The Written Word"
                        textarea name="content" rows="12" placeholder="Dump your thoughts here..." {}
                    }
                    label {
                        "Snap a Photo"
                        input type="file" name="image" accept="image/*" capture="environment";
                        small { "Handwritten pages work too." }
                    }
                }
                button type="submit" { "Analyze My Notes" }
            }

            div #analyzing-indicator.htmx-indicator {
                (working("Reading your mind (and notes)..."))
            }
        }
    }
}

fn working(step: &str) -> Markup {
    html! {
        div.analyzing aria-busy="true" {
            h2 { (names::APP_NAME) " is hard at work..." }
            p { (step) }
        }
    }
}

/// Shown when the page is loaded while an analysis is still running.
pub fn analyzing() -> Markup {
    html! {
        div hx-get=(names::HOME_URL)
            hx-trigger=(format!("every {}s", names::ANALYZING_POLL_SECONDS)) {
            (working("Drawing some cool diagrams..."))
        }
    }
}
