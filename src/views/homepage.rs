use maud::{html, Markup};

use crate::{names, views::components};

pub fn landing_page() -> Markup {
    html! {
        section.landing-hero {
            h1 { "Meet " mark { (names::APP_NAME) } }
            p.landing-hero-desc {
                "Your notebook's new best friend. We turn raw ideas into rocket fuel for your exams."
            }
            div.landing-cta {
                (components::intent_button(names::START_URL, "Start My Journey", ""))
            }
        }

        section.landing-features {
            div.landing-features-grid {
                article.landing-feature-card {
                    h3 { "Summaries" }
                    p { "The core idea of your notes in one paragraph, plus the key points worth remembering." }
                }
                article.landing-feature-card {
                    h3 { "Quizzes" }
                    p { "Multiple-choice questions with an explanation for every answer." }
                }
                article.landing-feature-card {
                    h3 { "Progress" }
                    p { "Your last ten scores, so you can watch them climb." }
                }
            }
        }
    }
}
