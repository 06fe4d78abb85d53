use maud::{html, Markup};

use crate::{history, names, quiz::QuizEngine, views::components};

pub fn question(engine: &QuizEngine) -> Markup {
    let Some(q) = engine.current() else {
        return html! {
            article.question {
                p { "This study pack has no questions." }
                (components::intent_button(names::NEXT_QUESTION_URL, "Finish", ""))
            }
        };
    };

    let total = engine.total();
    let position = engine.index() + 1;
    let progress = history::percentage(position, total);
    let selected = engine.selected();
    let answered_correctly = selected == Some(q.correct_answer.as_str());

    html! {
        div.quiz-progress {
            span { "Mission " strong { (position) } " of " (total) }
            span { (progress) "% To Mastery" }
        }
        progress value=(progress) max="100" {}

        article.question {
            h3 { (q.question) }

            div.options {
                @for (idx, option) in q.options.iter().enumerate() {
                    @let class = option_class(engine.is_answered(), option == &q.correct_answer, Some(option.as_str()) == selected);
                    @if engine.is_answered() {
                        button type="button" class=(class) disabled { (option) }
                    } @else {
                        button type="button" class=(class)
                               hx-post=(names::ANSWER_URL)
                               hx-vals=(format!(r#"{{"option": "{idx}"}}"#)) {
                            (option)
                        }
                    }
                }
            }

            @if engine.is_answered() {
                div class=(if answered_correctly { "feedback correct" } else { "feedback incorrect" }) {
                    h4 {
                        @if answered_correctly { "Spot on!" } @else { "Not quite." }
                    }
                    p { (q.explanation) }
                }
                @let label = if engine.is_last() { "Finish" } else { "Next" };
                (components::intent_button(names::NEXT_QUESTION_URL, label, ""))
            }
        }
    }
}

fn option_class(answered: bool, is_correct: bool, is_selected: bool) -> &'static str {
    match (answered, is_correct, is_selected) {
        (true, true, _) => "option correct",
        (true, false, true) => "option incorrect",
        (false, _, true) => "option selected",
        _ => "option outline",
    }
}

pub fn verdict(percentage: u32) -> &'static str {
    if percentage >= 80 {
        "Pure Brilliance!"
    } else if percentage >= 50 {
        "Solid Progress!"
    } else {
        "Keep Pushing!"
    }
}

pub fn results(score: usize, total: usize) -> Markup {
    let percentage = history::percentage(score, total);

    html! {
        article.quiz-results {
            h2 { "Mission Accomplished!" }
            p { (names::APP_NAME) " is proud of you!" }

            p.score { strong { (score) "/" (total) } }
            progress value=(percentage) max="100" {}
            p { (percentage) "% Total Points" }

            p class=(if percentage >= 80 { "verdict high" } else { "verdict" }) { (verdict(percentage)) }

            div.grid {
                (components::intent_button(names::RETRY_QUIZ_URL, "Re-run Mission", "secondary"))
                (components::intent_button(names::DONE_URL, "Review Insights", ""))
            }
        }
    }
}
