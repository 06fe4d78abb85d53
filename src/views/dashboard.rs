use maud::{html, Markup};

use crate::{
    history::History,
    names,
    study::StudyPack,
    views::components,
};

pub fn dashboard(pack: &StudyPack, history: &History) -> Markup {
    let result = &pack.result;

    html! {
        figure.topic-banner {
            img src=(pack.image) alt="Topic visuals";
            figcaption { h1 { (result.topic_title) } }
        }

        div.grid {
            div {
                article {
                    h2 { "The Core Idea" }
                    blockquote { (result.summary) }
                }

                section.key-points {
                    @for point in &result.key_points {
                        article { (point) }
                    }
                }

                article.quiz-cta {
                    h3 { "Ready to test yourself?" }
                    p { (result.questions.len()) " questions are waiting." }
                    (components::intent_button(names::TAKE_QUIZ_URL, "Take the Quiz", ""))
                }
            }

            aside {
                article {
                    h4 { "Quotes" }
                    @for quote in &result.quotes {
                        blockquote { (quote) }
                    }
                }

                (score_history(history))

                (components::intent_button(names::BACK_URL, "Analyze New Notes", "secondary outline"))
            }
        }
    }
}

fn score_history(history: &History) -> Markup {
    html! {
        article.score-history {
            h4 { "Score History" }
            @if history.is_empty() {
                p { "Take a quiz to start tracking your progress." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "Time" }
                            th { "Score" }
                            th { "Questions" }
                        }
                    }
                    tbody {
                        @for entry in history.scores() {
                            tr {
                                td { (entry.date) }
                                td {
                                    progress value=(entry.score) max="100" {}
                                    strong { (entry.score) "%" }
                                }
                                td { (entry.total) }
                            }
                        }
                    }
                }
            }
        }
    }
}
