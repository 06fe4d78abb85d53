use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header(show_actions: bool) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::HOME_URL) hx-post=(names::GO_HOME_URL) {
                            strong { (names::APP_NAME) }
                        }
                    }
                }
                ul {
                    @if show_actions {
                        li {
                            button."outline" hx-post=(names::NEW_NOTES_URL) { "New Study Pack" }
                        }
                    }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

/// The swappable part of every page: navigation plus the current screen.
fn app(body: Markup, show_actions: bool) -> Markup {
    html! {
        div #app {
            (header(show_actions))
            main { (body) }
        }
    }
}

pub fn page(title: &str, body: Markup, show_actions: bool) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            (js())
            (icon())

            title { (format!("{title} - {}", names::APP_NAME)) }
        }

        body."container" hx-target="#app" hx-swap="outerHTML" {
            (app(body, show_actions))
        }
    }
}

pub fn titled(title: &str, body: Markup, show_actions: bool) -> Markup {
    html! {
        title { (title) " - " (names::APP_NAME) }
        (app(body, show_actions))
    }
}

/// Full document for plain requests, fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, show_actions: bool) -> Markup {
    if is_htmx {
        titled(title, body, show_actions)
    } else {
        page(title, body, show_actions)
    }
}
