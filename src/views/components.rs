use maud::{html, Markup};

/// Button that posts a user intent and swaps in the next screen.
pub fn intent_button(url: &str, label: &str, class: &str) -> Markup {
    html! {
        button type="button" class=(class) hx-post=(url) {
            (label)
        }
    }
}
