use maud::{Markup, html};

use crate::HTMX_PATH;

pub const DEFAULT_INDEX_TITLE: &str = "Golf Scorecard";

#[must_use]
pub fn render_index_template(title: &str) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            div class="app" {
                header class="app-header" {
                    h1 { (title) }
                    p { "Track your game with real-time calculations" }
                }
                div id="scorecard" hx-get="scorecard" hx-trigger="load" hx-swap="innerHTML" {
                    img alt="Scorecard loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
                }
            }
        }
    }
}
