use maud::{Markup, html};

use crate::export::ExportFormat;

#[must_use]
pub fn render_export_bar() -> Markup {
    html! {
        div class="export-section" {
            @for format in ExportFormat::ALL {
                a class="export-btn" href=(format!("export/{}", format.extension())) download {
                    (format.label())
                }
            }
        }
    }
}
