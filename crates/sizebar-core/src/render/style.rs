/// Emphasis-to-ANSI style mapping.
use crate::model::Emphasis;
use owo_colors::{OwoColorize, Style};

/// One style per emphasis tier, matching the five classification levels.
fn style_for(emphasis: Emphasis) -> Style {
    match emphasis {
        Emphasis::Muted => Style::new().bright_black(),
        Emphasis::Low => Style::new().yellow(),
        Emphasis::Medium => Style::new().red(),
        Emphasis::High => Style::new().cyan(),
        Emphasis::Max => Style::new().magenta(),
    }
}

/// Apply the tier's style to a piece of text.
pub(crate) fn paint(text: &str, emphasis: Emphasis) -> String {
    text.style(style_for(emphasis)).to_string()
}

/// Bold, for the grand-total summary value.
pub(crate) fn bold(text: &str) -> String {
    text.bold().to_string()
}
