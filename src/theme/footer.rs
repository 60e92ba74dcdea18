//! Footer content block.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::markup::Markup;

/// Placeholder in footer text replaced by the current calendar year.
pub const YEAR_PLACEHOLDER: &str = "{year}";

/// Evaluated footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Footer {
    pub text: Markup,
}

impl Footer {
    /// Evaluate a footer template against the clock.
    ///
    /// The year is read once here. Templates without the placeholder are
    /// passed through unchanged.
    pub fn evaluate(template: &Markup, clock: &dyn Clock) -> Self {
        let year = clock.current_year().to_string();
        Self {
            text: template.replace_text(YEAR_PLACEHOLDER, &year),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::clock::FixedClock;

    fn template() -> Markup {
        Markup::element("span", vec!["{year} © TurboCore.".into()])
    }

    #[test]
    fn test_evaluate_embeds_year() {
        let footer = Footer::evaluate(&template(), &FixedClock(2025));
        assert_eq!(footer.text.plain_text(), "2025 © TurboCore.");
        assert_eq!(footer.text.render_html(), "<span>2025 © TurboCore.</span>");
    }

    #[test]
    fn test_evaluate_is_idempotent_on_literal_text() {
        let footer = Footer::evaluate(&template(), &FixedClock(2025));
        let again = Footer::evaluate(&footer.text, &FixedClock(2031));
        assert_eq!(again, footer);
    }
}
