//! Small query helpers over parsed markup
//!
//! Text helpers follow the conventions of jQuery-style `.text()`: text of
//! every matched element is concatenated, then trimmed. Attribute helpers
//! read from the first match only.

use crate::MarkupError;
use scraper::{ElementRef, Selector};

/// Compiles a CSS selector
pub(crate) fn selector(css: &str) -> Result<Selector, MarkupError> {
    Selector::parse(css).map_err(|e| MarkupError::Selector {
        selector: css.to_string(),
        message: format!("{:?}", e),
    })
}

/// Trimmed text of every element matching `sel` under `scope`
pub(crate) fn text_of(scope: ElementRef<'_>, sel: &Selector) -> String {
    scope
        .select(sel)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Trimmed text of the `n`th element matching `sel`, empty if there is none
pub(crate) fn nth_text(scope: ElementRef<'_>, sel: &Selector, n: usize) -> String {
    scope
        .select(sel)
        .nth(n)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed text of the element itself
pub(crate) fn own_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute of the first element matching `sel`
pub(crate) fn first_attr(scope: ElementRef<'_>, sel: &Selector, attr: &str) -> Option<String> {
    scope
        .select(sel)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Value half of a space-separated label such as `"Views: 1.2M"`
///
/// Takes the second token of the trimmed text split on single spaces.
/// Labels with more words than expected, or a changed label format, yield a
/// different token; callers get whatever the site prints in that position.
///
/// # Examples
///
/// ```
/// use dramabox_scraper::extract::label_value;
///
/// assert_eq!(label_value("Views: 1.2M"), Some("1.2M".to_string()));
/// assert_eq!(label_value("80 Episodes"), Some("Episodes".to_string()));
/// assert_eq!(label_value(""), None);
/// ```
pub fn label_value(text: &str) -> Option<String> {
    text.trim().split(' ').nth(1).map(str::to_string)
}
