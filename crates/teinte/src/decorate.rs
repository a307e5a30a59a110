//! Rewrites a single HTML document, painting labeled elements.
//!
//! This is the build-time replacement for the classic client-side snippet
//! that loops over `document.querySelectorAll('[data-pattern]')` on
//! `DOMContentLoaded` and sets each element's `backgroundColor`. Baking the
//! color into the markup ships no JavaScript and avoids a flash of
//! uncolored content.
use std::cell::RefCell;

use lol_html::{RewriteStrSettings, element, rewrite_str};
use rustc_hash::FxHashMap;

use crate::color::Color;
use crate::errors::DecorateError;

/// The result of decorating one document.
pub struct DecoratedDocument {
    /// The rewritten HTML. Identical to the input if no element matched.
    pub html: String,
    /// Every label encountered, with the color it was painted.
    pub labels: FxHashMap<String, Color>,
}

impl DecoratedDocument {
    /// Returns how many distinct labels were painted.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }
}

/// Paints every element carrying `pattern_attribute` with the background
/// color hashed from that attribute's value.
///
/// An existing `style` attribute is kept, the declaration is appended to it.
/// Markup without the attribute passes through untouched.
///
/// ## Example
/// ```rust
/// use teinte::decorate::decorate_html;
///
/// let decorated = decorate_html("<li data-pattern=\"rust\">Rust</li>", "data-pattern").unwrap();
/// assert_eq!(
///     decorated.html,
///     "<li data-pattern=\"rust\" style=\"background-color: #e49735\">Rust</li>"
/// );
/// ```
pub fn decorate_html(
    html: &str,
    pattern_attribute: &str,
) -> Result<DecoratedDocument, DecorateError> {
    let labels: RefCell<FxHashMap<String, Color>> = RefCell::new(FxHashMap::default());
    let selector = format!("[{}]", pattern_attribute);

    let element_content_handlers = vec![element!(selector, |el| {
        let Some(label) = el.get_attribute(pattern_attribute) else {
            return Ok(());
        };

        let color = *labels
            .borrow_mut()
            .entry(label)
            .or_insert_with_key(|label| Color::from_label(label));

        let declaration = format!("background-color: {}", color);
        let style = match el.get_attribute("style") {
            Some(style) if !style.trim().is_empty() => {
                format!("{}; {}", style.trim_end().trim_end_matches(';'), declaration)
            }
            _ => declaration,
        };

        el.set_attribute("style", &style)?;

        Ok(())
    })];

    let html = rewrite_str(
        html,
        RewriteStrSettings {
            element_content_handlers,
            ..RewriteStrSettings::new()
        },
    )
    .map_err(|source| DecorateError::RewriteFailed { source })?;

    Ok(DecoratedDocument {
        html,
        labels: labels.into_inner(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paints_a_labeled_element() {
        let decorated = decorate_html("<li data-pattern=\"posts\">Posts</li>", "data-pattern")
            .expect("rewriting should succeed");

        assert_eq!(
            decorated.html,
            "<li data-pattern=\"posts\" style=\"background-color: #d37b5e\">Posts</li>"
        );
        assert_eq!(decorated.label_count(), 1);
        assert_eq!(
            decorated.labels.get("posts"),
            Some(&Color::from_label("posts"))
        );
    }

    #[test]
    fn keeps_an_existing_style_attribute() {
        let decorated = decorate_html(
            "<div data-pattern=\"rust\" style=\"color: white;\">Rust</div>",
            "data-pattern",
        )
        .expect("rewriting should succeed");

        assert_eq!(
            decorated.html,
            "<div data-pattern=\"rust\" style=\"color: white; background-color: #e49735\">Rust</div>"
        );
    }

    #[test]
    fn leaves_unlabeled_markup_alone() {
        let html = "<ul><li>Plain</li><li class=\"tag\">Still plain</li></ul>";
        let decorated = decorate_html(html, "data-pattern").expect("rewriting should succeed");

        assert_eq!(decorated.html, html);
        assert!(decorated.labels.is_empty());
    }

    #[test]
    fn paints_every_match_and_reuses_colors() {
        let decorated = decorate_html(
            "<ul>\
             <li data-pattern=\"a\">one</li>\
             <li data-pattern=\"b\">two</li>\
             <li data-pattern=\"a\">three</li>\
             </ul>",
            "data-pattern",
        )
        .expect("rewriting should succeed");

        assert_eq!(decorated.label_count(), 2);
        assert_eq!(
            decorated.html.matches("background-color: #610000").count(),
            2
        );
        assert_eq!(
            decorated.html.matches("background-color: #620000").count(),
            1
        );
    }

    #[test]
    fn empty_label_is_painted_black() {
        let decorated = decorate_html("<span data-pattern=\"\"></span>", "data-pattern")
            .expect("rewriting should succeed");

        assert!(decorated.html.contains("background-color: #000000"));
    }

    #[test]
    fn honors_a_custom_attribute_name() {
        let decorated = decorate_html(
            "<li data-tag=\"rust\">Rust</li><li data-pattern=\"rust\">Rust</li>",
            "data-tag",
        )
        .expect("rewriting should succeed");

        assert_eq!(
            decorated.html,
            "<li data-tag=\"rust\" style=\"background-color: #e49735\">Rust</li>\
             <li data-pattern=\"rust\">Rust</li>"
        );
    }
}
