//! Message formatting for rejections and help texts.
//!
//! Rules never build user-facing text directly. They hand a [`Template`] to a
//! [`MessageFormatter`], which selects the singular or plural form and fills
//! in the named parameters. Plugging in a different formatter is how callers
//! localize messages.

use std::sync::Arc;

/// A message before localization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    pub singular: &'a str,
    pub plural: &'a str,
    /// Quantity that decides between singular and plural, if any.
    pub count: Option<usize>,
    /// Values for `{name}` placeholders.
    pub params: Vec<(&'a str, String)>,
}

impl<'a> Template<'a> {
    /// A message without plural forms.
    pub fn fixed(text: &'a str) -> Self {
        Self {
            singular: text,
            plural: text,
            count: None,
            params: Vec::new(),
        }
    }

    pub fn plural(singular: &'a str, plural: &'a str, count: usize) -> Self {
        Self {
            singular,
            plural,
            count: Some(count),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &'a str, value: impl ToString) -> Self {
        self.params.push((name, value.to_string()));
        self
    }
}

/// Turns templates into final text.
pub trait MessageFormatter: Send + Sync {
    fn format(&self, template: &Template<'_>) -> String;
}

/// Shared handle to a formatter.
pub type SharedFormatter = Arc<dyn MessageFormatter>;

/// Default formatter: English plural rules, `{name}` substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishFormatter;

impl MessageFormatter for EnglishFormatter {
    fn format(&self, template: &Template<'_>) -> String {
        let text = match template.count {
            Some(1) | None => template.singular,
            Some(_) => template.plural,
        };
        interpolate(text, &template.params)
    }
}

/// Replaces each `{name}` in `text` with its value from `params`.
///
/// Scans once, left to right; substituted values are never rescanned.
/// Unknown placeholders are left as they are.
pub fn interpolate(text: &str, params: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            params
                .iter()
                .find(|(param, _)| *param == name)
                .map(|(_, value)| (value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
