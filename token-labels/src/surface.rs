//! Labels over a token's surface value and its normal forms.
//!
//! The case-shape and dictionary labels only apply to textual tokens; on any
//! other value they evaluate to false instead of failing, so they can be used
//! on mixed token streams.
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;

use crate::{LabelError, Token, TokenValue, ValueKind};

#[derive(Clone, Copy, PartialEq, Eq)]
enum CharCase {
    Lower,
    Upper,
    Title,
    Uncased,
}

fn char_case(c: char) -> CharCase {
    if c.is_lowercase() {
        CharCase::Lower
    } else if c.is_uppercase() {
        CharCase::Upper
    } else if c.to_lowercase().ne(std::iter::once(c)) {
        // Titlecase letters such as 'ǅ' are neither upper nor lower.
        CharCase::Title
    } else {
        CharCase::Uncased
    }
}

fn all_cased_are(text: &str, wanted: CharCase) -> bool {
    let mut cased = false;
    for case in text.chars().map(char_case) {
        match case {
            CharCase::Uncased => {}
            case if case == wanted => cased = true,
            _ => return false,
        }
    }
    cased
}

fn is_title_text(text: &str) -> bool {
    let mut cased = false;
    let mut previous_is_cased = false;
    for case in text.chars().map(char_case) {
        match case {
            CharCase::Upper | CharCase::Title => {
                if previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            }
            CharCase::Lower => {
                if !previous_is_cased {
                    return false;
                }
                previous_is_cased = true;
                cased = true;
            }
            CharCase::Uncased => previous_is_cased = false,
        }
    }
    cased
}

/// At least one cased character, and every cased character is lowercase.
pub fn is_lower(token: &Token) -> bool {
    token
        .text()
        .is_some_and(|text| all_cased_are(text, CharCase::Lower))
}

pub fn is_upper(token: &Token) -> bool {
    token
        .text()
        .is_some_and(|text| all_cased_are(text, CharCase::Upper))
}

/// Uppercase characters only follow uncased ones and lowercase characters
/// only follow cased ones, so every word starts with a capital.
pub fn is_title(token: &Token) -> bool {
    token.text().is_some_and(is_title_text)
}

/// First character uppercase and last character lowercase. "ПАО" is not
/// capitalized, "Москва" is; "ТАСС-Урал" counts as capitalized too.
pub fn is_capitalized(token: &Token) -> bool {
    token.text().is_some_and(|text| {
        let mut chars = text.chars();
        let first = chars.next();
        let last = chars.next_back().or(first);
        matches!(
            (first.map(char_case), last.map(char_case)),
            (Some(CharCase::Upper), Some(CharCase::Lower))
        )
    })
}

pub fn eq(token: &Token, value: &TokenValue) -> bool {
    token.value == *value
}

pub fn not_eq(token: &Token, value: &TokenValue) -> bool {
    token.value != *value
}

/// What `in` and `not-in` look into.
#[derive(Clone, Debug, PartialEq)]
pub enum Haystack {
    /// Membership by value equality.
    Items(Vec<TokenValue>),
    /// Substring search; the token has to be textual.
    Text(String),
}

pub fn contains(token: &Token, haystack: &Haystack) -> Result<bool, LabelError> {
    match haystack {
        Haystack::Items(items) => Ok(items.iter().any(|item| *item == token.value)),
        Haystack::Text(text) => match token.text() {
            Some(needle) => Ok(text.contains(needle)),
            None => Err(LabelError::TypeMismatch {
                operation: "search",
                left: token.value.kind(),
                right: ValueKind::Text,
            }),
        },
    }
}

pub fn not_contains(token: &Token, haystack: &Haystack) -> Result<bool, LabelError> {
    contains(token, haystack).map(|found| !found)
}

fn ordered(
    token: &Token,
    value: &TokenValue,
    accept: impl Fn(Ordering) -> bool,
) -> Result<bool, LabelError> {
    Ok(token.value.partial_compare(value)?.is_some_and(accept))
}

pub fn gt(token: &Token, value: &TokenValue) -> Result<bool, LabelError> {
    ordered(token, value, Ordering::is_gt)
}

pub fn lt(token: &Token, value: &TokenValue) -> Result<bool, LabelError> {
    ordered(token, value, Ordering::is_lt)
}

pub fn gte(token: &Token, value: &TokenValue) -> Result<bool, LabelError> {
    ordered(token, value, Ordering::is_ge)
}

pub fn lte(token: &Token, value: &TokenValue) -> Result<bool, LabelError> {
    ordered(token, value, Ordering::is_le)
}

pub fn is_instance(token: &Token, kind: &ValueKind) -> bool {
    kind.matches(&token.value)
}

type CustomFn = dyn Fn(&Token, &[Token]) -> bool + Send + Sync;

/// A caller-supplied label, called with the token and the match stack.
#[derive(Clone)]
pub struct CustomPredicate(Arc<CustomFn>);

impl CustomPredicate {
    pub fn new(predicate: impl Fn(&Token, &[Token]) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    pub fn call(&self, token: &Token, stack: &[Token]) -> bool {
        (self.0)(token, stack)
    }
}

impl fmt::Debug for CustomPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomPredicate(..)")
    }
}

impl PartialEq for CustomPredicate {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

pub fn custom(token: &Token, predicate: &CustomPredicate, stack: &[Token]) -> bool {
    predicate.call(token, stack)
}

fn normal_form_in(token: &Token, words: &FxHashSet<String>) -> bool {
    token
        .forms
        .iter()
        .any(|form| words.contains(&form.normal_form))
}

/// True if any form's normal form is in `words`.
pub fn dictionary(token: &Token, words: &FxHashSet<String>) -> bool {
    token.text().is_some() && normal_form_in(token, words)
}

/// True if no form's normal form is in `words`. Still false for non-text tokens.
pub fn dictionary_not(token: &Token, words: &FxHashSet<String>) -> bool {
    token.text().is_some() && !normal_form_in(token, words)
}
