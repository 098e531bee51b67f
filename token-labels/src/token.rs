use std::cmp::Ordering;

use parse_display::{Display, FromStr};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::LabelError;

/// One candidate morphological interpretation of a token, as produced by the
/// morphological analyzer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub normal_form: String,
    #[serde(default)]
    pub grammemes: FxHashSet<String>,
}

impl Form {
    pub fn new<'a>(
        normal_form: impl Into<String>,
        grammemes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self {
            normal_form: normal_form.into(),
            grammemes: grammemes.into_iter().map(str::to_string).collect(),
        }
    }

    pub fn has(&self, grammeme: &str) -> bool {
        self.grammemes.contains(grammeme)
    }
}

/// The unit a label is evaluated against. Several forms model ambiguity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub value: TokenValue,
    #[serde(default)]
    pub forms: Vec<Form>,
}

impl Token {
    pub fn new(value: impl Into<TokenValue>) -> Self {
        Self {
            value: value.into(),
            forms: Vec::new(),
        }
    }

    pub fn with_forms(mut self, forms: impl IntoIterator<Item = Form>) -> Self {
        self.forms.extend(forms);
        self
    }

    /// The surface string, if this token is textual.
    pub fn text(&self) -> Option<&str> {
        self.value.as_text()
    }
}

/// A value the tokenizer attached to a token. Not every token is text.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Text(String),
    Int(i64),
    Float(f64),
    Opaque(OpaqueValue),
}

/// A value this crate knows nothing about beyond its type tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpaqueValue {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

impl TokenValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TokenValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            TokenValue::Text(_) => ValueKind::Text,
            TokenValue::Int(_) => ValueKind::Int,
            TokenValue::Float(_) => ValueKind::Float,
            TokenValue::Opaque(opaque) => ValueKind::Opaque(opaque.kind.clone()),
        }
    }

    /// Orders two values of compatible kinds. Text orders by code point and
    /// numbers order numerically across ints and floats. `Ok(None)` means the
    /// values are comparable in kind but unordered (a NaN is involved).
    pub fn partial_compare(&self, other: &TokenValue) -> Result<Option<Ordering>, LabelError> {
        match (self, other) {
            (TokenValue::Text(a), TokenValue::Text(b)) => Ok(Some(a.cmp(b))),
            (TokenValue::Int(a), TokenValue::Int(b)) => Ok(Some(a.cmp(b))),
            (TokenValue::Int(a), TokenValue::Float(b)) => Ok(compare_int_float(*a, *b)),
            (TokenValue::Float(a), TokenValue::Int(b)) => {
                Ok(compare_int_float(*b, *a).map(Ordering::reverse))
            }
            (TokenValue::Float(a), TokenValue::Float(b)) => Ok(a.partial_cmp(b)),
            _ => Err(LabelError::TypeMismatch {
                operation: "order",
                left: self.kind(),
                right: other.kind(),
            }),
        }
    }
}

/// Exact comparison of an integer with a float. Casting the integer to `f64`
/// would round it once it exceeds 2^53.
fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, exactly representable.
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        None
    } else if float >= BOUND {
        Some(Ordering::Less)
    } else if float < -BOUND {
        Some(Ordering::Greater)
    } else {
        let whole = float.trunc();
        let ordering = int.cmp(&(whole as i64)).then_with(|| {
            if float > whole {
                Ordering::Less
            } else if float < whole {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        });
        Some(ordering)
    }
}

impl PartialEq for TokenValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TokenValue::Text(a), TokenValue::Text(b)) => a == b,
            (TokenValue::Int(a), TokenValue::Int(b)) => a == b,
            (TokenValue::Int(a), TokenValue::Float(b))
            | (TokenValue::Float(b), TokenValue::Int(a)) => {
                compare_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (TokenValue::Float(a), TokenValue::Float(b)) => a == b,
            (TokenValue::Opaque(a), TokenValue::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Text(text.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Text(text)
    }
}

impl From<i64> for TokenValue {
    fn from(value: i64) -> Self {
        TokenValue::Int(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Float(value)
    }
}

impl From<OpaqueValue> for TokenValue {
    fn from(value: OpaqueValue) -> Self {
        TokenValue::Opaque(value)
    }
}

/// Type tag tested by the `is-instance` label, written as `text`, `int`,
/// `float`, `number` or `opaque:<type>`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Display, FromStr)]
#[display(style = "snake_case")]
pub enum ValueKind {
    Text,
    Int,
    Float,
    /// Either an int or a float.
    Number,
    #[display("opaque:{0}")]
    Opaque(String),
}

impl ValueKind {
    pub fn matches(&self, value: &TokenValue) -> bool {
        match (self, value) {
            (ValueKind::Text, TokenValue::Text(_))
            | (ValueKind::Int, TokenValue::Int(_))
            | (ValueKind::Float, TokenValue::Float(_))
            | (ValueKind::Number, TokenValue::Int(_) | TokenValue::Float(_)) => true,
            (ValueKind::Opaque(kind), TokenValue::Opaque(opaque)) => *kind == opaque.kind,
            _ => false,
        }
    }
}
