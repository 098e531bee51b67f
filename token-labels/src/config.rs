//! Rule configuration: labels as they appear in serialized rules.
//!
//! ```json
//! {"labels": [{"label": "gram", "value": "ADJF"}, {"label": "gnc-match", "value": -1}]}
//! ```
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::registry::{Condition, Label, LabelValue, Term, ValueShape};
use crate::surface::Haystack;
use crate::{LabelError, TokenValue};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConditionSpec {
    /// Label name, e.g. `gram-any` or `case-match`.
    pub label: String,
    /// Configured value; its shape depends on the label.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TermSpec {
    pub labels: Vec<ConditionSpec>,
}

impl ConditionSpec {
    pub fn new(label: impl Into<String>, value: Value) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn compile(&self) -> Result<Condition, LabelError> {
        let label = Label::lookup(&self.label)?;
        let value = parse_value(label, &self.value)?;
        Condition::new(label, value)
    }
}

impl TermSpec {
    pub fn compile(&self) -> Result<Term, LabelError> {
        self.labels
            .iter()
            .map(ConditionSpec::compile)
            .collect::<Result<Vec<_>, _>>()
            .map(Term::new)
    }

    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        serde_json::from_str(json).map_err(LabelError::Config)
    }
}

/// JSON schema for a serialized rule element.
pub fn term_schema() -> schemars::Schema {
    schemars::schema_for!(TermSpec)
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
    .to_string()
}

fn strings(items: &[Value]) -> Option<Vec<String>> {
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}

// Anything a token value can deserialize from: strings, numbers, and
// `{"type": ..., "data": ...}` objects.
fn literal(value: &Value) -> Option<TokenValue> {
    serde_json::from_value(value.clone()).ok()
}

fn parse_value(label: Label, value: &Value) -> Result<LabelValue, LabelError> {
    let invalid = || LabelError::InvalidValue {
        label,
        expected: label.shape(),
        found: describe(value),
    };

    match (label.shape(), value) {
        (ValueShape::None, Value::Null) => Ok(LabelValue::None),
        (ValueShape::Grammeme, Value::String(grammeme)) => {
            Ok(LabelValue::Grammeme(grammeme.clone()))
        }
        (ValueShape::Grammemes, Value::Array(items)) => strings(items)
            .map(LabelValue::Grammemes)
            .ok_or_else(invalid),
        (ValueShape::Words, Value::Array(items)) => strings(items)
            .map(|words| LabelValue::Words(words.into_iter().collect()))
            .ok_or_else(invalid),
        (ValueShape::Literal, value) => literal(value)
            .map(LabelValue::Literal)
            .ok_or_else(invalid),
        (ValueShape::Haystack, Value::String(text)) => {
            Ok(LabelValue::Haystack(Haystack::Text(text.clone())))
        }
        (ValueShape::Haystack, Value::Array(items)) => items
            .iter()
            .map(literal)
            .collect::<Option<Vec<_>>>()
            .map(|items| LabelValue::Haystack(Haystack::Items(items)))
            .ok_or_else(invalid),
        (ValueShape::Kind, Value::String(tag)) => tag
            .parse()
            .map(LabelValue::Kind)
            .map_err(|_| LabelError::InvalidKind(tag.clone())),
        (ValueShape::Index, Value::Number(index)) => index
            .as_i64()
            .and_then(|index| isize::try_from(index).ok())
            .map(LabelValue::Index)
            .ok_or_else(invalid),
        _ => Err(invalid()),
    }
}
