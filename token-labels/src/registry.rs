//! Label names, their configured values, and compiled conditions.
//!
//! A label name is resolved to a [`Label`] once, when a rule is compiled.
//! Matching then dispatches on the enum without any string lookup.
use parse_display::{Display, FromStr};
use rustc_hash::FxHashSet;

use crate::surface::{CustomPredicate, Haystack};
use crate::{LabelError, Token, TokenValue, ValueKind, agreement, gram, surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, FromStr)]
#[display(style = "kebab-case")]
pub enum Label {
    Gram,
    GramAny,
    GramIn,
    GramNot,
    GramNotIn,
    Dictionary,
    DictionaryNot,

    GenderMatch,
    NumberMatch,
    CaseMatch,
    GncMatch,

    IsLower,
    IsUpper,
    IsTitle,
    IsCapitalized,

    Eq,
    NotEq,
    In,
    NotIn,
    Gt,
    Lt,
    Gte,
    Lte,
    IsInstance,
    Custom,
}

/// The kind of configured value a label takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ValueShape {
    #[display("no value")]
    None,
    #[display("a grammeme")]
    Grammeme,
    #[display("a list of grammemes")]
    Grammemes,
    #[display("a literal")]
    Literal,
    #[display("a list of literals or a string")]
    Haystack,
    #[display("a value kind")]
    Kind,
    #[display("a match stack index")]
    Index,
    #[display("a list of normal forms")]
    Words,
    #[display("a function")]
    Function,
}

impl Label {
    pub const ALL: [Label; 25] = [
        Label::Gram,
        Label::GramAny,
        Label::GramIn,
        Label::GramNot,
        Label::GramNotIn,
        Label::Dictionary,
        Label::DictionaryNot,
        Label::GenderMatch,
        Label::NumberMatch,
        Label::CaseMatch,
        Label::GncMatch,
        Label::IsLower,
        Label::IsUpper,
        Label::IsTitle,
        Label::IsCapitalized,
        Label::Eq,
        Label::NotEq,
        Label::In,
        Label::NotIn,
        Label::Gt,
        Label::Lt,
        Label::Gte,
        Label::Lte,
        Label::IsInstance,
        Label::Custom,
    ];

    /// Resolves a label by its rule name, e.g. `"gnc-match"`.
    pub fn lookup(name: &str) -> Result<Label, LabelError> {
        name.parse::<Label>()
            .map_err(|_| LabelError::UnknownLabel(name.to_string()))
    }

    pub fn shape(self) -> ValueShape {
        match self {
            Label::Gram | Label::GramNot => ValueShape::Grammeme,
            Label::GramAny | Label::GramIn | Label::GramNotIn => ValueShape::Grammemes,
            Label::Dictionary | Label::DictionaryNot => ValueShape::Words,
            Label::GenderMatch | Label::NumberMatch | Label::CaseMatch | Label::GncMatch => {
                ValueShape::Index
            }
            Label::IsLower | Label::IsUpper | Label::IsTitle | Label::IsCapitalized => {
                ValueShape::None
            }
            Label::Eq | Label::NotEq | Label::Gt | Label::Lt | Label::Gte | Label::Lte => {
                ValueShape::Literal
            }
            Label::In | Label::NotIn => ValueShape::Haystack,
            Label::IsInstance => ValueShape::Kind,
            Label::Custom => ValueShape::Function,
        }
    }
}

/// The value a rule configures for a label.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelValue {
    None,
    Grammeme(String),
    Grammemes(Vec<String>),
    Literal(TokenValue),
    Haystack(Haystack),
    Kind(ValueKind),
    Index(isize),
    Words(FxHashSet<String>),
    Function(CustomPredicate),
}

impl LabelValue {
    pub fn shape(&self) -> ValueShape {
        match self {
            LabelValue::None => ValueShape::None,
            LabelValue::Grammeme(_) => ValueShape::Grammeme,
            LabelValue::Grammemes(_) => ValueShape::Grammemes,
            LabelValue::Literal(_) => ValueShape::Literal,
            LabelValue::Haystack(_) => ValueShape::Haystack,
            LabelValue::Kind(_) => ValueShape::Kind,
            LabelValue::Index(_) => ValueShape::Index,
            LabelValue::Words(_) => ValueShape::Words,
            LabelValue::Function(_) => ValueShape::Function,
        }
    }
}

/// A label paired with a value of the shape it expects.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    label: Label,
    value: LabelValue,
}

impl Condition {
    pub fn new(label: Label, value: LabelValue) -> Result<Self, LabelError> {
        if label.shape() != value.shape() {
            return Err(LabelError::InvalidValue {
                label,
                expected: label.shape(),
                found: value.shape().to_string(),
            });
        }
        log::debug!("compiled {label} condition");
        Ok(Self { label, value })
    }

    pub fn custom(predicate: impl Fn(&Token, &[Token]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label: Label::Custom,
            value: LabelValue::Function(CustomPredicate::new(predicate)),
        }
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn value(&self) -> &LabelValue {
        &self.value
    }

    /// Evaluates the condition. `Ok(false)` is an ordinary mismatch; errors
    /// mean the rule itself is malformed for this input.
    pub fn matches(&self, token: &Token, stack: &[Token]) -> Result<bool, LabelError> {
        use LabelValue as V;

        match (self.label, &self.value) {
            (Label::Gram, V::Grammeme(g)) => Ok(gram::gram(token, g)),
            (Label::GramNot, V::Grammeme(g)) => Ok(gram::gram_not(token, g)),
            (Label::GramAny, V::Grammemes(gs)) => Ok(gram::gram_any(token, gs.as_slice())),
            (Label::GramIn, V::Grammemes(gs)) => Ok(gram::gram_in(token, gs.as_slice())),
            (Label::GramNotIn, V::Grammemes(gs)) => Ok(gram::gram_not_in(token, gs.as_slice())),
            (Label::Dictionary, V::Words(words)) => Ok(surface::dictionary(token, words)),
            (Label::DictionaryNot, V::Words(words)) => Ok(surface::dictionary_not(token, words)),

            (Label::GenderMatch, V::Index(i)) => agreement::gender_match(token, *i, stack),
            (Label::NumberMatch, V::Index(i)) => agreement::number_match(token, *i, stack),
            (Label::CaseMatch, V::Index(i)) => agreement::case_match(token, *i, stack),
            (Label::GncMatch, V::Index(i)) => agreement::gnc_match(token, *i, stack),

            (Label::IsLower, V::None) => Ok(surface::is_lower(token)),
            (Label::IsUpper, V::None) => Ok(surface::is_upper(token)),
            (Label::IsTitle, V::None) => Ok(surface::is_title(token)),
            (Label::IsCapitalized, V::None) => Ok(surface::is_capitalized(token)),

            (Label::Eq, V::Literal(v)) => Ok(surface::eq(token, v)),
            (Label::NotEq, V::Literal(v)) => Ok(surface::not_eq(token, v)),
            (Label::In, V::Haystack(h)) => surface::contains(token, h),
            (Label::NotIn, V::Haystack(h)) => surface::not_contains(token, h),
            (Label::Gt, V::Literal(v)) => surface::gt(token, v),
            (Label::Lt, V::Literal(v)) => surface::lt(token, v),
            (Label::Gte, V::Literal(v)) => surface::gte(token, v),
            (Label::Lte, V::Literal(v)) => surface::lte(token, v),
            (Label::IsInstance, V::Kind(kind)) => Ok(surface::is_instance(token, kind)),
            (Label::Custom, V::Function(f)) => Ok(surface::custom(token, f, stack)),

            (label, value) => Err(LabelError::InvalidValue {
                label,
                expected: label.shape(),
                found: value.shape().to_string(),
            }),
        }
    }
}

/// The labels of one rule element. A token matches when every condition does.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Term {
    conditions: Vec<Condition>,
}

impl Term {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn push(&mut self, condition: Condition) {
        self.conditions.push(condition);
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn matches(&self, token: &Token, stack: &[Token]) -> Result<bool, LabelError> {
        for condition in &self.conditions {
            if !condition.matches(token, stack)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
