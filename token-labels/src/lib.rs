//! Labels for rule-based matching over morphologically analyzed tokens.
//!
//! A label decides whether a token satisfies one condition of a grammar rule:
//! a grammeme test, a test on the surface value or normal forms, or an
//! agreement check against a token already on the match stack. Labels never
//! fail to signal a mismatch; `Ok(false)` is the mismatch. Errors are reserved
//! for rules that are malformed for their input.
//!
//! # Example
//!
//! ```
//! use token_labels::{Form, TermSpec, Token};
//!
//! let noun = Token::new("книга")
//!     .with_forms([Form::new("книга", ["NOUN", "femn", "sing", "nomn"])]);
//! let adjective = Token::new("новая")
//!     .with_forms([Form::new("новый", ["ADJF", "femn", "sing", "nomn"])]);
//!
//! let term = TermSpec::from_json(
//!     r#"{"labels": [{"label": "gram", "value": "ADJF"}, {"label": "gnc-match", "value": -1}]}"#,
//! )
//! .unwrap()
//! .compile()
//! .unwrap();
//!
//! assert!(term.matches(&adjective, &[noun]).unwrap());
//! ```

pub mod agreement;
pub mod config;
pub mod features;
pub mod gram;
pub mod registry;
pub mod surface;
pub mod token;

pub use config::{ConditionSpec, TermSpec, term_schema};
pub use registry::{Condition, Label, LabelValue, Term, ValueShape};
pub use surface::{CustomPredicate, Haystack};
pub use token::{Form, OpaqueValue, Token, TokenValue, ValueKind};

#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("unknown label: {0:?}")]
    UnknownLabel(String),

    #[error("label `{label}` expects {expected}, got {found}")]
    InvalidValue {
        label: Label,
        expected: ValueShape,
        found: String,
    },

    #[error("malformed value kind: {0:?}")]
    InvalidKind(String),

    #[error("cannot {operation} {left} against {right}")]
    TypeMismatch {
        operation: &'static str,
        left: ValueKind,
        right: ValueKind,
    },

    #[error("match stack index {index} is out of range for a stack of {len} tokens")]
    StackIndexOutOfRange { index: isize, len: usize },

    #[error("invalid rule configuration")]
    Config(#[source] serde_json::Error),
}
