//! Grammatical feature axes used by the agreement labels.
//!
//! Each axis projects a form's grammeme set onto its ordinary values (a
//! fixed-size boolean record) plus the axis's flag grammemes, which are
//! modelled as named booleans rather than ordinary values.
use enumap::EnuMap;
use parse_display::Display;

use crate::Form;

pub trait FeatureAxis: Sized {
    fn name() -> &'static str;
    fn extract(form: &Form) -> Self;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnuMap)]
pub enum Gender {
    #[display("masc")]
    Masc,
    #[display("femn")]
    Femn,
    #[display("neut")]
    Neut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnuMap)]
pub enum Number {
    #[display("sing")]
    Sing,
    #[display("plur")]
    Plur,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnuMap)]
pub enum Case {
    /// Nominative
    #[display("nomn")]
    Nomn,
    /// Genitive
    #[display("gent")]
    Gent,
    /// Dative
    #[display("datv")]
    Datv,
    /// Accusative
    #[display("accs")]
    Accs,
    /// Instrumental
    #[display("ablt")]
    Ablt,
    /// Prepositional
    #[display("loct")]
    Loct,
    /// Vocative
    #[display("voct")]
    Voct,
    /// Second genitive (partitive)
    #[display("gen2")]
    Gen2,
    /// Second accusative
    #[display("acc2")]
    Acc2,
    /// Second prepositional (locative)
    #[display("loc2")]
    Loc2,
}

/// Common gender: takes masculine or feminine agreement depending on the referent.
pub const COMMON_GENDER: &str = "Ms-f";
/// Gender generalized across values.
pub const GENERALIZED_GENDER: &str = "GNdr";
/// Pluralia tantum: plural-only nouns.
pub const PLURALIA_TANTUM: &str = "Pltm";
/// Indeclinable words.
pub const FIXED_CASE: &str = "Fixd";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GenderFeatures {
    pub values: GenderMap<bool>,
    pub is_common_gender: bool,
    pub is_generalized_gender: bool,
}

impl GenderFeatures {
    /// Whether masculine or feminine is marked. Neuter does not count.
    pub fn has_masc_or_femn(&self) -> bool {
        self.values.masc || self.values.femn
    }

    /// Whether both sides mark at least one ordinary gender in common.
    pub fn overlaps(&self, other: &GenderFeatures) -> bool {
        self.values
            .iter()
            .zip(other.values.iter())
            .any(|((_, a), (_, b))| *a && *b)
    }
}

impl FeatureAxis for GenderFeatures {
    fn name() -> &'static str {
        "Gender"
    }
    fn extract(form: &Form) -> Self {
        Self {
            values: GenderMap::from_fn(|gender| form.has(&gender.to_string())),
            is_common_gender: form.has(COMMON_GENDER),
            is_generalized_gender: form.has(GENERALIZED_GENDER),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NumberFeatures {
    pub values: NumberMap<bool>,
    pub is_pluralia_tantum: bool,
}

impl FeatureAxis for NumberFeatures {
    fn name() -> &'static str {
        "Number"
    }
    fn extract(form: &Form) -> Self {
        Self {
            values: NumberMap::from_fn(|number| form.has(&number.to_string())),
            is_pluralia_tantum: form.has(PLURALIA_TANTUM),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaseFeatures {
    pub values: CaseMap<bool>,
    pub is_fixed_case: bool,
}

impl FeatureAxis for CaseFeatures {
    fn name() -> &'static str {
        "Case"
    }
    fn extract(form: &Form) -> Self {
        Self {
            values: CaseMap::from_fn(|case| form.has(&case.to_string())),
            is_fixed_case: form.has(FIXED_CASE),
        }
    }
}

/// Projects two forms onto the same axis.
pub fn extract_pair<A: FeatureAxis>(candidate: &Form, reference: &Form) -> (A, A) {
    (A::extract(candidate), A::extract(reference))
}
