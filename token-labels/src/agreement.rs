//! Gender, number and case agreement between a candidate token and a token
//! already on the match stack.
//!
//! Every label walks the candidate's forms against the reference token's
//! forms and succeeds on the first pair that agrees. Each axis has its own
//! exceptions for words that do not inflect along it in the usual way.
use crate::features::{CaseFeatures, FeatureAxis, GenderFeatures, NumberFeatures, extract_pair};
use crate::{Form, LabelError, Token};

/// Looks up the reference token. Negative indices count from the top of the
/// stack, so `-1` is the most recently matched token.
pub fn resolve_reference(stack: &[Token], index: isize) -> Result<&Token, LabelError> {
    let resolved = if index < 0 {
        stack.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    resolved
        .and_then(|i| stack.get(i))
        .ok_or(LabelError::StackIndexOutOfRange {
            index,
            len: stack.len(),
        })
}

fn any_pair_agrees(
    token: &Token,
    index: isize,
    stack: &[Token],
    agree: fn(&Form, &Form) -> bool,
) -> Result<bool, LabelError> {
    let reference = resolve_reference(stack, index)?;
    Ok(token.forms.iter().any(|candidate| {
        reference
            .forms
            .iter()
            .any(|reference| agree(candidate, reference))
    }))
}

fn trace_exception<A: FeatureAxis>(candidate: &Form, reference: &Form, rule: &str) {
    log::trace!(
        "{}: {} ~ {} by {rule}",
        A::name(),
        candidate.normal_form,
        reference.normal_form
    );
}

pub fn genders_agree(candidate: &Form, reference: &Form) -> bool {
    let (c, r) = extract_pair::<GenderFeatures>(candidate, reference);

    if c.values == r.values {
        return true;
    }

    if c.is_common_gender || r.is_common_gender {
        let agrees = c.has_masc_or_femn() || r.has_masc_or_femn();
        if agrees {
            trace_exception::<GenderFeatures>(candidate, reference, "common gender");
        }
        agrees
    } else if c.is_generalized_gender || r.is_generalized_gender {
        trace_exception::<GenderFeatures>(candidate, reference, "generalized gender");
        true
    } else if candidate.has("plur") && reference.has("plur") {
        trace_exception::<GenderFeatures>(candidate, reference, "gender neutralized in plural");
        true
    } else {
        c.overlaps(&r)
    }
}

pub fn numbers_agree(candidate: &Form, reference: &Form) -> bool {
    let (c, r) = extract_pair::<NumberFeatures>(candidate, reference);

    if c.values == r.values {
        return true;
    }

    let agrees = if r.is_pluralia_tantum {
        c.values.plur
    } else if c.is_pluralia_tantum {
        r.values.plur
    } else {
        false
    };
    if agrees {
        trace_exception::<NumberFeatures>(candidate, reference, "pluralia tantum");
    }
    agrees
}

pub fn cases_agree(candidate: &Form, reference: &Form) -> bool {
    let (c, r) = extract_pair::<CaseFeatures>(candidate, reference);

    if c.values == r.values {
        true
    } else if c.is_fixed_case || r.is_fixed_case {
        trace_exception::<CaseFeatures>(candidate, reference, "fixed case");
        true
    } else {
        false
    }
}

pub fn gender_match(token: &Token, index: isize, stack: &[Token]) -> Result<bool, LabelError> {
    any_pair_agrees(token, index, stack, genders_agree)
}

pub fn number_match(token: &Token, index: isize, stack: &[Token]) -> Result<bool, LabelError> {
    any_pair_agrees(token, index, stack, numbers_agree)
}

pub fn case_match(token: &Token, index: isize, stack: &[Token]) -> Result<bool, LabelError> {
    any_pair_agrees(token, index, stack, cases_agree)
}

/// Gender, number and case agreement. Each axis searches its own form pairs,
/// so the three need not be satisfied by the same pair of forms.
pub fn gnc_match(token: &Token, index: isize, stack: &[Token]) -> Result<bool, LabelError> {
    Ok(gender_match(token, index, stack)?
        && number_match(token, index, stack)?
        && case_match(token, index, stack)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(normal_form: &str, grammemes: &[&str]) -> Form {
        Form::new(normal_form, grammemes.iter().copied())
    }

    fn word<const N: usize>(value: &str, forms: [Form; N]) -> Token {
        Token::new(value).with_forms(forms)
    }

    #[test]
    fn test_plain_gender_agreement() {
        let adjective = word("новая", [form("новый", &["ADJF", "femn", "sing", "nomn"])]);
        let feminine = word("книга", [form("книга", &["NOUN", "femn", "sing", "nomn"])]);
        let masculine = word("стол", [form("стол", &["NOUN", "masc", "sing", "nomn"])]);
        assert!(gender_match(&adjective, 0, &[feminine]).unwrap());
        assert!(!gender_match(&adjective, 0, &[masculine]).unwrap());
    }

    #[test]
    fn test_common_gender_agrees_with_masculine_and_feminine() {
        let orphan = word("сирота", [form("сирота", &["NOUN", "Ms-f", "sing", "nomn"])]);
        let masculine = word("круглый", [form("круглый", &["ADJF", "masc", "sing", "nomn"])]);
        let feminine = word("круглая", [form("круглый", &["ADJF", "femn", "sing", "nomn"])]);
        let neuter = word("круглое", [form("круглый", &["ADJF", "neut", "sing", "nomn"])]);

        assert!(gender_match(&masculine, 0, &[orphan.clone()]).unwrap());
        assert!(gender_match(&feminine, 0, &[orphan.clone()]).unwrap());
        assert!(gender_match(&orphan, 0, &[masculine]).unwrap());
        assert!(!gender_match(&neuter, 0, &[orphan]).unwrap());
    }

    #[test]
    fn test_common_gender_is_decided_before_plural_neutralization() {
        // Both plural, but the common-gender rule is applied first and finds
        // no masculine or feminine reading.
        let orphans = word("сироты", [form("сирота", &["NOUN", "Ms-f", "plur", "nomn"])]);
        let neuter = word("окна", [form("окно", &["NOUN", "neut", "plur", "nomn"])]);
        assert!(!gender_match(&orphans, 0, &[neuter.clone()]).unwrap());
        assert!(!gender_match(&neuter, 0, &[orphans]).unwrap());
    }

    #[test]
    fn test_common_gender_is_decided_before_generalized_gender() {
        let orphan = word("сирота", [form("сирота", &["NOUN", "Ms-f", "sing", "nomn"])]);
        let pronoun = word("сам", [form("сам", &["ADJF", "GNdr", "sing", "nomn"])]);
        assert!(!gender_match(&orphan, 0, &[pronoun.clone()]).unwrap());
        assert!(!gender_match(&pronoun, 0, &[orphan]).unwrap());
    }

    #[test]
    fn test_generalized_gender_always_agrees() {
        let pronoun = word("сам", [form("сам", &["ADJF", "GNdr", "plur", "nomn"])]);
        let neuter = word("окно", [form("окно", &["NOUN", "neut", "sing", "nomn"])]);
        assert!(gender_match(&pronoun, 0, &[neuter]).unwrap());
    }

    #[test]
    fn test_plural_neutralizes_gender() {
        let adjective = word("новые", [form("новый", &["ADJF", "plur", "nomn"])]);
        let noun = word("столы", [form("стол", &["NOUN", "masc", "plur", "nomn"])]);
        assert!(gender_match(&adjective, 0, &[noun.clone()]).unwrap());

        let singular = word("новое", [form("новый", &["ADJF", "neut", "sing", "nomn"])]);
        assert!(!gender_match(&singular, 0, &[noun]).unwrap());
    }

    #[test]
    fn test_partial_gender_overlap() {
        let ambiguous = word("x", [form("x", &["masc", "femn"])]);
        let feminine = word("y", [form("y", &["femn"])]);
        assert!(gender_match(&ambiguous, 0, &[feminine]).unwrap());
    }

    #[test]
    fn test_pluralia_tantum() {
        let _ = env_logger::builder().is_test(true).try_init();
        let scissors = word("ножницы", [form("ножницы", &["NOUN", "Pltm", "plur", "nomn"])]);
        let plural = word("острые", [form("острый", &["ADJF", "plur", "nomn"])]);
        let singular = word("острый", [form("острый", &["ADJF", "masc", "sing", "nomn"])]);

        assert!(number_match(&plural, 0, &[scissors.clone()]).unwrap());
        assert!(number_match(&scissors, 0, &[plural]).unwrap());
        assert!(!number_match(&singular, 0, &[scissors.clone()]).unwrap());
        assert!(!number_match(&scissors, 0, &[singular]).unwrap());
    }

    #[test]
    fn test_fixed_case_agrees_with_any_case() {
        let coat = word("пальто", [form("пальто", &["NOUN", "neut", "Fixd", "sing", "nomn"])]);
        let instrumental = word("новым", [form("новый", &["ADJF", "neut", "sing", "ablt"])]);
        let genitive = word("стола", [form("стол", &["NOUN", "masc", "sing", "gent"])]);

        assert!(case_match(&instrumental, 0, &[coat.clone()]).unwrap());
        assert!(case_match(&coat, 0, &[genitive.clone()]).unwrap());
        assert!(!case_match(&instrumental, 0, &[genitive]).unwrap());
    }

    #[test]
    fn test_any_form_pair_is_enough() {
        // "стали": verb plural or noun genitive singular
        let candidate = word(
            "стали",
            [
                form("стать", &["VERB", "plur", "past"]),
                form("сталь", &["NOUN", "femn", "sing", "gent"]),
            ],
        );
        let reference = word("новой", [form("новый", &["ADJF", "femn", "sing", "gent"])]);
        assert!(case_match(&candidate, 0, &[reference.clone()]).unwrap());
        assert!(gnc_match(&candidate, 0, &[reference]).unwrap());
    }

    #[test]
    fn test_gnc_axes_are_searched_independently() {
        // No single pair agrees on all three axes, but each axis finds a pair.
        let candidate = word(
            "c",
            [
                form("c", &["masc", "sing", "nomn"]),
                form("c", &["femn", "plur", "gent"]),
            ],
        );
        let reference = word("r", [form("r", &["masc", "plur", "nomn"])]);
        assert!(gender_match(&candidate, 0, &[reference.clone()]).unwrap());
        assert!(number_match(&candidate, 0, &[reference.clone()]).unwrap());
        assert!(case_match(&candidate, 0, &[reference.clone()]).unwrap());
        assert!(gnc_match(&candidate, 0, &[reference]).unwrap());
    }

    #[test]
    fn test_gnc_requires_all_axes() {
        let adjective = word("новая", [form("новый", &["ADJF", "femn", "sing", "gent"])]);
        let noun = word("книга", [form("книга", &["NOUN", "femn", "sing", "nomn"])]);
        assert!(!gnc_match(&adjective, 0, &[noun]).unwrap());
    }

    #[test]
    fn test_stack_indexing() {
        let first = word("a", [form("a", &["masc"])]);
        let last = word("b", [form("b", &["femn"])]);
        let candidate = word("c", [form("c", &["femn"])]);
        let stack = [first, last];

        assert!(gender_match(&candidate, -1, &stack).unwrap());
        assert!(!gender_match(&candidate, -2, &stack).unwrap());
        assert!(gender_match(&candidate, 1, &stack).unwrap());
        assert!(matches!(
            gender_match(&candidate, 2, &stack),
            Err(LabelError::StackIndexOutOfRange { index: 2, len: 2 })
        ));
        assert!(gender_match(&candidate, -3, &stack).is_err());
        assert!(case_match(&candidate, 0, &[]).is_err());
    }

    #[test]
    fn test_no_forms_never_agree() {
        let bare = Token::new("x");
        let noun = word("стол", [form("стол", &["NOUN", "masc", "sing", "nomn"])]);
        assert!(!gnc_match(&bare, 0, &[noun.clone()]).unwrap());
        assert!(!gender_match(&noun, 0, &[bare]).unwrap());
    }

    #[test]
    fn test_repeated_calls_agree() {
        let candidate = word("x", [form("x", &["Ms-f", "femn"])]);
        let stack = [word("y", [form("y", &["masc"])])];
        let first = gnc_match(&candidate, 0, &stack).unwrap();
        for _ in 0..3 {
            assert_eq!(gnc_match(&candidate, 0, &stack).unwrap(), first);
        }
    }
}
