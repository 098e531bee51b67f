//! Literal grammeme membership over a token's candidate forms.
use crate::Token;

/// True if any form of the token carries `grammeme`.
pub fn gram(token: &Token, grammeme: &str) -> bool {
    token.forms.iter().any(|form| form.has(grammeme))
}

/// True if [`gram`] holds for at least one of `grammemes`.
pub fn gram_any<S: AsRef<str>>(token: &Token, grammemes: &[S]) -> bool {
    grammemes.iter().any(|grammeme| gram(token, grammeme.as_ref()))
}

/// True if [`gram`] holds for every one of `grammemes`. Each grammeme may be
/// found on a different form.
pub fn gram_in<S: AsRef<str>>(token: &Token, grammemes: &[S]) -> bool {
    grammemes.iter().all(|grammeme| gram(token, grammeme.as_ref()))
}

pub fn gram_not(token: &Token, grammeme: &str) -> bool {
    !gram(token, grammeme)
}

/// True if none of `grammemes` appears on any form.
pub fn gram_not_in<S: AsRef<str>>(token: &Token, grammemes: &[S]) -> bool {
    grammemes
        .iter()
        .all(|grammeme| gram_not(token, grammeme.as_ref()))
}
