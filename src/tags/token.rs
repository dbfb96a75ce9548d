//! Query token classification.

use serde::Serialize;
use std::fmt;
use winnow::combinator::opt;
use winnow::prelude::*;
use winnow::token::{one_of, rest};

/// A query token, classified by its leading character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryToken {
    /// `name`: one alternative of the OR group.
    NonStrict(String),
    /// `+name`: the subject must carry `name`.
    StrictMatch(String),
    /// `-name`: the subject must not carry `name`.
    StrictMismatch(String),
}

// Manually define PResult for resilience against winnow version changes
type PResult<T> = Result<T, winnow::error::ErrMode<winnow::error::ContextError>>;

/// Split one token into its optional `+`/`-` prefix and the name.
fn lex_token<'s>(input: &mut &'s str) -> PResult<(Option<char>, &'s str)> {
    (opt(one_of(['+', '-'])), rest).parse_next(input)
}

/// Classify a raw query token. Never fails: every string is a valid token.
pub fn parse_token(raw: &str) -> QueryToken {
    let mut input = raw;
    match lex_token(&mut input) {
        Ok((Some('+'), name)) => QueryToken::StrictMatch(name.to_string()),
        Ok((Some(_), name)) => QueryToken::StrictMismatch(name.to_string()),
        Ok((None, name)) => QueryToken::NonStrict(name.to_string()),
        Err(_) => QueryToken::NonStrict(raw.to_string()),
    }
}

impl QueryToken {
    pub fn is_strict(&self) -> bool {
        !matches!(self, QueryToken::NonStrict(_))
    }

    /// Compare the token's unstripped text with a subject tag.
    pub fn raw_eq(&self, tag: &str) -> bool {
        match self {
            QueryToken::NonStrict(name) => tag == name.as_str(),
            QueryToken::StrictMatch(name) => tag.strip_prefix('+') == Some(name.as_str()),
            QueryToken::StrictMismatch(name) => tag.strip_prefix('-') == Some(name.as_str()),
        }
    }
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryToken::NonStrict(name) => write!(f, "{}", name),
            QueryToken::StrictMatch(name) => write!(f, "+{}", name),
            QueryToken::StrictMismatch(name) => write!(f, "-{}", name),
        }
    }
}

impl Serialize for QueryToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
