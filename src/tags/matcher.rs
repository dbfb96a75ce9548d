//! Evaluation of a query against a subject's tags.

use super::token::{QueryToken, parse_token};
use serde::{Deserialize, Serialize};

/// Tags attached to one object. Order and duplicates do not affect matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Tags(pub Vec<String>);

impl Tags {
    /// Check whether these tags satisfy `query`.
    pub fn is_tagged<S: AsRef<str>>(&self, query: &[S]) -> bool {
        Query::parse(query).matches(&self.0)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Tags(iter.into_iter().map(Into::into).collect())
    }
}

/// A query whose tokens have been classified once, ready for repeated evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query {
    tokens: Vec<QueryToken>,
}

impl Query {
    pub fn parse<S: AsRef<str>>(raw: &[S]) -> Self {
        Query {
            tokens: raw.iter().map(|t| parse_token(t.as_ref())).collect(),
        }
    }

    pub fn tokens(&self) -> &[QueryToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of `+name` and `-name` tokens.
    pub fn strict_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_strict()).count()
    }

    /// Evaluate the query against a subject's tags.
    pub fn matches<S: AsRef<str>>(&self, subject: &[S]) -> bool {
        if self.tokens.is_empty() {
            return true;
        }
        // Holds even for a query made only of `-name` tokens.
        if subject.is_empty() {
            return false;
        }

        let has = |name: &str| subject.iter().any(|tag| tag.as_ref() == name);

        // OR pass compares unstripped text, so strict tokens take part too.
        if self
            .tokens
            .iter()
            .any(|token| subject.iter().any(|tag| token.raw_eq(tag.as_ref())))
        {
            return true;
        }

        let mut strict = self.strict_count();
        if strict == 0 {
            return false;
        }

        for token in &self.tokens {
            let holds = match token {
                QueryToken::NonStrict(_) => continue,
                QueryToken::StrictMatch(name) => has(name.as_str()),
                QueryToken::StrictMismatch(name) => !has(name.as_str()),
            };
            if holds {
                strict -= 1;
            }
        }

        strict == 0
    }
}

impl<'a> FromIterator<&'a str> for Query {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Query {
            tokens: iter.into_iter().map(parse_token).collect(),
        }
    }
}
