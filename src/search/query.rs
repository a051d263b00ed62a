//! Query sanitizing.
//!
//! User input is never interpolated into the FTS5 query language. It is
//! wrapped as a single phrase string with every embedded `"` doubled, so
//! operators such as `OR`, `NEAR` or column filters typed by a user are
//! matched as literal text.

use crate::error::SearchError;

const PHRASE_DELIMITER: char = '"';

/// An FTS5 phrase string, safe to bind as the right-hand side of `MATCH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FtsPhrase(String);

impl FtsPhrase {
    /// Wrap `text` in phrase delimiters, doubling any delimiter inside it.
    pub fn escape(text: &str) -> Self {
        let mut phrase = String::with_capacity(text.len() + 2);
        phrase.push(PHRASE_DELIMITER);
        for c in text.chars() {
            if c == PHRASE_DELIMITER {
                phrase.push(PHRASE_DELIMITER);
            }
            phrase.push(c);
        }
        phrase.push(PHRASE_DELIMITER);
        Self(phrase)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A trimmed, non-empty user query together with its escaped phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedQuery {
    text: String,
    phrase: FtsPhrase,
}

impl SanitizedQuery {
    /// Trim `raw` and escape it. Blank input is [`SearchError::EmptyQuery`].
    pub fn new(raw: &str) -> Result<Self, SearchError> {
        let text = raw.trim();
        if text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        Ok(Self {
            text: text.to_string(),
            phrase: FtsPhrase::escape(text),
        })
    }

    /// The trimmed query as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn phrase(&self) -> &FtsPhrase {
        &self.phrase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries_are_rejected() {
        for raw in ["", "   ", "\t\n "] {
            assert!(matches!(
                SanitizedQuery::new(raw),
                Err(SearchError::EmptyQuery)
            ));
        }
    }

    #[test]
    fn test_query_is_trimmed_and_wrapped() {
        let q = SanitizedQuery::new("  circuit  ").unwrap();
        assert_eq!(q.text(), "circuit");
        assert_eq!(q.phrase().as_str(), "\"circuit\"");
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let q = SanitizedQuery::new(" quantum  circuit ").unwrap();
        assert_eq!(q.phrase().as_str(), "\"quantum  circuit\"");
    }

    #[test]
    fn test_delimiters_are_doubled() {
        let q = SanitizedQuery::new(r#"foo" OR "bar"#).unwrap();
        assert_eq!(q.phrase().as_str(), r#""foo"" OR ""bar""#);
    }

    #[test]
    fn test_lone_delimiter() {
        assert_eq!(FtsPhrase::escape("\"").as_str(), "\"\"\"\"");
    }

    #[test]
    fn test_other_syntax_is_left_alone_inside_phrase() {
        // Inside a phrase string these have no meaning to FTS5.
        let phrase = FtsPhrase::escape("title:foo* NEAR(bar)");
        assert_eq!(phrase.as_str(), "\"title:foo* NEAR(bar)\"");
    }
}
