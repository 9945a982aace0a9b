//! Quote record and request payload.

use serde::{Deserialize, Serialize};

/// A single quote held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Store-assigned identifier
    pub id: i64,
    /// Quote text
    pub text: String,
    /// Person credited with the quote
    pub author: String,
}

/// Client-supplied fields for create.
///
/// Missing fields default to empty strings. Any `id` in the payload is
/// ignored since the store owns identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
}

impl QuoteInput {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }

    pub(crate) fn into_quote(self, id: i64) -> Quote {
        Quote {
            id,
            text: self.text,
            author: self.author,
        }
    }
}

/// Client-supplied fields for update.
///
/// Only the fields present in the payload are written; the rest keep their
/// stored values. Any `id` in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct QuoteUpdate {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl QuoteUpdate {
    /// Sets both fields.
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            author: Some(author.into()),
        }
    }

    pub(crate) fn apply_to(self, quote: &mut Quote) {
        if let Some(text) = self.text {
            quote.text = text;
        }
        if let Some(author) = self.author {
            quote.author = author;
        }
    }
}

/// Records every fresh store starts with.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote {
            id: 1,
            text: "The best way to get started is to quit talking and begin doing.".to_string(),
            author: "Walt Disney".to_string(),
        },
        Quote {
            id: 2,
            text: "Don’t let yesterday take up too much of today.".to_string(),
            author: "Will Rogers".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_defaults_missing_fields() {
        let input: QuoteInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, QuoteInput::default());

        let input: QuoteInput = serde_json::from_str(r#"{"author":"Anon"}"#).unwrap();
        assert_eq!(input.text, "");
        assert_eq!(input.author, "Anon");
    }

    #[test]
    fn test_input_ignores_id_and_unknown_fields() {
        let input: QuoteInput =
            serde_json::from_str(r#"{"id":99,"text":"t","author":"a","extra":true}"#).unwrap();
        assert_eq!(input, QuoteInput::new("t", "a"));
    }

    #[test]
    fn test_input_rejects_wrong_types() {
        assert!(serde_json::from_str::<QuoteInput>(r#"{"text":5}"#).is_err());
        assert!(serde_json::from_str::<QuoteInput>("[]").is_err());
    }

    #[test]
    fn test_update_applies_present_fields_only() {
        let mut quote = QuoteInput::new("old text", "old author").into_quote(1);

        let update: QuoteUpdate = serde_json::from_str(r#"{"text":"new text","id":5}"#).unwrap();
        update.apply_to(&mut quote);
        assert_eq!(quote.id, 1);
        assert_eq!(quote.text, "new text");
        assert_eq!(quote.author, "old author");

        let update: QuoteUpdate = serde_json::from_str(r#"{"author":""}"#).unwrap();
        update.apply_to(&mut quote);
        assert_eq!(quote.text, "new text");
        assert_eq!(quote.author, "");

        QuoteUpdate::default().apply_to(&mut quote);
        assert_eq!(quote.text, "new text");
    }

    #[test]
    fn test_quote_serializes_flat() {
        let quote = QuoteInput::new("t", "a").into_quote(7);
        assert_eq!(
            serde_json::to_value(&quote).unwrap(),
            serde_json::json!({"id": 7, "text": "t", "author": "a"})
        );
    }

    #[test]
    fn test_seed_ids_are_sequential() {
        let ids: Vec<i64> = seed_quotes().iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
