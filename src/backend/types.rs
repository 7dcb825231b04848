// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Askline Contributors

//! Wire types for the answer backend
//!
//! The response schema is validated on parse: a missing or non-string
//! `answer` and any suggestion without a leading string label are rejected,
//! surfacing as [`BackendError::Malformed`](crate::error::BackendError)
//! instead of being silently coerced.

use serde::de::{SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Request body for `POST /get_answer`
#[derive(Debug, Clone, Serialize)]
pub struct AnswerRequest<'a> {
    pub query: &'a str,
}

/// Response body from the answer backend
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerResponse {
    /// The bot's reply, rendered verbatim (including any markup).
    pub answer: String,

    /// Follow-up queries offered to the user. Superseded by the next response.
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,

    /// Match confidence reported by the backend (0.0-1.0).
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Matched intent label, diagnostic only.
    #[serde(default)]
    pub intent: Option<String>,
}

/// A single follow-up suggestion.
///
/// The wire form is a sequence whose first element is the display label; the
/// backend sends `[question, answer, score]` triples, but only the label is
/// required and trailing elements are tolerated in any order.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub label: String,
    pub answer: Option<String>,
    pub score: Option<f64>,
}

impl Suggestion {
    /// A suggestion carrying only a label (the minimum valid wire form).
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            answer: None,
            score: None,
        }
    }
}

impl<'de> Deserialize<'de> for Suggestion {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SuggestionVisitor;

        impl<'de> Visitor<'de> for SuggestionVisitor {
            type Value = Suggestion;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a sequence with a leading string label")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Suggestion, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let label: String = seq
                    .next_element()?
                    .ok_or_else(|| serde::de::Error::custom("suggestion is empty"))?;

                let mut answer = None;
                let mut score = None;
                while let Some(value) = seq.next_element::<serde_json::Value>()? {
                    match value {
                        serde_json::Value::String(s) if answer.is_none() => answer = Some(s),
                        serde_json::Value::Number(n) if score.is_none() => score = n.as_f64(),
                        // Extra or repeated elements are ignored.
                        _ => {}
                    }
                }

                Ok(Suggestion {
                    label,
                    answer,
                    score,
                })
            }
        }

        deserializer.deserialize_seq(SuggestionVisitor)
    }
}
