//! Question entity and write payloads
//!
//! Payloads arrive as [`QuestionInput`] (every field optional, exactly as a
//! client may send them) and are presence-checked into a [`QuestionDraft`]
//! before anything touches storage. Create and update share that check.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Identifier assigned by the store, never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub i64);

impl QuestionId {
    /// First id handed out by a fresh store
    pub const FIRST: QuestionId = QuestionId(1);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<i64> for QuestionId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored quiz question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub tags: Vec<String>,
}

impl Question {
    pub fn new(id: QuestionId, draft: QuestionDraft) -> Self {
        Self {
            id,
            text: draft.text,
            choices: draft.choices,
            answer: draft.answer,
            tags: draft.tags,
        }
    }

    /// Replace every field except `id`.
    pub fn apply(&mut self, draft: QuestionDraft) {
        self.text = draft.text;
        self.choices = draft.choices;
        self.answer = draft.answer;
        self.tags = draft.tags;
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Create/update request body as received
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub choices: Option<Vec<String>>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Write payload with every required field present and `tags` normalized
///
/// `TryFrom<QuestionInput>` is the presence check shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub text: String,
    pub choices: Vec<String>,
    pub answer: String,
    pub tags: Vec<String>,
}

impl TryFrom<QuestionInput> for QuestionDraft {
    type Error = ValidationError;

    fn try_from(input: QuestionInput) -> Result<Self, Self::Error> {
        let text = input
            .text
            .ok_or(ValidationError::MissingField { field: "text" })?;
        let choices = input
            .choices
            .ok_or(ValidationError::MissingField { field: "choices" })?;
        let answer = input
            .answer
            .ok_or(ValidationError::MissingField { field: "answer" })?;

        Ok(Self {
            text,
            choices,
            answer,
            tags: input.tags.unwrap_or_default(),
        })
    }
}
