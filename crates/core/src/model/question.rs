use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question link is not a valid URL: {0}")]
    InvalidLink(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Difficulty rating carried by a question, matching the common
/// Easy/Medium/Hard scale of interview sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        };
        write!(f, "{label}")
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Leaf item of the sheet tree: a single practice question with an optional
/// reference link and difficulty, plus the completion flag that feeds the
/// parent topic's derived progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub done: bool,
}

/// Unvalidated question input as submitted by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuestionDraft {
    pub title: String,
    pub link: Option<String>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionDraft {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: None,
            difficulty: None,
        }
    }

    /// Validates the draft: the title must be non-empty after trimming and
    /// the link, when present, must parse as a URL.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError::EmptyTitle` or `QuestionError::InvalidLink`.
    pub fn validate(self) -> Result<ValidatedQuestion, QuestionError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(QuestionError::EmptyTitle);
        }

        let link = match self.link.map(|l| l.trim().to_owned()).filter(|l| !l.is_empty()) {
            Some(raw) => {
                Url::parse(&raw).map_err(|_| QuestionError::InvalidLink(raw.clone()))?;
                Some(raw)
            }
            None => None,
        };

        Ok(ValidatedQuestion {
            title,
            link,
            difficulty: self.difficulty,
        })
    }
}

/// A draft that passed validation and is ready for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedQuestion {
    title: String,
    link: Option<String>,
    difficulty: Option<Difficulty>,
}

impl ValidatedQuestion {
    /// Attaches an id, producing a question that starts not-done.
    #[must_use]
    pub fn assign_id(self, id: QuestionId) -> Question {
        Question {
            id,
            title: self.title,
            link: self.link,
            difficulty: self.difficulty,
            done: false,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_empty_title() {
        let err = QuestionDraft::titled("   ").validate().unwrap_err();
        assert_eq!(err, QuestionError::EmptyTitle);
    }

    #[test]
    fn draft_rejects_unparseable_link() {
        let draft = QuestionDraft {
            title: "Two Sum".into(),
            link: Some("not a url".into()),
            difficulty: None,
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err, QuestionError::InvalidLink("not a url".into()));
    }

    #[test]
    fn draft_drops_blank_link() {
        let draft = QuestionDraft {
            title: "Two Sum".into(),
            link: Some("   ".into()),
            difficulty: None,
        };
        let question = draft.validate().unwrap().assign_id(QuestionId::new("q1"));
        assert_eq!(question.link, None);
    }

    #[test]
    fn validated_question_starts_not_done() {
        let draft = QuestionDraft {
            title: "  Two Sum  ".into(),
            link: Some("https://leetcode.com/problems/two-sum".into()),
            difficulty: Some(Difficulty::Easy),
        };
        let question = draft.validate().unwrap().assign_id(QuestionId::new("q1"));
        assert_eq!(question.title, "Two Sum");
        assert_eq!(
            question.link.as_deref(),
            Some("https://leetcode.com/problems/two-sum")
        );
        assert_eq!(question.difficulty, Some(Difficulty::Easy));
        assert!(!question.done);
    }

    #[test]
    fn question_serializes_with_camel_case_names() {
        let question = Question {
            id: QuestionId::new("q1"),
            title: "Two Sum".into(),
            link: None,
            difficulty: Some(Difficulty::Medium),
            done: true,
        };
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "q1",
                "title": "Two Sum",
                "difficulty": "Medium",
                "done": true,
            })
        );
    }
}
