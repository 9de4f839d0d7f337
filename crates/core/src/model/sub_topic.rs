use serde::{Deserialize, Serialize};

use crate::model::ids::SubTopicId;
use crate::model::question::Question;

/// A named grouping of questions within a topic. Question order is the
/// drag-and-drop order and is preserved across persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTopic {
    pub id: SubTopicId,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl SubTopic {
    /// Creates an empty sub-topic. Titles are stored as given.
    #[must_use]
    pub fn new(id: SubTopicId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            questions: Vec::new(),
        }
    }

    /// Finds a question by id.
    #[must_use]
    pub fn question(&self, id: &crate::model::ids::QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }
}
