use serde::{Deserialize, Serialize};

use crate::model::ids::{TopicId, WorkspaceId};
use crate::model::topic::Topic;

/// Top-level named container holding an ordered set of topics; the unit of
/// import/export and active-selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub id: WorkspaceId,
    pub title: String,
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Workspace {
    /// Creates an empty workspace. Titles are stored as given, empty
    /// included.
    #[must_use]
    pub fn new(id: WorkspaceId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            topics: Vec::new(),
        }
    }

    /// Finds a topic by id.
    #[must_use]
    pub fn topic(&self, id: &TopicId) -> Option<&Topic> {
        self.topics.iter().find(|t| &t.id == id)
    }

    /// Finds a topic by id, mutably.
    #[must_use]
    pub fn topic_mut(&mut self, id: &TopicId) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| &t.id == id)
    }
}
