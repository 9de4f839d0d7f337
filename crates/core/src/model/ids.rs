use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ident::IdSource;

/// Unique identifier for a Workspace.
///
/// Ids are opaque string tokens: freshly created entities get high-entropy
/// tokens from an [`IdSource`], while imported documents may carry arbitrary
/// strings such as `ws-default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkspaceId(String);

/// Unique identifier for a Topic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicId(String);

/// Unique identifier for a SubTopic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubTopicId(String);

/// Unique identifier for a Question.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

macro_rules! impl_string_id {
    ($name:ident) => {
        impl $name {
            /// Wraps an existing token.
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Draws a fresh token from the given source.
            #[must_use]
            pub fn generate(ids: &IdSource) -> Self {
                Self(ids.next())
            }

            /// Returns the underlying token.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self(token.to_owned())
            }
        }
    };
}

impl_string_id!(WorkspaceId);
impl_string_id!(TopicId);
impl_string_id!(SubTopicId);
impl_string_id!(QuestionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_display_matches_token() {
        let id = WorkspaceId::new("ws-default");
        assert_eq!(id.to_string(), "ws-default");
        assert_eq!(id.as_str(), "ws-default");
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids = IdSource::random();
        assert_ne!(TopicId::generate(&ids), TopicId::generate(&ids));
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = QuestionId::new("q-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"q-1\"");
        let back: QuestionId = serde_json::from_str("\"q-1\"").unwrap();
        assert_eq!(back, id);
    }
}
