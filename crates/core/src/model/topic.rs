use serde::{Deserialize, Serialize};

use crate::model::ids::{SubTopicId, TopicId};
use crate::model::sub_topic::SubTopic;
use crate::progress::topic_progress;

/// A named grouping of sub-topics with a derived completion percentage.
///
/// `progress` is owned by the store: it is recomputed and overwritten after
/// any mutation beneath the topic and must never be set directly by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default)]
    pub progress: u8,
    #[serde(default)]
    pub sub_topics: Vec<SubTopic>,
}

impl Topic {
    /// Creates an empty topic at zero progress.
    #[must_use]
    pub fn new(id: TopicId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            progress: 0,
            sub_topics: Vec::new(),
        }
    }

    /// Finds a sub-topic by id.
    #[must_use]
    pub fn sub_topic(&self, id: &SubTopicId) -> Option<&SubTopic> {
        self.sub_topics.iter().find(|st| &st.id == id)
    }

    /// Finds a sub-topic by id, mutably.
    #[must_use]
    pub fn sub_topic_mut(&mut self, id: &SubTopicId) -> Option<&mut SubTopic> {
        self.sub_topics.iter_mut().find(|st| &st.id == id)
    }

    /// Re-derives `progress` from the questions currently nested under this
    /// topic.
    pub fn refresh_progress(&mut self) {
        self.progress = topic_progress(&self.sub_topics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ids::QuestionId;
    use crate::model::question::QuestionDraft;

    #[test]
    fn topic_round_trips_with_camel_case_sub_topics() {
        let mut topic = Topic::new(TopicId::new("t1"), "Arrays");
        topic
            .sub_topics
            .push(SubTopic::new(SubTopicId::new("st1"), "Core"));

        let json = serde_json::to_value(&topic).unwrap();
        assert!(json.get("subTopics").is_some());
        assert!(json.get("sub_topics").is_none());

        let back: Topic = serde_json::from_value(json).unwrap();
        assert_eq!(back, topic);
    }

    #[test]
    fn refresh_progress_tracks_done_questions() {
        let mut topic = Topic::new(TopicId::new("t1"), "Arrays");
        let mut sub = SubTopic::new(SubTopicId::new("st1"), "Core");
        sub.questions.push(
            QuestionDraft::titled("Two Sum")
                .validate()
                .unwrap()
                .assign_id(QuestionId::new("q1")),
        );
        sub.questions.push(
            QuestionDraft::titled("3Sum")
                .validate()
                .unwrap()
                .assign_id(QuestionId::new("q2")),
        );
        topic.sub_topics.push(sub);

        topic.refresh_progress();
        assert_eq!(topic.progress, 0);

        topic.sub_topics[0].questions[0].done = true;
        topic.refresh_progress();
        assert_eq!(topic.progress, 50);
    }
}
