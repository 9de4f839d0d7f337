//! Derived-progress computation. Pure functions only; the store calls these
//! after every mutation that can change a completion ratio.

use crate::model::{SubTopic, Topic};

/// Completed/total question counts for some slice of the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuestionTotals {
    pub total: usize,
    pub done: usize,
}

impl QuestionTotals {
    /// Completion percentage rounded to the nearest integer, 0 when there
    /// are no questions.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.done as f64 / self.total as f64;
        (ratio * 100.0).round() as u8
    }
}

fn tally(sub_topics: &[SubTopic]) -> QuestionTotals {
    let mut totals = QuestionTotals::default();
    for sub in sub_topics {
        totals.total += sub.questions.len();
        totals.done += sub.questions.iter().filter(|q| q.done).count();
    }
    totals
}

/// Completion percentage of a topic across all of its sub-topics.
#[must_use]
pub fn topic_progress(sub_topics: &[SubTopic]) -> u8 {
    tally(sub_topics).percentage()
}

/// Question totals across a whole topic list, e.g. a workspace's footer
/// stats.
#[must_use]
pub fn sheet_totals(topics: &[Topic]) -> QuestionTotals {
    let mut totals = QuestionTotals::default();
    for topic in topics {
        let t = tally(&topic.sub_topics);
        totals.total += t.total;
        totals.done += t.done;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuestionId, SubTopicId, TopicId};

    fn question(id: &str, done: bool) -> Question {
        Question {
            id: QuestionId::new(id),
            title: id.to_owned(),
            link: None,
            difficulty: None,
            done,
        }
    }

    fn sub_topic(id: &str, questions: Vec<Question>) -> SubTopic {
        let mut st = SubTopic::new(SubTopicId::new(id), id);
        st.questions = questions;
        st
    }

    #[test]
    fn empty_topic_is_zero_percent() {
        assert_eq!(topic_progress(&[]), 0);
        assert_eq!(topic_progress(&[sub_topic("st1", vec![])]), 0);
    }

    #[test]
    fn progress_counts_across_sub_topics() {
        let subs = vec![
            sub_topic("st1", vec![question("q1", true), question("q2", false)]),
            sub_topic("st2", vec![question("q3", true), question("q4", true)]),
        ];
        assert_eq!(topic_progress(&subs), 75);
    }

    #[test]
    fn progress_rounds_to_nearest_integer() {
        // 1 of 3 done: 33.33 rounds down; 2 of 3: 66.67 rounds up.
        let one_of_three = vec![sub_topic(
            "st1",
            vec![
                question("q1", true),
                question("q2", false),
                question("q3", false),
            ],
        )];
        assert_eq!(topic_progress(&one_of_three), 33);

        let two_of_three = vec![sub_topic(
            "st1",
            vec![
                question("q1", true),
                question("q2", true),
                question("q3", false),
            ],
        )];
        assert_eq!(topic_progress(&two_of_three), 67);
    }

    #[test]
    fn sheet_totals_span_topics() {
        let mut arrays = Topic::new(TopicId::new("t1"), "Arrays");
        arrays.sub_topics = vec![sub_topic(
            "st1",
            vec![question("q1", true), question("q2", false)],
        )];
        let mut graphs = Topic::new(TopicId::new("t2"), "Graphs");
        graphs.sub_topics = vec![sub_topic("st2", vec![question("q3", true)])];

        let totals = sheet_totals(&[arrays, graphs]);
        assert_eq!(totals.total, 3);
        assert_eq!(totals.done, 2);
        assert_eq!(totals.percentage(), 67);
    }
}
