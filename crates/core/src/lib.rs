#![forbid(unsafe_code)]

//! Domain model for the interview-prep sheet: the workspace → topic →
//! sub-topic → question tree, derived-progress computation, and the pure
//! reorder helper. No I/O lives here.

pub mod ident;
pub mod model;
pub mod order;
pub mod progress;

pub use ident::IdSource;
pub use model::{
    Difficulty, Question, QuestionDraft, QuestionError, QuestionId, Sheet, SubTopic, SubTopicId,
    Topic, TopicId, Workspace, WorkspaceId,
};
pub use order::move_by_id;
pub use progress::{QuestionTotals, sheet_totals, topic_progress};
