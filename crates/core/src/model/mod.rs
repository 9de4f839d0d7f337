mod ids;
mod question;
mod sheet;
mod sub_topic;
mod topic;
mod workspace;

pub use ids::{QuestionId, SubTopicId, TopicId, WorkspaceId};
pub use question::{Difficulty, Question, QuestionDraft, QuestionError, ValidatedQuestion};
pub use sheet::{DEFAULT_WORKSPACE_ID, DEFAULT_WORKSPACE_TITLE, Sheet};
pub use sub_topic::SubTopic;
pub use topic::Topic;
pub use workspace::Workspace;
