//! The hierarchical store: single source of truth for every workspace and
//! the active-workspace pointer.
//!
//! All operations are synchronous and total. Mutations follow the same
//! shape: apply the in-memory change, re-derive any affected topic's
//! progress, then write the whole sheet through to the repository. A failed
//! write never rolls the in-memory change back — the sheet in memory stays
//! authoritative and the error is surfaced to the caller.
//!
//! Operating on an id that no longer exists (a stale drag reference, a
//! double-fired delete) is a silent no-op.

use std::sync::Arc;

use prep_core::model::{
    Question, QuestionDraft, QuestionId, Sheet, SubTopic, SubTopicId, Topic, TopicId, Workspace,
    WorkspaceId,
};
use prep_core::progress::{QuestionTotals, sheet_totals};
use prep_core::{IdSource, move_by_id};
use storage::SheetRepository;

use crate::error::SheetServiceError;
use crate::transfer;

pub struct SheetService {
    sheet: Sheet,
    repo: Arc<dyn SheetRepository>,
    ids: IdSource,
}

impl SheetService {
    /// Loads the persisted snapshot, falling back to the first-run default
    /// (one active workspace) when no snapshot exists or it cannot be read.
    #[must_use]
    pub fn load(repo: Arc<dyn SheetRepository>, ids: IdSource) -> Self {
        let sheet = match repo.load() {
            Ok(Some(sheet)) => sheet,
            Ok(None) => Sheet::initial(),
            Err(err) => {
                log::warn!("discarding unreadable sheet snapshot: {err}");
                Sheet::initial()
            }
        };
        Self { sheet, repo, ids }
    }

    //
    // ─── READ ACCESSORS ────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    #[must_use]
    pub fn workspaces(&self) -> &[Workspace] {
        &self.sheet.workspaces
    }

    /// The workspace the active pointer names, if any.
    #[must_use]
    pub fn active_workspace(&self) -> Option<&Workspace> {
        self.sheet.active_workspace()
    }

    /// Question totals across the active workspace (footer stats). Zero
    /// totals when no workspace is active.
    #[must_use]
    pub fn active_totals(&self) -> QuestionTotals {
        self.sheet
            .active_workspace()
            .map(|ws| sheet_totals(&ws.topics))
            .unwrap_or_default()
    }

    //
    // ─── WORKSPACE OPERATIONS ──────────────────────────────────────────────────
    //

    /// Creates a workspace and makes it active. Titles are stored as given;
    /// nothing blocks creation.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails; the
    /// workspace exists in memory regardless.
    pub fn add_workspace(
        &mut self,
        title: impl Into<String>,
    ) -> Result<WorkspaceId, SheetServiceError> {
        let id = WorkspaceId::generate(&self.ids);
        self.sheet.workspaces.push(Workspace::new(id.clone(), title));
        self.sheet.active_workspace_id = Some(id.clone());
        self.persist()?;
        Ok(id)
    }

    /// Deletes a workspace and its whole topic tree. If it was active, the
    /// first remaining workspace becomes active; with none left the pointer
    /// clears.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn delete_workspace(&mut self, id: &WorkspaceId) -> Result<(), SheetServiceError> {
        let before = self.sheet.workspaces.len();
        self.sheet.workspaces.retain(|w| &w.id != id);
        if self.sheet.workspaces.len() == before {
            return Ok(());
        }
        if self.sheet.active_workspace_id.as_ref() == Some(id) {
            self.sheet.active_workspace_id = self.sheet.workspaces.first().map(|w| w.id.clone());
        }
        self.persist()
    }

    /// Points the active pointer at `id` without validating existence; a
    /// dangling pointer simply yields "no active workspace" downstream.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn set_active_workspace(&mut self, id: WorkspaceId) -> Result<(), SheetServiceError> {
        self.sheet.active_workspace_id = Some(id);
        self.persist()
    }

    /// Renames a workspace in place; an absent id is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn update_workspace_title(
        &mut self,
        id: &WorkspaceId,
        title: impl Into<String>,
    ) -> Result<(), SheetServiceError> {
        let Some(workspace) = self.sheet.workspaces.iter_mut().find(|w| &w.id == id) else {
            return Ok(());
        };
        workspace.title = title.into();
        self.persist()
    }

    //
    // ─── TOPIC OPERATIONS (ACTIVE WORKSPACE) ───────────────────────────────────
    //

    /// Appends a topic to the active workspace. Returns `Ok(None)` when no
    /// workspace is active.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn add_topic(
        &mut self,
        title: impl Into<String>,
    ) -> Result<Option<TopicId>, SheetServiceError> {
        let ids = self.ids.clone();
        let title = title.into();
        let Some(workspace) = self.sheet.active_workspace_mut() else {
            return Ok(None);
        };
        let id = TopicId::generate(&ids);
        workspace.topics.push(Topic::new(id.clone(), title));
        self.persist()?;
        Ok(Some(id))
    }

    /// Deletes a topic and its subtree from the active workspace.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn delete_topic(&mut self, id: &TopicId) -> Result<(), SheetServiceError> {
        let Some(workspace) = self.sheet.active_workspace_mut() else {
            return Ok(());
        };
        let before = workspace.topics.len();
        workspace.topics.retain(|t| &t.id != id);
        if workspace.topics.len() == before {
            return Ok(());
        }
        self.persist()
    }

    /// Renames a topic in the active workspace.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn update_topic_title(
        &mut self,
        id: &TopicId,
        title: impl Into<String>,
    ) -> Result<(), SheetServiceError> {
        let title = title.into();
        let Some(topic) = self.topic_mut(id) else {
            return Ok(());
        };
        topic.title = title;
        self.persist()
    }

    /// Moves the topic `active_id` to the position of `over_id`, shifting
    /// the topics in between. Stale or equal ids are a no-op.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn reorder_topics(
        &mut self,
        active_id: &TopicId,
        over_id: &TopicId,
    ) -> Result<(), SheetServiceError> {
        let Some(workspace) = self.sheet.active_workspace_mut() else {
            return Ok(());
        };
        if move_by_id(
            &mut workspace.topics,
            active_id.as_str(),
            over_id.as_str(),
            |t| t.id.as_str(),
        ) {
            self.persist()?;
        }
        Ok(())
    }

    //
    // ─── SUB-TOPIC OPERATIONS ──────────────────────────────────────────────────
    //

    /// Appends a sub-topic to a topic in the active workspace. Returns
    /// `Ok(None)` when the topic (or an active workspace) is missing.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn add_sub_topic(
        &mut self,
        topic_id: &TopicId,
        title: impl Into<String>,
    ) -> Result<Option<SubTopicId>, SheetServiceError> {
        let ids = self.ids.clone();
        let title = title.into();
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(None);
        };
        let id = SubTopicId::generate(&ids);
        topic.sub_topics.push(SubTopic::new(id.clone(), title));
        self.persist()?;
        Ok(Some(id))
    }

    /// Deletes a sub-topic and its questions, then re-derives the parent
    /// topic's progress.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn delete_sub_topic(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
    ) -> Result<(), SheetServiceError> {
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(());
        };
        let before = topic.sub_topics.len();
        topic.sub_topics.retain(|st| &st.id != sub_topic_id);
        if topic.sub_topics.len() == before {
            return Ok(());
        }
        topic.refresh_progress();
        self.persist()
    }

    /// Renames a sub-topic.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn update_sub_topic_title(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
        title: impl Into<String>,
    ) -> Result<(), SheetServiceError> {
        let title = title.into();
        let Some(sub_topic) = self.sub_topic_mut(topic_id, sub_topic_id) else {
            return Ok(());
        };
        sub_topic.title = title;
        self.persist()
    }

    /// Reorders sub-topics within a topic with the same move-and-shift
    /// semantics as [`SheetService::reorder_topics`].
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn reorder_sub_topics(
        &mut self,
        topic_id: &TopicId,
        active_id: &SubTopicId,
        over_id: &SubTopicId,
    ) -> Result<(), SheetServiceError> {
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(());
        };
        if move_by_id(
            &mut topic.sub_topics,
            active_id.as_str(),
            over_id.as_str(),
            |st| st.id.as_str(),
        ) {
            self.persist()?;
        }
        Ok(())
    }

    //
    // ─── QUESTION OPERATIONS ───────────────────────────────────────────────────
    //

    /// Validates the draft and appends the question (not done) to the given
    /// sub-topic, re-deriving the parent topic's progress. Returns
    /// `Ok(None)` when the scope ids don't resolve.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Question` when the draft fails
    /// validation (nothing is mutated), or `SheetServiceError::Storage` if
    /// the write-through fails.
    pub fn add_question(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
        draft: QuestionDraft,
    ) -> Result<Option<QuestionId>, SheetServiceError> {
        let validated = draft.validate()?;
        let ids = self.ids.clone();
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(None);
        };
        let Some(sub_topic) = topic.sub_topic_mut(sub_topic_id) else {
            return Ok(None);
        };
        let id = QuestionId::generate(&ids);
        sub_topic.questions.push(validated.assign_id(id.clone()));
        topic.refresh_progress();
        self.persist()?;
        Ok(Some(id))
    }

    /// Deletes a question and re-derives the parent topic's progress.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn delete_question(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
        question_id: &QuestionId,
    ) -> Result<(), SheetServiceError> {
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(());
        };
        let Some(sub_topic) = topic.sub_topic_mut(sub_topic_id) else {
            return Ok(());
        };
        let before = sub_topic.questions.len();
        sub_topic.questions.retain(|q| &q.id != question_id);
        if sub_topic.questions.len() == before {
            return Ok(());
        }
        topic.refresh_progress();
        self.persist()
    }

    /// Flips a question's done flag and re-derives the parent topic's
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn toggle_question_done(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
        question_id: &QuestionId,
    ) -> Result<(), SheetServiceError> {
        let Some(topic) = self.topic_mut(topic_id) else {
            return Ok(());
        };
        let Some(question) = topic
            .sub_topic_mut(sub_topic_id)
            .and_then(|st| st.questions.iter_mut().find(|q| &q.id == question_id))
        else {
            return Ok(());
        };
        question.done = !question.done;
        topic.refresh_progress();
        self.persist()
    }

    /// Reorders questions within a sub-topic.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Storage` if the write-through fails.
    pub fn reorder_questions(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
        active_id: &QuestionId,
        over_id: &QuestionId,
    ) -> Result<(), SheetServiceError> {
        let Some(sub_topic) = self.sub_topic_mut(topic_id, sub_topic_id) else {
            return Ok(());
        };
        if move_by_id(
            &mut sub_topic.questions,
            active_id.as_str(),
            over_id.as_str(),
            |q: &Question| q.id.as_str(),
        ) {
            self.persist()?;
        }
        Ok(())
    }

    //
    // ─── IMPORT / EXPORT ───────────────────────────────────────────────────────
    //

    /// Serializes every workspace as an indented JSON document. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Export` if serialization fails.
    pub fn export_json(&self) -> Result<String, SheetServiceError> {
        transfer::export_workspaces(&self.sheet.workspaces).map_err(SheetServiceError::Export)
    }

    /// Replaces the whole workspace collection with a decoded backup and
    /// activates its first workspace. Progress is re-derived for every
    /// imported topic, so stale values in the document cannot break the
    /// invariant.
    ///
    /// # Errors
    ///
    /// Returns `SheetServiceError::Import` for a malformed or empty
    /// document — the store is left exactly as it was. Returns
    /// `SheetServiceError::Storage` if the write-through fails after the
    /// in-memory replacement committed.
    pub fn import_workspaces(&mut self, json: &str) -> Result<(), SheetServiceError> {
        let mut workspaces = transfer::parse_backup(json)?;
        for workspace in &mut workspaces {
            for topic in &mut workspace.topics {
                topic.refresh_progress();
            }
        }
        self.sheet.active_workspace_id = workspaces.first().map(|w| w.id.clone());
        self.sheet.workspaces = workspaces;
        self.persist()
    }

    //
    // ─── INTERNALS ─────────────────────────────────────────────────────────────
    //

    fn topic_mut(&mut self, topic_id: &TopicId) -> Option<&mut Topic> {
        self.sheet.active_workspace_mut()?.topic_mut(topic_id)
    }

    fn sub_topic_mut(
        &mut self,
        topic_id: &TopicId,
        sub_topic_id: &SubTopicId,
    ) -> Option<&mut SubTopic> {
        self.topic_mut(topic_id)?.sub_topic_mut(sub_topic_id)
    }

    fn persist(&self) -> Result<(), SheetServiceError> {
        if let Err(err) = self.repo.save(&self.sheet) {
            log::warn!("sheet snapshot write failed, in-memory state kept: {err}");
            return Err(err.into());
        }
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
