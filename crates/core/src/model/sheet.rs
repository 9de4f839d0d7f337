use serde::{Deserialize, Serialize};

use crate::model::ids::WorkspaceId;
use crate::model::workspace::Workspace;

/// Id of the workspace created on first run.
pub const DEFAULT_WORKSPACE_ID: &str = "ws-default";

/// Title of the workspace created on first run.
pub const DEFAULT_WORKSPACE_TITLE: &str = "My First Workspace";

/// The whole persisted aggregate: every workspace plus the pointer to the
/// one currently targeted by topic/sub-topic/question operations.
///
/// This is the exact shape written to the storage slot
/// (`{ "workspaces": [...], "activeWorkspaceId": ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub workspaces: Vec<Workspace>,
    #[serde(default)]
    pub active_workspace_id: Option<WorkspaceId>,
}

impl Sheet {
    /// First-run state: a single default workspace, active.
    #[must_use]
    pub fn initial() -> Self {
        let default = Workspace::new(
            WorkspaceId::new(DEFAULT_WORKSPACE_ID),
            DEFAULT_WORKSPACE_TITLE,
        );
        Self {
            active_workspace_id: Some(default.id.clone()),
            workspaces: vec![default],
        }
    }

    /// Finds a workspace by id.
    #[must_use]
    pub fn workspace(&self, id: &WorkspaceId) -> Option<&Workspace> {
        self.workspaces.iter().find(|w| &w.id == id)
    }

    /// Returns the workspace the active pointer names, if any. A dangling
    /// pointer behaves the same as no pointer.
    #[must_use]
    pub fn active_workspace(&self) -> Option<&Workspace> {
        let id = self.active_workspace_id.as_ref()?;
        self.workspace(id)
    }

    /// Mutable variant of [`Sheet::active_workspace`].
    #[must_use]
    pub fn active_workspace_mut(&mut self) -> Option<&mut Workspace> {
        let id = self.active_workspace_id.clone()?;
        self.workspaces.iter_mut().find(|w| w.id == id)
    }
}
