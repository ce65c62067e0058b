//! View-state history stack driving which screen the console renders.
//!
//! The stack is an explicit value owned by the session, never a global. It is
//! always non-empty: the root entry can be replaced but not popped.
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CaseId, ClientId, CourtId, DocumentId, HearingId, LawyerId, OpponentId, RoleId, TeamId, UserId,
};

/// Screen kinds, without any identifying payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    Dashboard,
    Case,
    Client,
    Opponent,
    Lawyer,
    Court,
    Hearing,
    Document,
    EditDocument,
    Role,
    Team,
    User,
    Clients,
    Opponents,
    Lawyers,
    Courts,
    Tasks,
    Reports,
    Settings,
    Hearings,
    Documents,
    CreateHearing,
    DocumentForm,
    Roles,
    Teams,
    Users,
}

/// Detail target that is either an existing record or the "new" form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target<Id> {
    Existing(Id),
    New,
}

/// One entry of the navigation history: a screen plus the id it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum ViewState {
    Dashboard,
    Case { case_id: CaseId },
    Client { client_id: ClientId },
    Opponent { opponent_id: OpponentId },
    Lawyer { lawyer_id: LawyerId },
    Court { court_id: CourtId },
    Hearing { hearing_id: HearingId },
    Document { document_id: DocumentId },
    EditDocument { document_id: DocumentId },
    Role { role_id: RoleId },
    Team { team_id: Target<TeamId> },
    User { user_id: Target<UserId> },
    Clients,
    Opponents,
    Lawyers,
    Courts,
    Tasks,
    Reports,
    Settings,
    Hearings,
    Documents,
    CreateHearing,
    DocumentForm,
    Roles,
    Teams,
    Users,
}

impl ViewState {
    /// Screen kind of this entry.
    pub const fn kind(&self) -> View {
        match self {
            ViewState::Dashboard => View::Dashboard,
            ViewState::Case { .. } => View::Case,
            ViewState::Client { .. } => View::Client,
            ViewState::Opponent { .. } => View::Opponent,
            ViewState::Lawyer { .. } => View::Lawyer,
            ViewState::Court { .. } => View::Court,
            ViewState::Hearing { .. } => View::Hearing,
            ViewState::Document { .. } => View::Document,
            ViewState::EditDocument { .. } => View::EditDocument,
            ViewState::Role { .. } => View::Role,
            ViewState::Team { .. } => View::Team,
            ViewState::User { .. } => View::User,
            ViewState::Clients => View::Clients,
            ViewState::Opponents => View::Opponents,
            ViewState::Lawyers => View::Lawyers,
            ViewState::Courts => View::Courts,
            ViewState::Tasks => View::Tasks,
            ViewState::Reports => View::Reports,
            ViewState::Settings => View::Settings,
            ViewState::Hearings => View::Hearings,
            ViewState::Documents => View::Documents,
            ViewState::CreateHearing => View::CreateHearing,
            ViewState::DocumentForm => View::DocumentForm,
            ViewState::Roles => View::Roles,
            ViewState::Teams => View::Teams,
            ViewState::Users => View::Users,
        }
    }
}

impl From<View> for ViewState {
    /// Root entry for a screen kind. Detail kinds have no meaningful
    /// stand-alone entry, so they map to their owning list (or the
    /// dashboard), matching the fallback roots used on unresolved ids.
    fn from(view: View) -> Self {
        match view {
            View::Dashboard | View::Case | View::Client | View::Opponent | View::Lawyer
            | View::Court => ViewState::Dashboard,
            View::Hearing | View::CreateHearing => ViewState::Hearings,
            View::Document | View::EditDocument | View::DocumentForm => ViewState::Documents,
            View::Role => ViewState::Roles,
            View::Team => ViewState::Teams,
            View::User => ViewState::Users,
            View::Clients => ViewState::Clients,
            View::Opponents => ViewState::Opponents,
            View::Lawyers => ViewState::Lawyers,
            View::Courts => ViewState::Courts,
            View::Tasks => ViewState::Tasks,
            View::Reports => ViewState::Reports,
            View::Settings => ViewState::Settings,
            View::Hearings => ViewState::Hearings,
            View::Documents => ViewState::Documents,
            View::Roles => ViewState::Roles,
            View::Teams => ViewState::Teams,
            View::Users => ViewState::Users,
        }
    }
}

/// Session navigation history. Starts on the dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<ViewState>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![ViewState::Dashboard],
        }
    }

    /// Current (top-most) view-state.
    pub fn current(&self) -> ViewState {
        // Invariant: the stack is never empty.
        *self.stack.last().expect("navigation stack is never empty")
    }

    /// Pushes a new entry. Depth is unbounded.
    pub fn navigate_to(&mut self, state: ViewState) {
        self.stack.push(state);
    }

    /// Pops the current entry unless it is the only one left.
    pub fn go_back(&mut self) {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
    }

    /// Replaces the whole history with a single root entry of the given kind.
    /// Used for top-level navigation and as the recovery action when the
    /// current entry references an id that no longer resolves.
    ///
    /// Only payload-free kinds are true roots. Passing a detail kind
    /// deliberately resets to its owning list instead, per the
    /// [`From<View>`](ViewState) mapping, since a detail entry without an
    /// id cannot be rebuilt.
    pub fn navigate_root(&mut self, view: View) {
        self.stack = vec![ViewState::from(view)];
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_dashboard() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), ViewState::Dashboard);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn go_back_on_root_is_a_noop() {
        let mut nav = Navigator::new();
        nav.go_back();
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current(), ViewState::Dashboard);
    }

    #[test]
    fn push_then_back_restores_previous() {
        let mut nav = Navigator::new();
        nav.navigate_to(ViewState::Clients);
        nav.navigate_to(ViewState::Client {
            client_id: ClientId::new(3).unwrap(),
        });
        assert_eq!(nav.depth(), 3);
        nav.go_back();
        assert_eq!(nav.current(), ViewState::Clients);
    }

    #[test]
    fn navigate_root_always_yields_single_entry() {
        let mut nav = Navigator::new();
        nav.navigate_to(ViewState::Documents);
        nav.navigate_to(ViewState::Document {
            document_id: DocumentId::new(1).unwrap(),
        });
        nav.navigate_root(View::Hearings);
        assert_eq!(nav.depth(), 1);
        assert_eq!(nav.current().kind(), View::Hearings);
    }

    #[test]
    fn detail_kinds_reset_to_their_owning_root() {
        let mut nav = Navigator::new();
        nav.navigate_root(View::Document);
        assert_eq!(nav.current(), ViewState::Documents);
        nav.navigate_root(View::Case);
        assert_eq!(nav.current(), ViewState::Dashboard);
        nav.navigate_root(View::User);
        assert_eq!(nav.current(), ViewState::Users);
    }
}
