//! Mock repository used by service-layer unit tests.
use mockall::mock;

use crate::domain::access::{PermissionGroup, Role, UserDetail};
use crate::domain::case::Case;
use crate::domain::client::{Client, ClientDetail};
use crate::domain::court::{Court, CourtDetail};
use crate::domain::document::{ClientDocument, DocumentDetail};
use crate::domain::hearing::{Hearing, HearingDetail};
use crate::domain::lawyer::{Lawyer, LawyerDetail};
use crate::domain::opponent::{Opponent, OpponentDetail};
use crate::domain::options::OptionCatalog;
use crate::domain::task::Task;
use crate::domain::team::{Team, TeamDetail};
use crate::domain::types::{
    CaseId, ClientId, CourtId, DocumentId, HearingId, LawyerId, OpponentId, RoleId, TeamId, UserId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    AccessReader, CaseListQuery, CaseReader, ClientReader, CourtReader, DocumentReader,
    HearingReader, LawyerReader, ListQuery, OpponentReader, OptionReader, TaskReader, TeamReader,
};

mock! {
    pub Repository {}

    impl CaseReader for Repository {
        fn get_case_by_id(&self, id: CaseId) -> RepositoryResult<Option<Case>>;
        fn list_cases(&self, query: CaseListQuery) -> RepositoryResult<Vec<Case>>;
    }

    impl ClientReader for Repository {
        fn get_client_by_id(&self, id: ClientId) -> RepositoryResult<Option<ClientDetail>>;
        fn list_clients(&self, query: ListQuery) -> RepositoryResult<Vec<Client>>;
    }

    impl OpponentReader for Repository {
        fn get_opponent_by_id(&self, id: OpponentId) -> RepositoryResult<Option<OpponentDetail>>;
        fn list_opponents(&self, query: ListQuery) -> RepositoryResult<Vec<Opponent>>;
    }

    impl LawyerReader for Repository {
        fn get_lawyer_by_id(&self, id: LawyerId) -> RepositoryResult<Option<LawyerDetail>>;
        fn list_lawyers(&self, query: ListQuery) -> RepositoryResult<Vec<Lawyer>>;
    }

    impl CourtReader for Repository {
        fn get_court_by_id(&self, id: CourtId) -> RepositoryResult<Option<CourtDetail>>;
        fn list_courts(&self, query: ListQuery) -> RepositoryResult<Vec<Court>>;
    }

    impl HearingReader for Repository {
        fn get_hearing_by_id(&self, id: HearingId) -> RepositoryResult<Option<HearingDetail>>;
        fn list_hearings(&self) -> RepositoryResult<Vec<Hearing>>;
    }

    impl DocumentReader for Repository {
        fn get_document_by_id(&self, id: DocumentId) -> RepositoryResult<Option<DocumentDetail>>;
        fn list_documents(&self, query: ListQuery) -> RepositoryResult<Vec<ClientDocument>>;
    }

    impl TaskReader for Repository {
        fn list_tasks(&self) -> RepositoryResult<Vec<Task>>;
        fn list_tasks_for_case(&self, case_id: CaseId) -> RepositoryResult<Vec<Task>>;
    }

    impl TeamReader for Repository {
        fn get_team_by_id(&self, id: TeamId) -> RepositoryResult<Option<TeamDetail>>;
        fn list_teams(&self) -> RepositoryResult<Vec<Team>>;
    }

    impl AccessReader for Repository {
        fn get_role_by_id(&self, id: RoleId) -> RepositoryResult<Option<Role>>;
        fn list_roles(&self) -> RepositoryResult<Vec<Role>>;
        fn permission_groups(&self) -> RepositoryResult<Vec<PermissionGroup>>;
        fn get_user_by_id(&self, id: UserId) -> RepositoryResult<Option<UserDetail>>;
        fn list_users(&self) -> RepositoryResult<Vec<UserDetail>>;
    }

    impl OptionReader for Repository {
        fn option_catalog(&self) -> RepositoryResult<OptionCatalog>;
    }
}
