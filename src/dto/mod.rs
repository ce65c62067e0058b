//! View models handed to the rendering layer.
//!
//! Each screen gets a flat, display-ready struct: bilingual labels arrive
//! resolved to the session language and option references are already
//! human-readable strings.
pub mod admin;
pub mod case;
pub mod client;
pub mod dashboard;
pub mod directory;
pub mod document;
pub mod hearing;
pub mod reports;
pub mod settings;

use serde::Serialize;

/// Fully resolved screen content, one variant per renderable view.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "screen", rename_all = "camelCase")]
pub enum Screen {
    Dashboard(dashboard::DashboardPage),
    Case(Box<case::CasePage>),
    Client(Box<client::ClientPage>),
    Clients(client::ClientsPage),
    Opponent(directory::OpponentPage),
    Opponents(directory::OpponentsPage),
    Lawyer(directory::LawyerPage),
    Lawyers(directory::LawyersPage),
    Court(directory::CourtPage),
    Courts(directory::CourtsPage),
    Hearing(Box<hearing::HearingPage>),
    Hearings(hearing::HearingsPage),
    CreateHearing(hearing::HearingFormPage),
    Document(Box<document::DocumentPage>),
    Documents(document::DocumentsPage),
    DocumentForm(document::DocumentFormPage),
    Tasks(case::TasksPage),
    Reports(reports::ReportsPage),
    Settings(settings::SettingsPage),
    Role(admin::RolePage),
    Roles(admin::RolesPage),
    Team(admin::TeamPage),
    Teams(admin::TeamsPage),
    User(admin::UserPage),
    Users(admin::UsersPage),
}
