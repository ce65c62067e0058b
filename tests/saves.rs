//! End-to-end save flows: form input through typed conversion into the
//! save services, plus the validation errors the screens surface.
use chrono::NaiveDate;

use qadaya::domain::access::UserPayload;
use qadaya::domain::case::NewCase;
use qadaya::domain::client::NewClient;
use qadaya::domain::court::NewCourt;
use qadaya::domain::document::{DocumentPayload, MovementStatus, NewMovement, StorageKind};
use qadaya::domain::hearing::NewHearing;
use qadaya::domain::lawyer::NewLawyer;
use qadaya::domain::opponent::NewOpponent;
use qadaya::domain::task::{NewTask, TaskPriority, TaskStatus};
use qadaya::domain::team::TeamPayload;
use qadaya::domain::types::Language;
use qadaya::forms::admin::{TeamForm, UserForm};
use qadaya::forms::case::{CaseForm, TaskForm};
use qadaya::forms::client::ClientForm;
use qadaya::forms::directory::{CourtForm, LawyerForm, OpponentForm};
use qadaya::forms::document::{DocumentForm, MovementForm};
use qadaya::forms::hearing::HearingForm;
use qadaya::services::{ServiceError, admin, case, client, directory, document, hearing};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn case_and_task_forms_save() {
    let form = CaseForm {
        name_ar: Some("983 / 11ق".to_string()),
        name_en: None,
        description: Some("Compensation claim".to_string()),
        client_id: 3,
        opponent_id: Some(2),
        partner_id: 5,
        court_id: Some(1),
        start_date: date(2024, 1, 15),
    };
    let payload = NewCase::try_from(&form).unwrap();
    assert!(case::save_case(&payload, Language::Ar).is_ok());

    let form = TaskForm {
        case_id: 1116,
        title: "Draft the appeal memorandum".to_string(),
        description: None,
        due_date: date(2024, 9, 10),
        status: TaskStatus::Todo,
        priority: TaskPriority::High,
        parent_id: None,
    };
    let payload = NewTask::try_from(&form).unwrap();
    assert!(case::save_task(&payload).is_ok());
}

#[test]
fn client_form_saves() {
    let form = ClientForm {
        name_ar: None,
        name_en: Some("Nile Shipping Co.".to_string()),
        print_name: "Nile Shipping".to_string(),
        code: Some("NSC".to_string()),
        contact_email: Some("counsel@nileshipping.example".to_string()),
        contact_phone: Some("+20 100 555 0199".to_string()),
        engaged_from: Some(date(2024, 2, 1)),
    };
    let payload = NewClient::try_from(&form).unwrap();
    assert!(client::save_client(&payload, Language::En).is_ok());
}

#[test]
fn directory_forms_save() {
    let form = OpponentForm {
        name_ar: Some("شركة النقل".to_string()),
        name_en: None,
        is_active: true,
        description: None,
        notes: None,
    };
    let payload = NewOpponent::try_from(&form).unwrap();
    assert!(directory::save_opponent(&payload, Language::Ar).is_ok());

    let form = LawyerForm {
        name_ar: None,
        name_en: Some("Omar Farouk".to_string()),
        title_id: Some(120),
        email: Some("omar@firm.example".to_string()),
        attendance_track: true,
    };
    let payload = NewLawyer::try_from(&form).unwrap();
    assert!(directory::save_lawyer(&payload, Language::En).is_ok());

    let form = CourtForm {
        name_ar: Some("محكمة الجيزة".to_string()),
        name_en: Some("Giza Court".to_string()),
        is_active: true,
    };
    let payload = NewCourt::try_from(&form).unwrap();
    assert!(directory::save_court(&payload, Language::En).is_ok());
}

#[test]
fn hearing_form_saves() {
    let form = HearingForm {
        case_id: 29,
        lawyer_id: Some(3),
        date: date(2024, 10, 7),
        procedure: Some("Pleading".to_string()),
        notes: None,
        notify_client: true,
    };
    let payload = NewHearing::try_from(&form).unwrap();
    assert!(hearing::save_hearing(&payload).is_ok());
}

#[test]
fn document_and_movement_forms_save() {
    let form = DocumentForm {
        id: None,
        client_id: 133,
        case_id: Some(573),
        name: "Expert Report".to_string(),
        doc_type: Some("Report".to_string()),
        storage: StorageKind::Physical,
        deposit_date: date(2024, 5, 20),
        description: None,
    };
    let payload = DocumentPayload::try_from(&form).unwrap();
    assert!(document::save_document(&payload).is_ok());

    let form = MovementForm {
        document_id: 3,
        date: date(2024, 5, 21),
        from_location: "Registry".to_string(),
        to_location: "Archive Room".to_string(),
        status: MovementStatus::Archived,
        lawyer_id: 6,
        notes: None,
    };
    let payload = NewMovement::try_from(&form).unwrap();
    assert!(document::save_movement(&payload).is_ok());
}

#[test]
fn team_and_user_forms_save() {
    let form = TeamForm {
        id: None,
        name_ar: None,
        name_en: Some("Appeals Team".to_string()),
        description_ar: None,
        description_en: Some("Handles appellate work".to_string()),
        lawyer_ids: vec![3, 6],
    };
    let payload = TeamPayload::try_from(&form).unwrap();
    assert!(admin::save_team(&payload, Language::En).is_ok());

    let form = UserForm {
        id: Some(2),
        name_ar: None,
        name_en: Some("Ehab Hamdy".to_string()),
        email: "ehab@firm.example".to_string(),
        role_id: 2,
        is_active: true,
    };
    let payload = UserPayload::try_from(&form).unwrap();
    assert!(admin::save_user(&payload, Language::En).is_ok());
}

#[test]
fn invalid_forms_surface_validation_errors() {
    let form = ClientForm {
        name_ar: None,
        name_en: Some("Nile Shipping Co.".to_string()),
        print_name: "Nile Shipping".to_string(),
        code: None,
        contact_email: Some("not-an-email".to_string()),
        contact_phone: None,
        engaged_from: None,
    };
    let err = NewClient::try_from(&form).map(|_| ()).unwrap_err();
    assert!(matches!(ServiceError::from(err), ServiceError::Validation(_)));

    let form = TaskForm {
        case_id: 0,
        title: "Review".to_string(),
        description: None,
        due_date: date(2024, 9, 10),
        status: TaskStatus::Todo,
        priority: TaskPriority::Medium,
        parent_id: None,
    };
    let err = NewTask::try_from(&form).map(|_| ()).unwrap_err();
    assert!(matches!(ServiceError::from(err), ServiceError::Validation(_)));
}
