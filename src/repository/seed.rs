//! Representative fixture dataset standing in for the production database.
//!
//! Contents mirror the firm's anonymized sample tables: a handful of
//! high-profile matters with their parties, hearings, documents, custody
//! movements, tasks, and the access-control tables.
use chrono::NaiveDate;

use crate::domain::access::{Permission, PermissionGroup, PermissionInfo, Role, User};
use crate::domain::case::CaseRecord;
use crate::domain::client::{Client, Contact, PowerOfAttorney};
use crate::domain::court::Court;
use crate::domain::document::{
    ClientDocument, DocumentMovement, MovementStatus, StorageKind,
};
use crate::domain::hearing::Hearing;
use crate::domain::lawyer::Lawyer;
use crate::domain::opponent::Opponent;
use crate::domain::options::{OptionCatalog, OptionSet, OptionValue};
use crate::domain::task::{Task, TaskPriority, TaskStatus};
use crate::domain::team::Team;
use crate::domain::types::{
    Bilingual, CaseId, ClientId, CourtId, DocumentId, HearingId, LawyerId, MovementId, OpponentId,
    OptionSetId, OptionValueId, RoleId, TaskId, TeamId, UserId,
};
use crate::repository::fixture::FixtureSet;

// Seed ids are fixed literals; a panic here is a defect in the seed itself.
fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

macro_rules! seed_id {
    ($fn_name:ident, $ty:ident) => {
        fn $fn_name(raw: i32) -> $ty {
            $ty::new(raw).expect("positive seed id")
        }
    };
}

seed_id!(case_id, CaseId);
seed_id!(client_id, ClientId);
seed_id!(opponent_id, OpponentId);
seed_id!(lawyer_id, LawyerId);
seed_id!(court_id, CourtId);
seed_id!(hearing_id, HearingId);
seed_id!(document_id, DocumentId);
seed_id!(movement_id, MovementId);
seed_id!(task_id, TaskId);
seed_id!(role_id, RoleId);
seed_id!(team_id, TeamId);
seed_id!(user_id, UserId);
seed_id!(set_id, OptionSetId);
seed_id!(value_id, OptionValueId);

/// A case row with every optional column empty; the seed fills in what the
/// sample data actually carried.
fn case_row(id: i32, client: i32, partner: i32, number: &str, name_en: &str) -> CaseRecord {
    CaseRecord {
        id: case_id(id),
        client_id: client_id(client),
        partner_id: Some(lawyer_id(partner)),
        lawyer_a: None,
        lawyer_b: None,
        opponent_id: None,
        court_id: None,
        team_id: None,
        name: Bilingual::both(number, name_en),
        description: None,
        status_id: None,
        category_id: None,
        importance_id: None,
        degree_id: None,
        destination_id: None,
        circuit_name_id: None,
        circuit_serial_id: None,
        circuit_shift_id: None,
        circuit_secretary_id: None,
        court_floor: None,
        court_hall: None,
        start_date: None,
        end_date: None,
        asked_amount: None,
        judged_amount: None,
        allocated_budget: None,
        financial_provision: None,
        fee_letter: None,
        contract_id: None,
        engagement_letter_no: None,
        legal_opinion: None,
        current_status: None,
        evaluation: None,
        client_in_case_name: None,
        client_capacity_id: None,
        client_capacity_note: None,
        opponent_in_case_name: None,
        opponent_capacity_id: None,
        opponent_capacity_note: None,
        client_type_id: None,
        shelf: None,
        branch: None,
        notes_1: None,
        notes_2: None,
        selected: false,
    }
}

fn option_value(id: i32, set: i32, code: &str, en: &str, ar: &str) -> OptionValue {
    OptionValue {
        id: value_id(id),
        set_id: set_id(set),
        code: code.to_string(),
        label: Bilingual::both(ar, en),
    }
}

fn option_set(id: i32, key: &str, en: &str, ar: &str) -> OptionSet {
    OptionSet {
        id: set_id(id),
        key: key.to_string(),
        name: Bilingual::both(ar, en),
        description: Bilingual::default(),
    }
}

fn lawyer(id: i32, ar: &str, en: &str, title: i32, email: &str) -> Lawyer {
    Lawyer {
        id: lawyer_id(id),
        name: Bilingual::both(ar, en),
        title_id: Some(value_id(title)),
        email: Some(email.to_string()),
        attendance_track: true,
    }
}

fn options() -> OptionCatalog {
    let sets = vec![
        option_set(12, "lawyer.title", "Lawyer Titles", "ألقاب المحامين"),
        option_set(15, "case.status", "Case Status", "حالة القضية"),
        option_set(16, "case.importance", "Case Importance", "أهمية القضية"),
        option_set(17, "case.category", "Case Categories", "فئات القضايا"),
        option_set(18, "capacity.type", "Capacity Types", "أنواع الصفات"),
        option_set(19, "circuit.name", "Circuit Names", "أسماء الدوائر"),
        option_set(20, "circuit.serial", "Circuit Serials", "مسلسلات الدوائر"),
        option_set(21, "circuit.shift", "Circuit Shifts", "فترات الدوائر"),
        option_set(22, "court.circuit_secretary", "Circuit Secretaries", "أمناء سر الدوائر"),
        option_set(23, "document_type", "Document Type", "نوع المستند"),
    ];
    let values = vec![
        option_value(1, 15, "active", "Active", "سارية"),
        option_value(2, 15, "closed", "Closed", "منتهية"),
        option_value(3, 15, "pending", "Pending", "معلقة"),
        option_value(4, 16, "critical", "Critical", "حرجة"),
        option_value(5, 16, "urgent", "Urgent", "عاجل"),
        option_value(6, 16, "normal", "Normal", "عادية"),
        option_value(7, 16, "important", "Important", "هامة"),
        option_value(8, 17, "litigation", "Litigation", "تقاضي"),
        option_value(9, 17, "arbitration", "Arbitration", "تحكيم"),
        option_value(10, 18, "plaintiff", "Plaintiff", "مدعي"),
        option_value(11, 18, "defendant_civil", "Defendant (Civil)", "مدعى عليه"),
        option_value(12, 18, "appellant", "Appellant", "مستأنف"),
        option_value(13, 18, "respondent", "Respondent", "مستأنف ضده"),
        option_value(116, 12, "founding_partner", "Founding Partner", "شريك مؤسس"),
        option_value(117, 12, "managing_partner", "Managing Partner", "شريك مدير"),
        option_value(118, 12, "partner", "Partner", "شريك"),
        option_value(119, 12, "senior_associate", "Senior Associate", "محامي أول"),
        option_value(120, 12, "associate", "Associate", "محامي"),
        option_value(200, 19, "c_name_1", "First Circuit", "الدائرة الأولى"),
        option_value(201, 20, "c_serial_1", "Serial A", "مسلسل أ"),
        option_value(202, 21, "c_shift_morning", "Morning", "صباحي"),
        option_value(203, 22, "c_sec_ahmed", "Ahmed Ali", "أحمد علي"),
        option_value(300, 23, "pleading", "Pleading", "مرافعة"),
        option_value(301, 23, "evidence", "Evidence", "دليل"),
        option_value(302, 23, "contract", "Contract", "عقد"),
    ];
    OptionCatalog::new(sets, values)
}

fn cases() -> Vec<CaseRecord> {
    let mut toyota = case_row(1116, 3, 5, "983 / 11ق", "Toyota Egypt vs. Competitor Authority");
    toyota.description =
        Some("A case regarding competitive practices in the automotive market.".into());
    toyota.status_id = Some(value_id(1));
    toyota.category_id = Some(value_id(8));
    toyota.importance_id = Some(value_id(7));
    toyota.court_id = Some(court_id(1));
    toyota.team_id = Some(team_id(1));
    toyota.opponent_id = Some(opponent_id(2));
    toyota.lawyer_a = Some("Ehab Hamdy".into());
    toyota.client_capacity_id = Some(value_id(10));
    toyota.opponent_capacity_id = Some(value_id(11));
    toyota.start_date = Some(date(2023, 1, 15));
    toyota.asked_amount = Some(5_000_000);
    toyota.fee_letter = Some(150_000);
    toyota.legal_opinion =
        Some("Strong position for the client, potential for a favorable settlement.".into());
    toyota.circuit_name_id = Some(value_id(200));
    toyota.circuit_serial_id = Some(value_id(201));
    toyota.circuit_shift_id = Some(value_id(202));
    toyota.circuit_secretary_id = Some(value_id(203));
    toyota.court_floor = Some(3);
    toyota.court_hall = Some(5);
    toyota.selected = true;

    let mut masters = case_row(573, 133, 6, "55 / 2024", "Masters vs. EGX Committee");
    masters.description =
        Some("Dispute over a decision made by the stock exchange committee.".into());
    masters.status_id = Some(value_id(2));
    masters.category_id = Some(value_id(8));
    masters.importance_id = Some(value_id(4));
    masters.court_id = Some(court_id(1));
    masters.team_id = Some(team_id(2));
    masters.opponent_id = Some(opponent_id(4));
    masters.client_capacity_id = Some(value_id(10));
    masters.opponent_capacity_id = Some(value_id(11));
    masters.start_date = Some(date(2024, 2, 1));
    masters.end_date = Some(date(2024, 7, 1));
    masters.asked_amount = Some(1_200_000);
    masters.judged_amount = Some(1_200_000);
    masters.legal_opinion =
        Some("The committee decision is appealable based on procedural errors.".into());
    masters.selected = true;

    let mut modern_tv = case_row(29, 2, 4, "123 / 2023", "Modern TV vs. Memes Egypt");
    modern_tv.description = Some("Intellectual property dispute.".into());
    modern_tv.status_id = Some(value_id(1));
    modern_tv.category_id = Some(value_id(9));
    modern_tv.importance_id = Some(value_id(5));
    modern_tv.court_id = Some(court_id(2));
    modern_tv.team_id = Some(team_id(3));
    modern_tv.opponent_id = Some(opponent_id(3));
    modern_tv.lawyer_a = Some("Jane Smith".into());
    modern_tv.client_capacity_id = Some(value_id(10));
    modern_tv.opponent_capacity_id = Some(value_id(11));
    modern_tv.start_date = Some(date(2023, 5, 10));
    modern_tv.asked_amount = Some(750_000);
    modern_tv.fee_letter = Some(75_000);
    modern_tv.legal_opinion =
        Some("Clear case of copyright infringement. High chance of success.".into());
    modern_tv.selected = true;

    vec![toyota, masters, modern_tv]
}

fn client(id: i32, ar: &str, en: &str, print: &str, code: &str, start: NaiveDate) -> Client {
    Client {
        id: client_id(id),
        code: Some(code.to_string()),
        name: Bilingual::both(ar, en),
        print_name: print.to_string(),
        status: Some("Active".to_string()),
        status_id: None,
        cash_or_probono_id: None,
        engaged_from: Some(start),
        engaged_until: None,
        contact_lawyer_id: None,
        power_of_attorney_location_id: None,
        documents_location_id: None,
    }
}

fn document(
    id: i32,
    client: i32,
    case: Option<i32>,
    name: &str,
    doc_type: &str,
    deposit: NaiveDate,
    storage: StorageKind,
    movement_card: bool,
    lawyer: &str,
    case_number: Option<&str>,
) -> ClientDocument {
    ClientDocument {
        id: document_id(id),
        client_id: client_id(client),
        case_id: case.map(case_id),
        name: Some(name.to_string()),
        doc_type: Some(doc_type.to_string()),
        storage,
        mfiles_uploaded: storage != StorageKind::Physical,
        responsible_lawyer: Some(lawyer.to_string()),
        movement_card,
        description: None,
        deposit_date: deposit,
        document_date: None,
        case_number: case_number.map(str::to_string),
        pages_count: None,
        notes: None,
    }
}

fn movement(
    id: i32,
    document: i32,
    on: NaiveDate,
    from: &str,
    to: &str,
    status: MovementStatus,
    lawyer: i32,
    notes: &str,
) -> DocumentMovement {
    DocumentMovement {
        id: movement_id(id),
        document_id: document_id(document),
        date: on,
        from_location: from.to_string(),
        to_location: to.to_string(),
        status,
        notes: Some(notes.to_string()),
        lawyer_id: lawyer_id(lawyer),
    }
}

fn task(
    id: i32,
    case: i32,
    title: &str,
    due: NaiveDate,
    status: TaskStatus,
    priority: TaskPriority,
    parent: Option<i32>,
) -> Task {
    Task {
        id: task_id(id),
        case_id: case_id(case),
        title: title.to_string(),
        description: None,
        due_date: due,
        status,
        priority,
        parent_id: parent.map(task_id),
    }
}

fn role(id: i32, en: &str, ar: &str, desc_en: &str, permissions: Vec<Permission>) -> Role {
    Role {
        id: role_id(id),
        name: Bilingual::both(ar, en),
        description: Bilingual::new(None, Some(desc_en.to_string())),
        permissions,
    }
}

fn permission_groups() -> Vec<PermissionGroup> {
    let info = |key: Permission, en: &str| PermissionInfo {
        key,
        description: Bilingual::new(None, Some(en.to_string())),
    };
    vec![
        PermissionGroup {
            group_key: "case_management".into(),
            permissions: vec![
                info(Permission::CaseCreate, "Create new cases"),
                info(Permission::CaseView, "View case details"),
                info(Permission::CaseEdit, "Edit case information"),
                info(Permission::CaseDelete, "Delete cases"),
            ],
        },
        PermissionGroup {
            group_key: "client_management".into(),
            permissions: vec![
                info(Permission::ClientCreate, "Create new clients"),
                info(Permission::ClientView, "View client details"),
                info(Permission::ClientEdit, "Edit client information"),
                info(Permission::ClientDelete, "Delete clients"),
            ],
        },
        PermissionGroup {
            group_key: "document_management".into(),
            permissions: vec![
                info(Permission::DocumentCreate, "Create/Upload documents"),
                info(Permission::DocumentView, "View documents"),
                info(Permission::DocumentEdit, "Edit document details"),
                info(Permission::DocumentDelete, "Delete documents"),
            ],
        },
        PermissionGroup {
            group_key: "system_administration".into(),
            permissions: vec![
                info(Permission::UserManage, "Manage users and their assignments"),
                info(Permission::RolesManage, "Manage roles and permissions"),
            ],
        },
    ]
}

/// Builds the full fixture set loaded by the console at start-up.
pub fn seed() -> FixtureSet {
    use Permission::*;

    FixtureSet {
        cases: cases(),
        clients: vec![
            client(1, "الشركة المتحدة", "United Company", "United Co.", "UC001", date(2020, 1, 1)),
            client(2, "شركة مودرن تي في", "Modern TV Company", "Modern TV", "MTV01", date(2019, 5, 20)),
            client(3, "تويوتا مصر", "Toyota Egypt", "Toyota Egypt", "TOY-EG", date(2018, 3, 12)),
            client(133, "ماسترز", "Masters", "Masters", "MAS01", date(2021, 11, 1)),
        ],
        contacts: vec![
            Contact {
                id: 1,
                client_id: client_id(3),
                full_name: Some("Omar Farouk".into()),
                job_title: Some("Head of Legal".into()),
                address: None,
                city: Some("Cairo".into()),
                country: Some("Egypt".into()),
                business_phone: Some("+20 2 2461 9000".into()),
                mobile_phone: Some("+20 100 555 0173".into()),
                email: Some("omar.farouk@toyota-eg.example".into()),
            },
            Contact {
                id: 2,
                client_id: client_id(133),
                full_name: Some("Dina Mansour".into()),
                job_title: Some("CFO".into()),
                address: None,
                city: Some("Giza".into()),
                country: Some("Egypt".into()),
                business_phone: None,
                mobile_phone: Some("+20 122 555 0088".into()),
                email: Some("dina.m@masters.example".into()),
            },
        ],
        power_of_attorneys: vec![PowerOfAttorney {
            id: 1,
            client_id: client_id(3),
            principal_name: "Toyota Egypt S.A.E.".into(),
            principal_capacity: Some("Company".into()),
            year: Some(2018),
            capacity: Some("General litigation".into()),
            authorized_lawyers: Some("Mohamed Abdelsalam, Ehab Hamdy".into()),
            issue_date: Some(date(2018, 4, 2)),
            inventory: true,
            issuing_authority: Some("Cairo Notary Office".into()),
            poa_number: Some(4471),
            serial: Some("A-2018-4471".into()),
            notes: None,
        }],
        opponents: vec![
            Opponent {
                id: opponent_id(1),
                name: Bilingual::both("الخصم الأول", "First Opponent"),
                normalized_name: Some("first opponent".into()),
                is_active: true,
                description: None,
                notes: None,
            },
            Opponent {
                id: opponent_id(2),
                name: Bilingual::both("هيئة المنافسة", "Competitor Authority"),
                normalized_name: Some("competitor authority".into()),
                is_active: true,
                description: None,
                notes: None,
            },
            Opponent {
                id: opponent_id(3),
                name: Bilingual::both("ميمز مصر", "Memes Egypt"),
                normalized_name: Some("memes egypt".into()),
                is_active: false,
                description: None,
                notes: None,
            },
            Opponent {
                id: opponent_id(4),
                name: Bilingual::both("لجنة البورصة المصرية", "EGX Committee"),
                normalized_name: Some("egx committee".into()),
                is_active: true,
                description: None,
                notes: None,
            },
            Opponent {
                id: opponent_id(5),
                name: Bilingual::both("شركة شحن", "Shipping Co"),
                normalized_name: Some("shipping co".into()),
                is_active: true,
                description: None,
                notes: None,
            },
            Opponent {
                id: opponent_id(6),
                name: Bilingual::both("الدولة", "The State"),
                normalized_name: Some("the state".into()),
                is_active: true,
                description: None,
                notes: None,
            },
        ],
        lawyers: vec![
            lawyer(1, "جون دو", "John Doe", 118, "john.doe@example.com"),
            lawyer(2, "جين سميث", "Jane Smith", 119, "jane.smith@example.com"),
            lawyer(3, "إيهاب حمدي", "Ehab Hamdy", 120, "ehab.hamdy@example.com"),
            lawyer(4, "منى الشاذلي", "Mona El-Shazly", 117, "mona.elshazly@example.com"),
            lawyer(5, "محمد عبد السلام", "Mohamed Abdelsalam", 116, "mohamed.a@example.com"),
            lawyer(6, "فاطمة الزهراء", "Fatma Al-Zahraa", 118, "fatma.z@example.com"),
        ],
        courts: vec![
            Court {
                id: court_id(1),
                name: Bilingual::both("محكمة القاهرة الاقتصادية", "Cairo Economic Court"),
                is_active: true,
            },
            Court {
                id: court_id(2),
                name: Bilingual::both("محكمة النقض", "Court of Cassation"),
                is_active: true,
            },
            Court {
                id: court_id(3),
                name: Bilingual::both("محكمة استئناف القاهرة", "Cairo Court of Appeals"),
                is_active: false,
            },
        ],
        teams: vec![
            Team {
                id: team_id(1),
                name: Bilingual::both("فريق التقاضي ألفا", "Litigation Team Alpha"),
                description: Bilingual::both(
                    "متخصص في قضايا الشركات الكبرى.",
                    "Specializes in high-stakes corporate litigation.",
                ),
                lawyer_ids: vec![lawyer_id(1), lawyer_id(3), lawyer_id(5)],
            },
            Team {
                id: team_id(2),
                name: Bilingual::both("خبراء التحكيم", "Arbitration Experts"),
                description: Bilingual::both(
                    "يتولى جميع قضايا التحكيم الدولية والمحلية.",
                    "Handles all international and domestic arbitration cases.",
                ),
                lawyer_ids: vec![lawyer_id(2), lawyer_id(4), lawyer_id(6)],
            },
            Team {
                id: team_id(3),
                name: Bilingual::both("الملكية الفكرية والإعلام", "IP & Media Law"),
                description: Bilingual::both(
                    "يركز على نزاعات الملكية الفكرية وحقوق النشر والإعلام.",
                    "Focused on intellectual property, copyright, and media disputes.",
                ),
                lawyer_ids: vec![lawyer_id(2), lawyer_id(4)],
            },
        ],
        hearings: vec![
            Hearing {
                id: hearing_id(1),
                case_id: case_id(1116),
                lawyer_id: Some(lawyer_id(3)),
                date: Some(date(2024, 7, 20)),
                procedure: Some("Review".into()),
                court: Some("Cairo Economic Court".into()),
                circuit: Some("Third".into()),
                decision: Some("Postponed for document submission.".into()),
                short_decision: None,
                next_hearing_date: Some(date(2024, 8, 20)),
                report: false,
                notify_client: false,
                attendee: None,
                evaluation: None,
                notes: Some("Client requested postponement to gather more evidence.".into()),
            },
            Hearing {
                id: hearing_id(2),
                case_id: case_id(1116),
                lawyer_id: Some(lawyer_id(3)),
                date: Some(date(2024, 6, 15)),
                procedure: Some("First Session".into()),
                court: Some("Cairo Economic Court".into()),
                circuit: Some("Third".into()),
                decision: Some("Initial hearing.".into()),
                short_decision: None,
                next_hearing_date: Some(date(2024, 7, 20)),
                report: false,
                notify_client: false,
                attendee: None,
                evaluation: None,
                notes: Some("Scheduled first session.".into()),
            },
            Hearing {
                id: hearing_id(3),
                case_id: case_id(573),
                lawyer_id: Some(lawyer_id(6)),
                date: Some(date(2024, 7, 1)),
                procedure: Some("Verdict".into()),
                court: Some("Cairo Economic Court".into()),
                circuit: Some("First".into()),
                decision: Some("Judgement rendered in favor of the client.".into()),
                short_decision: None,
                next_hearing_date: None,
                report: true,
                notify_client: true,
                attendee: None,
                evaluation: None,
                notes: Some("Final verdict. Case closed.".into()),
            },
            Hearing {
                id: hearing_id(4),
                case_id: case_id(29),
                lawyer_id: Some(lawyer_id(2)),
                date: Some(date(2024, 9, 10)),
                procedure: Some("Expert Review".into()),
                court: Some("Court of Cassation".into()),
                circuit: Some("IP Circuit".into()),
                decision: Some("Pending expert report submission.".into()),
                short_decision: None,
                next_hearing_date: Some(date(2024, 10, 15)),
                report: false,
                notify_client: true,
                attendee: None,
                evaluation: None,
                notes: Some("Awaiting technical expert report on copyright infringement.".into()),
            },
            Hearing {
                id: hearing_id(5),
                case_id: case_id(29),
                lawyer_id: Some(lawyer_id(2)),
                date: Some(date(2024, 8, 5)),
                procedure: Some("Evidence Submission".into()),
                court: Some("Court of Cassation".into()),
                circuit: Some("IP Circuit".into()),
                decision: Some("Evidence presented by plaintiff.".into()),
                short_decision: None,
                next_hearing_date: Some(date(2024, 9, 10)),
                report: false,
                notify_client: false,
                attendee: None,
                evaluation: None,
                notes: Some("Presented documents related to copyright ownership.".into()),
            },
        ],
        documents: vec![
            document(1, 3, Some(1116), "Initial Complaint Filing", "Pleading",
                date(2023, 1, 15), StorageKind::Digital, false, "Mohamed Abdelsalam", Some("983 / 11ق")),
            document(2, 3, Some(1116), "Competitor Analysis Report", "Evidence",
                date(2023, 2, 20), StorageKind::Digital, false, "Ehab Hamdy", Some("983 / 11ق")),
            document(3, 133, Some(573), "EGX Committee Decision Transcript", "Official Record",
                date(2024, 2, 5), StorageKind::Physical, true, "Fatma Al-Zahraa", Some("55 / 2024")),
            document(4, 2, Some(29), "Copyright Registration Certificate", "Evidence",
                date(2023, 5, 12), StorageKind::Both, false, "Mona El-Shazly", Some("123 / 2023")),
            document(5, 1, None, "Master Service Agreement", "Contract",
                date(2020, 1, 10), StorageKind::Digital, false, "John Doe", None),
            document(6, 2, Some(29), "Cease and Desist Letter", "Correspondence",
                date(2023, 4, 28), StorageKind::Digital, false, "Jane Smith", Some("123 / 2023")),
        ],
        movements: vec![
            movement(1, 3, date(2024, 3, 10), "Archive Room", "Fatma Al-Zahraa",
                MovementStatus::CheckedOut, 6, "Needed for case review."),
            movement(2, 3, date(2024, 3, 15), "Fatma Al-Zahraa", "Court File Prep",
                MovementStatus::Transferred, 6, "Sent for copying."),
            movement(3, 3, date(2024, 3, 20), "Court File Prep", "Fatma Al-Zahraa",
                MovementStatus::CheckedIn, 6, "Returned after copying."),
            movement(4, 3, date(2024, 4, 1), "Fatma Al-Zahraa", "Archive Room",
                MovementStatus::Archived, 6, "Case review complete."),
        ],
        tasks: vec![
            task(1, 1116, "Submit discovery documents for Toyota", date(2024, 8, 15),
                TaskStatus::InProgress, TaskPriority::High, None),
            task(2, 1116, "Prepare for client meeting with Toyota", date(2024, 8, 10),
                TaskStatus::Todo, TaskPriority::Medium, None),
            task(3, 573, "Review EGX committee decision", date(2024, 7, 30),
                TaskStatus::Completed, TaskPriority::High, None),
            task(4, 29, "Draft appeal brief for Modern TV", date(2024, 9, 1),
                TaskStatus::Todo, TaskPriority::High, None),
            task(5, 573, "Follow up on arbitration nullity case", date(2024, 8, 5),
                TaskStatus::InProgress, TaskPriority::Medium, None),
            task(6, 29, "Archive closed criminal records case", date(2024, 7, 25),
                TaskStatus::Completed, TaskPriority::Low, None),
            task(7, 1116, "Prepare for heirs of Ezz El-Din hearing", date(2024, 9, 20),
                TaskStatus::Todo, TaskPriority::High, None),
            task(8, 29, "Research precedents", date(2024, 8, 15),
                TaskStatus::Todo, TaskPriority::High, Some(4)),
            task(9, 29, "Outline arguments", date(2024, 8, 20),
                TaskStatus::Todo, TaskPriority::High, Some(4)),
            task(10, 1116, "Get partner sign-off", date(2024, 8, 14),
                TaskStatus::InProgress, TaskPriority::Medium, Some(1)),
        ],
        roles: vec![
            role(1, "Administrator", "مدير النظام",
                "Has full access to all system features and settings.",
                vec![CaseCreate, CaseView, CaseEdit, CaseDelete, ClientCreate, ClientView,
                    ClientEdit, ClientDelete, DocumentCreate, DocumentView, DocumentEdit,
                    DocumentDelete, UserManage, RolesManage]),
            role(2, "Partner", "شريك",
                "Can manage cases, clients, and view reports.",
                vec![CaseCreate, CaseView, CaseEdit, CaseDelete, ClientCreate, ClientView,
                    ClientEdit, DocumentView, DocumentEdit]),
            role(3, "Senior Associate", "محامي أول",
                "Can work on assigned cases and manage documents.",
                vec![CaseView, CaseEdit, ClientView, DocumentCreate, DocumentView, DocumentEdit]),
            role(4, "Paralegal", "مساعد قانوني",
                "Can view case details and upload documents.",
                vec![CaseView, ClientView, DocumentCreate, DocumentView]),
        ],
        permission_groups: permission_groups(),
        users: vec![
            User {
                id: user_id(1),
                name: Bilingual::both("المدير العام", "Super Admin"),
                email: "admin@clms.example".into(),
                role_id: role_id(1),
                is_active: true,
            },
            User {
                id: user_id(2),
                name: Bilingual::both("أليس شريك", "Alice Partner"),
                email: "alice.p@clms.example".into(),
                role_id: role_id(2),
                is_active: true,
            },
            User {
                id: user_id(3),
                name: Bilingual::both("بوب محامي", "Bob Associate"),
                email: "bob.a@clms.example".into(),
                role_id: role_id(3),
                is_active: true,
            },
            User {
                id: user_id(4),
                name: Bilingual::both("تشارلي مساعد", "Charlie Paralegal"),
                email: "charlie.p@clms.example".into(),
                role_id: role_id(4),
                is_active: false,
            },
        ],
        options: options(),
    }
}
