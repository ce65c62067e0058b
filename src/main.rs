use std::env;
use std::str::FromStr;
use std::time::Duration;

use chrono::Utc;
use config::Config;
use dotenvy::dotenv;

use qadaya::domain::types::{CaseId, Language};
use qadaya::dto::Screen;
use qadaya::i18n::Translator;
use qadaya::models::config::AppConfig;
use qadaya::navigation::{Navigator, View, ViewState};
use qadaya::repository::fixture::FixtureRepository;
use qadaya::repository::seed::seed;
use qadaya::repository::CaseReader;
use qadaya::services::assistant::Assistant;
use qadaya::services::screen::resolve;

fn load_config() -> Option<AppConfig> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let settings = Config::builder()
        .add_source(config::File::with_name("config/default"))
        .add_source(config::File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(config::Environment::with_prefix("APP"))
        .build();

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("Error loading settings: {err}");
            return None;
        }
    };

    match settings.try_deserialize::<AppConfig>() {
        Ok(app_config) => Some(app_config),
        Err(err) => {
            log::error!("Error loading app config: {err}");
            None
        }
    }
}

/// Walks a representative session: dashboard, a case, its client, a stale
/// reference recovery, and an assistant summary.
#[tokio::main]
async fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(app_config) = load_config() else {
        std::process::exit(1);
    };

    let lang = Language::from_str(&app_config.language).unwrap_or_default();
    let translator = Translator::new(&app_config.locales_dir, lang);
    let repo = FixtureRepository::new(seed(), lang);
    let mut assistant = Assistant::new(app_config.gemini_api_key.clone());
    if let Some(base_url) = &app_config.gemini_base_url {
        assistant = assistant.with_base_url(base_url);
    }
    if let Some(model) = &app_config.gemini_model {
        assistant = assistant.with_model(model);
    }
    if let Some(ms) = app_config.assistant_mock_delay_ms {
        assistant = assistant.with_mock_delay(Duration::from_millis(ms));
    }
    let today = Utc::now().date_naive();

    let mut nav = Navigator::new();
    let walk = [
        ViewState::Clients,
        ViewState::Case {
            case_id: CaseId::new(1116).expect("fixture case id"),
        },
        // A bookmark to a matter that was purged from the dataset.
        ViewState::Case {
            case_id: CaseId::new(9999).expect("fixture case id"),
        },
    ];

    log::info!(
        "{} ({:?})",
        translator.t("app.title"),
        translator.direction()
    );

    for state in walk {
        nav.navigate_to(state);
        match resolve(&mut nav, &repo, lang, today) {
            Ok(Some(screen)) => log::info!("rendered {}", describe(&screen)),
            Ok(None) => log::warn!(
                "stale reference, recovered to {:?} (depth {})",
                nav.current().kind(),
                nav.depth()
            ),
            Err(err) => {
                log::error!("failed to resolve screen: {err}");
                std::process::exit(1);
            }
        }
    }

    nav.navigate_root(View::Dashboard);

    let case = match repo.get_case_by_id(CaseId::new(573).expect("fixture case id")) {
        Ok(Some(case)) => case,
        Ok(None) => {
            log::error!("fixture case 573 missing");
            std::process::exit(1);
        }
        Err(err) => {
            log::error!("failed to load case: {err}");
            std::process::exit(1);
        }
    };
    match assistant.case_summary(&case, lang).await {
        Ok(summary) => log::info!("assistant summary: {summary}"),
        Err(err) => log::error!("assistant failed: {err}"),
    }
}

fn describe(screen: &Screen) -> String {
    match screen {
        Screen::Dashboard(page) => format!("dashboard with {} cases", page.cases.len()),
        Screen::Case(page) => format!("case {}", page.case.number),
        Screen::Clients(page) => format!("client directory ({} rows)", page.clients.len()),
        other => format!("{other:?}"),
    }
}
