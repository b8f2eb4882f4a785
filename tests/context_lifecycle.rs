//! Session startup and theme/app lifecycle against the file-backed store.

use oculus::context::{ContextEvent, NoOsSignal};
use oculus::storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, PREFERENCES_FILE, PRIMARY_APP_KEY, THEME_KEY};
use oculus::{initialize, Action, AppContext, AppId, Config, ThemeMode};
use std::fs;

fn config(dir: &tempfile::TempDir) -> Config {
    Config {
        data_dir: Some(dir.path().to_path_buf()),
        detect_os_theme: false,
        ..Default::default()
    }
}

#[test]
fn theme_resolution_priority() {
    let stored_dark = MemoryPreferenceStore::with_entries([(THEME_KEY, "dark")]);
    let (context, _) = AppContext::mount(stored_dark, "/", &ThemeMode::Light, ThemeMode::Light);
    assert_eq!(context.theme(), ThemeMode::Dark);

    let (context, _) = AppContext::mount(
        MemoryPreferenceStore::new(),
        "/",
        &ThemeMode::Dark,
        ThemeMode::Light,
    );
    assert_eq!(context.theme(), ThemeMode::Dark);

    let (context, _) =
        AppContext::mount(MemoryPreferenceStore::new(), "/", &NoOsSignal, ThemeMode::Light);
    assert_eq!(context.theme(), ThemeMode::Light);
}

#[test]
fn choices_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut session = initialize(&config(&dir), "/");
    assert_eq!(
        session.startup_actions,
        vec![Action::ApplyDocumentTheme { dark: false }]
    );
    session.context.handle_event(&ContextEvent::ToggleTheme);
    let actions = session.context.handle_event(&ContextEvent::SelectApp(AppId::Mimir));
    assert_eq!(
        actions,
        vec![Action::Navigate {
            path: "/mimir".to_string()
        }]
    );
    drop(session);

    let session = initialize(&config(&dir), "/helius/alerts");
    assert_eq!(session.context.theme(), ThemeMode::Dark);
    assert_eq!(session.context.app(), AppId::Helius);
    assert_eq!(session.context.primary_app(), Some(AppId::Mimir));
    assert_eq!(
        session.startup_actions,
        vec![Action::ApplyDocumentTheme { dark: true }]
    );

    let store = JsonPreferenceStore::open(dir.path().join(PREFERENCES_FILE)).unwrap();
    assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    assert_eq!(store.get(PRIMARY_APP_KEY).unwrap().as_deref(), Some("mimir"));
}

#[test]
fn corrupted_preferences_fall_back_to_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(PREFERENCES_FILE), "{ not json").unwrap();

    let config = Config {
        fallback_theme: ThemeMode::Dark,
        ..config(&dir)
    };
    let mut session = initialize(&config, "/");
    assert_eq!(session.context.theme(), ThemeMode::Dark);

    session.context.handle_event(&ContextEvent::ToggleTheme);
    let rewritten = fs::read_to_string(dir.path().join(PREFERENCES_FILE)).unwrap();
    assert!(rewritten.contains("\"light\""));
}

#[test]
fn unchosen_theme_is_not_remembered_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let dark_default = Config {
        fallback_theme: ThemeMode::Dark,
        ..config(&dir)
    };
    let session = initialize(&dark_default, "/");
    assert_eq!(session.context.theme(), ThemeMode::Dark);
    assert_eq!(session.context.store().get(THEME_KEY).unwrap(), None);
    drop(session);

    let session = initialize(&config(&dir), "/");
    assert_eq!(session.context.theme(), ThemeMode::Light);
    assert_eq!(
        session.startup_actions,
        vec![Action::ApplyDocumentTheme { dark: false }]
    );
}

#[test]
fn custom_badge_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let badge_path = dir.path().join("priority.toml");
    fs::write(
        &badge_path,
        r#"
kind = "priority"
fallback = { variant = "neutral", label = "None" }

[entries]
P1 = { variant = "error", label = "Page" }
"#,
    )
    .unwrap();

    let config = Config {
        badge_file: Some(badge_path.to_string_lossy().into_owned()),
        ..config(&dir)
    };
    let session = initialize(&config, "/");

    use oculus::badge::{BadgeKind, BadgeVariant};
    assert_eq!(
        session.badges.lookup(BadgeKind::Priority, "p1").variant,
        BadgeVariant::Error
    );
    assert_eq!(
        session.badges.lookup(BadgeKind::Status, "active").variant,
        BadgeVariant::Success
    );
}

#[test]
fn missing_badge_file_keeps_builtin_tables() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        badge_file: Some(dir.path().join("nope.toml").to_string_lossy().into_owned()),
        ..config(&dir)
    };

    let session = initialize(&config, "/");
    assert_eq!(
        session.badges.lookup(oculus::badge::BadgeKind::Priority, "high").label,
        "High"
    );
}

#[test]
fn unreadable_preferences_fall_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join(PREFERENCES_FILE)).unwrap();

    let mut session = initialize(&config(&dir), "/flow");
    assert_eq!(session.context.app(), AppId::Flow);

    session.context.handle_event(&ContextEvent::SetTheme(ThemeMode::Dark));
    assert_eq!(session.context.theme(), ThemeMode::Dark);
    assert_eq!(
        session.context.store().get(THEME_KEY).unwrap().as_deref(),
        Some("dark")
    );
}
