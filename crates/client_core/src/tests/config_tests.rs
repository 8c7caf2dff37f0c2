use super::*;

use std::{
    env,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_path(label: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    env::temp_dir().join(format!("ledger_panel_{label}_{suffix}.toml"))
}

#[test]
fn missing_file_yields_defaults() {
    let settings = load_settings(temp_settings_path("missing"));
    let defaults = PanelSettings::default();
    assert_eq!(settings.operator, defaults.operator);
    assert_eq!(settings.counterparties, defaults.counterparties);
}

#[test]
fn file_replaces_roster_and_operator() {
    let path = temp_settings_path("roster");
    fs::write(
        &path,
        r#"
[operator]
id = 9
display_name = "Miner"
avatar = "https://avatars.example/miner.png"
balance_label = "12 coins"

[[counterparties]]
id = 4
display_name = "Carol"
avatar = "https://avatars.example/carol.png"
"#,
    )
    .expect("write settings");

    let settings = load_settings(&path);
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.operator.id, CounterpartyId(9));
    assert_eq!(settings.operator.balance_label, "12 coins");
    assert_eq!(
        settings.counterparties,
        vec![Counterparty::new(4, "Carol", "https://avatars.example/carol.png")]
    );
}

#[test]
fn malformed_file_is_ignored() {
    let path = temp_settings_path("malformed");
    fs::write(&path, "counterparties = 3").expect("write settings");

    let settings = load_settings(&path);
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(settings.counterparties, PanelSettings::default().counterparties);
}

#[test]
fn normalizes_trailing_slashes() {
    assert_eq!(
        normalize_service_url(" http://127.0.0.1:5000/ ").expect("normalize"),
        "http://127.0.0.1:5000"
    );
}

#[test]
fn empty_service_url_falls_back_to_default() {
    assert_eq!(
        normalize_service_url("   ").expect("normalize"),
        DEFAULT_SERVICE_URL
    );
}

#[test]
fn rejects_non_http_service_urls() {
    for raw in ["localhost:5000", "ftp://ledger.example", "not a url"] {
        let err = normalize_service_url(raw).expect_err("must reject");
        assert!(matches!(err, LedgerError::Config(_)), "unexpected error: {err}");
    }
}

#[test]
fn app_env_override_beats_ledger_env_and_file() {
    let path = temp_settings_path("env");
    fs::write(&path, "service_url = \"http://file.example:5000\"\n").expect("write settings");

    env::set_var("LEDGER_SERVICE_URL", "http://ledger-env.example:5000");
    env::set_var("APP__SERVICE_URL", "http://app-env.example:5000");
    let both = load_settings(&path);
    env::remove_var("APP__SERVICE_URL");
    let ledger_only = load_settings(&path);
    env::remove_var("LEDGER_SERVICE_URL");
    let file_only = load_settings(&path);
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(both.service_url, "http://app-env.example:5000");
    assert_eq!(ledger_only.service_url, "http://ledger-env.example:5000");
    assert_eq!(file_only.service_url, "http://file.example:5000");
}
