//! Startup behaviour: mode selection and fatal configuration errors

use std::process::Command;

use dualis_bot::RunMode;

use crate::helpers::*;

fn run_binary(vars: &[(&str, &str)]) -> std::process::Output {
    let workdir = tempfile::tempdir().expect("temp dir");
    Command::new(env!("CARGO_BIN_EXE_dualis-bot"))
        .current_dir(workdir.path())
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .expect("binary runs")
}

#[test]
fn test_missing_webhook_url_selects_polling() {
    let settings = settings_from(&[("BOT_TOKEN", "12345:test_token")]);
    assert_eq!(settings.run_mode(), RunMode::Polling);
}

#[test]
fn test_webhook_url_selects_webhook() {
    let settings = settings_from(&[
        ("BOT_TOKEN", "12345:test_token"),
        ("WEBHOOK_URL", "https://bot.example.com/"),
    ]);
    assert_eq!(
        settings.run_mode(),
        RunMode::Webhook { url: "https://bot.example.com".to_string() }
    );
}

#[test]
fn test_settings_from_config_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "bot_token = \"1:file\"\nowner_id = 5\nport = 8443\n").unwrap();

    let vars = [("OWNER_ID".to_string(), "6".to_string())].into_iter().collect();
    let settings = dualis_bot::Settings::from_file(&path, vars).expect("settings load");

    assert_eq!(settings.bot.token, "1:file");
    // Environment overrides the file
    assert_eq!(settings.bot.owner_id, 6);
    assert_eq!(settings.server.port, 8443);
}

#[test]
fn test_missing_token_exits_with_error() {
    let output = run_binary(&[]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("BOT_TOKEN"), "stderr: {}", stderr);
}

#[test]
fn test_invalid_webhook_url_exits_with_error() {
    let output = run_binary(&[("BOT_TOKEN", "12345:test_token"), ("WEBHOOK_URL", "not a url")]);
    assert!(!output.status.success());
}
