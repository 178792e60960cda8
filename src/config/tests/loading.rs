//! Tests for loading configuration from the environment and CLI arguments.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::ProviderConfig;

/// Loads configuration with an isolated home directory and the given
/// environment overrides.
fn load_with(env: &[(&str, Option<&str>)], cli_args: &[&str]) -> ProviderConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let mut vars: Vec<(&str, Option<&str>)> = vec![
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
        ("WHARF_GITHUB_TOKEN", None),
        ("WHARF_GITHUB_REMOTE_PROVIDER_URL", None),
        ("WHARF_GITHUB_CLONE_PROTOCOL", None),
        ("WHARF_GITHUB_TELEMETRY_STDERR", None),
    ];
    vars.extend_from_slice(env);
    let _guard = env_lock::lock_env(vars);

    let mut args: Vec<OsString> = vec![OsString::from("wharf-github")];
    args.extend(cli_args.iter().map(OsString::from));

    ProviderConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn loads_defaults_without_sources() {
    let config = load_with(&[], &[]);

    assert!(config.token.is_none());
    assert_eq!(config.remote_provider_url, "https://api.github.com");
    assert_eq!(config.clone_protocol, "https");
    assert!(!config.telemetry_stderr);
}

#[rstest]
fn loads_url_from_environment() {
    let config = load_with(
        &[("WHARF_GITHUB_REMOTE_PROVIDER_URL", Some("https://ghe.example.com"))],
        &[],
    );

    assert_eq!(config.remote_provider_url, "https://ghe.example.com");
}

#[rstest]
fn cli_flags_override_environment() {
    let config = load_with(
        &[
            ("WHARF_GITHUB_TOKEN", Some("env-token")),
            ("WHARF_GITHUB_REMOTE_PROVIDER_URL", Some("https://env.example.com")),
        ],
        &["-t", "cli-token", "--remote-provider-url", "https://cli.example.com"],
    );

    assert_eq!(config.token.as_deref(), Some("cli-token"));
    assert_eq!(config.remote_provider_url, "https://cli.example.com");
}

#[rstest]
fn telemetry_flag_enables_stderr_sink() {
    let config = load_with(&[], &["--telemetry-stderr"]);

    assert!(config.telemetry_stderr);
}
