//! Tests for configuration loading.

use variator::{DEFAULT_QUESTION, LogFormat, VariatorConfig};

#[test]
fn test_empty_file_yields_defaults() {
    let config: VariatorConfig = "".parse().expect("empty config is valid");

    assert_eq!(config, VariatorConfig::default());
    assert_eq!(config.question(), DEFAULT_QUESTION);
    assert_eq!(*config.variation_count(), 10);
    assert_eq!(*config.generation().max_tokens(), 2000);
}

#[test]
fn test_partial_file_overrides_only_given_fields() {
    let config: VariatorConfig = r#"
        question = "How tall is Mount Everest?"
        variation_count = 5
        log_format = "json"

        [generation]
        temperature = 0.2
    "#
    .parse()
    .expect("valid config");

    assert_eq!(config.question(), "How tall is Mount Everest?");
    assert_eq!(*config.variation_count(), 5);
    assert_eq!(*config.log_format(), LogFormat::Json);
    assert_eq!(*config.generation().temperature(), 0.2);
    assert_eq!(*config.generation().max_tokens(), 2000);
    assert_eq!(config.model(), VariatorConfig::default().model());
}

#[test]
fn test_invalid_toml_is_config_error() {
    let result = "variation_count = \"many\"".parse::<VariatorConfig>();

    let err = result.expect_err("string is not a count");
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = VariatorConfig::from_file("/nonexistent/variator.toml")
        .expect_err("file does not exist");

    assert_eq!(
        err.path.as_deref(),
        Some(std::path::Path::new("/nonexistent/variator.toml"))
    );
    assert!(err.to_string().contains("/nonexistent/variator.toml"));
}

#[test]
fn test_unparsable_file_error_names_the_file() {
    let path = std::env::temp_dir().join(format!("variator-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "variation_count = \"many\"").expect("write temp config");

    let err = VariatorConfig::from_file(&path).expect_err("string is not a count");
    std::fs::remove_file(&path).ok();

    assert_eq!(err.path.as_deref(), Some(path.as_path()));
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_setters_return_adjusted_copy() {
    let base = VariatorConfig::default();
    let tuned = base.clone().with_question("Name Ukraine's capital city.").with_variation_count(3usize);

    assert_eq!(base.question(), DEFAULT_QUESTION);
    assert_eq!(tuned.question(), "Name Ukraine's capital city.");
    assert_eq!(*tuned.variation_count(), 3);
}

#[test]
fn test_env_overrides_replace_file_model_and_base_url() {
    let config: VariatorConfig = r#"
        model = "file-model"
        base_url = "http://file.example/v1"
    "#
    .parse()
    .expect("valid config");

    let config = config.with_env_overrides(
        Some("env-model".to_string()),
        Some("http://env.example/v1".to_string()),
    );

    assert_eq!(config.model(), "env-model");
    assert_eq!(config.base_url(), "http://env.example/v1");
}

#[test]
fn test_absent_or_blank_env_overrides_keep_file_values() {
    let config: VariatorConfig = r#"
        model = "file-model"
        base_url = "http://file.example/v1"
    "#
    .parse()
    .expect("valid config");

    let unset = config.clone().with_env_overrides(None, None);
    let blank = config
        .clone()
        .with_env_overrides(Some("  ".to_string()), Some(String::new()));

    assert_eq!(unset, config);
    assert_eq!(blank, config);
}
