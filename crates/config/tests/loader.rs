use resource_config::{Config, ConfigError, DEFAULT_CONFIG_TEMPLATE};

#[test]
fn default_template_parses() {
    let config = Config::from_toml_str(DEFAULT_CONFIG_TEMPLATE).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.context_path, "/portal");
    assert_eq!(config.resources.override_context(), None);
    assert_eq!(config.resources.default_context, "/ResourceServingWebapp");
    assert_eq!(config.contexts.len(), 1);
    assert!(config.contexts[0].enabled);
}

#[test]
fn minimal_config_uses_defaults() {
    let config = Config::from_toml_str("[server]\nhost = \"127.0.0.1\"\nport = 9090\n").unwrap();

    assert_eq!(config.server.timeout_secs, 30);
    assert_eq!(config.server.allowed_origins, vec!["*".to_string()]);
    assert_eq!(config.resources.default_context, "/ResourceServingWebapp");
    assert!(config.contexts.is_empty());
    assert!(config.init_params.is_empty());
}

#[test]
fn override_context_trims_blank_values() {
    let config = Config::from_toml_str(
        "[server]\nhost = \"h\"\nport = 1\n[resources]\ncontext_path = \"  \"\n",
    )
    .unwrap();
    assert_eq!(config.resources.override_context(), None);

    let config = Config::from_toml_str(
        "[server]\nhost = \"h\"\nport = 1\n[resources]\ncontext_path = \"OverrideResourceWebapp\"\n",
    )
    .unwrap();
    assert_eq!(config.resources.override_context(), Some("OverrideResourceWebapp"));
}

#[test]
fn rejects_zero_port() {
    let err = Config::from_toml_str("[server]\nhost = \"h\"\nport = 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
}

#[test]
fn rejects_blank_context_path() {
    let err = Config::from_toml_str(
        "[server]\nhost = \"h\"\nport = 1\n[[contexts]]\npath = \"/\"\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("contexts[0].path"));
}

#[tokio::test]
async fn missing_file_is_created_from_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = Config::from_file(&path).await.unwrap();

    assert!(path.exists());
    assert_eq!(config.server.port, 8080);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, DEFAULT_CONFIG_TEMPLATE);
}

#[tokio::test]
async fn outdated_file_is_migrated_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[server]\nhost = \"127.0.0.1\"\nport = 9000\n").unwrap();

    let config = Config::from_file(&path).await.unwrap();

    assert_eq!(config.server.port, 9000);
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[resources]") || written.contains("resources."));
    assert!(written.contains("default_context"));
}
