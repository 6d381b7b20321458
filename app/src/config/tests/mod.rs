use std::path::PathBuf;

use apiconfig::{ApiBaseUrl, InMemoryEnvironment, API_BASE_URL_VARIABLE};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::{
    config::{load_secrets_files, secrets_paths, SecretSources, SecretsFile, Settings},
    files::InMemoryFileReader,
};


fn secrets(toml: &str) -> SecretsFile {
    SecretsFile::from_toml("secrets.toml", toml).unwrap()
}

fn base_url(env: &InMemoryEnvironment) -> ApiBaseUrl {
    ApiBaseUrl::resolve(env)
}

#[test]
pub fn settings_should_use_defaults_without_any_source() {
    // Arrange
    let env = InMemoryEnvironment::empty();
    let sources = SecretSources::new(vec![], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!("", settings.api_base_url().as_str());
    assert_eq!(None, settings.openai_api_key());
    assert_eq!(None, settings.google_client_id());
    assert_eq!(None, settings.google_client_secret());
    assert_eq!(
        "http://localhost:8501/api/google/callback",
        settings.google_redirect_uri()
    );
    assert_eq!("development", settings.node_env());
    assert!(!settings.is_production());
}

#[test]
pub fn settings_should_take_api_base_url_from_environment_only() {
    // Arrange
    let env = InMemoryEnvironment::empty().with(API_BASE_URL_VARIABLE, "http://localhost:8000");
    let file = secrets(r#"NEXT_PUBLIC_API_URL = "http://from-secrets.example.com""#);
    let sources = SecretSources::new(vec![file], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!("http://localhost:8000", settings.api_base_url().as_str());
}

#[test]
pub fn settings_should_prefer_secrets_file_over_environment() {
    // Arrange
    let env = InMemoryEnvironment::empty()
        .with("OPENAI_API_KEY", "sk-env")
        .with("NODE_ENV", "development");
    let file = secrets(
        r#"
OPENAI_API_KEY = "sk-file"
NODE_ENV = "production"
"#,
    );
    let sources = SecretSources::new(vec![file], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!(Some("sk-file"), settings.openai_api_key());
    assert_eq!("production", settings.node_env());
    assert!(settings.is_production());
}

#[test_case("", Some("sk-lower") ; "empty upper case key falls back")]
#[test_case("sk-upper", Some("sk-upper") ; "upper case key wins")]
pub fn openai_api_key_should_fall_back_to_lower_case_alias(upper: &str, expected: Option<&str>) {
    // Arrange
    let env = InMemoryEnvironment::empty()
        .with("OPENAI_API_KEY", upper)
        .with("openai_api_key", "sk-lower");
    let sources = SecretSources::new(vec![], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!(expected, settings.openai_api_key());
}

#[test]
pub fn empty_aliases_should_count_as_missing() {
    // Arrange
    let env = InMemoryEnvironment::empty()
        .with("GOOGLE_CLIENT_ID", "")
        .with("google_client_id", "");
    let sources = SecretSources::new(vec![], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!(None, settings.google_client_id());
}

#[test]
pub fn google_credentials_should_be_read_from_lower_case_secrets() {
    // Arrange
    let env = InMemoryEnvironment::empty();
    let file = secrets(
        r#"
google_client_id = "client-id"
google_client_secret = "client-secret"
GOOGLE_REDIRECT_URI = "https://app.example.com/api/google/callback"
"#,
    );
    let sources = SecretSources::new(vec![file], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!(Some("client-id"), settings.google_client_id());
    assert_eq!(Some("client-secret"), settings.google_client_secret());
    assert_eq!(
        "https://app.example.com/api/google/callback",
        settings.google_redirect_uri()
    );
}

#[test]
pub fn empty_environment_value_should_not_be_replaced_by_default() {
    // Arrange
    let env = InMemoryEnvironment::empty().with("NODE_ENV", "");
    let sources = SecretSources::new(vec![], &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!("", settings.node_env());
}

#[test_case(Some("sk-test"), false ; "configured")]
#[test_case(None, true ; "missing")]
pub fn warn_on_missing_api_key_should_report_missing_key(key: Option<&str>, expected: bool) {
    // Arrange
    let env = match key {
        Some(k) => InMemoryEnvironment::empty().with("OPENAI_API_KEY", k),
        None => InMemoryEnvironment::empty(),
    };
    let sources = SecretSources::new(vec![], &env);
    let settings = Settings::resolve(base_url(&env), &sources);
    // Act
    let warned = settings.warn_on_missing_api_key();
    // Assert
    assert_eq!(expected, warned);
}

#[test]
pub fn debug_should_redact_secrets() {
    // Arrange
    let env = InMemoryEnvironment::empty()
        .with("OPENAI_API_KEY", "sk-very-secret")
        .with("GOOGLE_CLIENT_SECRET", "also-secret");
    let sources = SecretSources::new(vec![], &env);
    let settings = Settings::resolve(base_url(&env), &sources);
    // Act
    let printed = format!("{settings:?}");
    // Assert
    assert!(!printed.contains("sk-very-secret"), "{printed}");
    assert!(!printed.contains("also-secret"), "{printed}");
    assert!(printed.contains("<redacted>"), "{printed}");
}

#[test]
pub fn secrets_paths_should_list_project_then_user_file() {
    // Arrange
    let env = InMemoryEnvironment::empty().with("HOME", "/home/dev");
    // Act
    let paths = secrets_paths(None, &env);
    // Assert
    assert_eq!(
        vec![
            PathBuf::from("secrets.toml"),
            PathBuf::from("/home/dev/.apiconfig/secrets.toml")
        ],
        paths
    );
}

#[test]
pub fn secrets_paths_should_use_given_project_file_and_skip_user_file_without_home() {
    // Arrange
    let env = InMemoryEnvironment::empty();
    // Act
    let paths = secrets_paths(Some(PathBuf::from("/etc/app/secrets.toml")), &env);
    // Assert
    assert_eq!(vec![PathBuf::from("/etc/app/secrets.toml")], paths);
}

#[test]
pub fn load_secrets_files_should_skip_missing_and_broken_files() {
    // Arrange
    let reader = InMemoryFileReader::new()
        .with_file("broken.toml", "this is = = not toml")
        .with_error("locked.toml", std::io::ErrorKind::PermissionDenied)
        .with_file("user.toml", r#"NODE_ENV = "production""#);
    let paths = vec![
        PathBuf::from("missing.toml"),
        PathBuf::from("broken.toml"),
        PathBuf::from("locked.toml"),
        PathBuf::from("user.toml"),
    ];
    // Act
    let files = load_secrets_files(&paths, &reader);
    // Assert
    let loaded: Vec<PathBuf> = files.iter().map(|f| f.path().to_path_buf()).collect();
    assert_eq!(vec![PathBuf::from("user.toml")], loaded);
}

#[test]
pub fn project_secrets_should_take_precedence_over_user_secrets() {
    // Arrange
    let reader = InMemoryFileReader::new()
        .with_file("secrets.toml", r#"NODE_ENV = "staging""#)
        .with_file(
            "/home/dev/.apiconfig/secrets.toml",
            r#"
NODE_ENV = "production"
OPENAI_API_KEY = "sk-user"
"#,
        );
    let env = InMemoryEnvironment::empty().with("HOME", "/home/dev");
    let files = load_secrets_files(&secrets_paths(None, &env), &reader);
    let sources = SecretSources::new(files, &env);
    // Act
    let settings = Settings::resolve(base_url(&env), &sources);
    // Assert
    assert_eq!("staging", settings.node_env());
    assert_eq!(Some("sk-user"), settings.openai_api_key());
}
