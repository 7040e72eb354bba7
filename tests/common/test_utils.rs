use eldercare_probe::{Result, config::Config};
use tempfile::TempDir;
use tokio::fs;

/// Default configuration pointed at `base_url` + `/run/predict`
pub fn create_test_config(base_url: &str) -> Config {
    Config::default().with_url_override(Some(format!("{base_url}/run/predict")))
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Create a probe config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("probe.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Decode captured probe output
pub fn output_string(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("probe output is not UTF-8")
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
endpoint:
  url: "http://localhost:7860/run/predict"

logs:
  level: "debug"

probe:
  messages:
    - "Good morning"
    - "Did I take my pills?"
  fail_on_http_error: true
"#;
