use serde::{Deserialize, Serialize};
use tokio::fs::read_to_string;

use crate::error::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Case directory holding the Fluent data files
    pub case_dir: String,
    #[serde(default = "default_suffix")]
    pub suffix: String,
    #[serde(default = "default_udf_hook")]
    pub udf_hook: String,
    /// Sort file names a-z so the journal is stable across filesystems
    #[serde(default = "default_sorted")]
    pub sorted: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_dir: ".".to_string(),
            suffix: default_suffix(),
            udf_hook: default_udf_hook(),
            sorted: default_sorted(),
        }
    }
}

fn default_suffix() -> String {
    ".dat".to_string()
}

fn default_udf_hook() -> String {
    "CPAD_oD::libudf".to_string()
}

fn default_sorted() -> bool {
    true
}

pub async fn load_config_from_file(path: &str) -> Result<Config, Error> {
    let content = read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "caseDir": "runs" }"#).unwrap();
        assert_eq!(config.case_dir, "runs");
        assert_eq!(config.suffix, ".dat");
        assert_eq!(config.udf_hook, "CPAD_oD::libudf");
        assert!(config.sorted);
    }

    #[test]
    fn full_config_overrides_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "caseDir": "runs", "suffix": ".cas", "udfHook": "eval::libother", "sorted": false }"#,
        )
        .unwrap();
        assert_eq!(config.suffix, ".cas");
        assert_eq!(config.udf_hook, "eval::libother");
        assert!(!config.sorted);
    }

    #[tokio::test]
    async fn load_missing_config_fails() {
        let err = load_config_from_file("does-not-exist.json").await;
        assert!(matches!(err, Err(Error::Io(_))));
    }
}
