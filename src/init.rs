use std::{fs::File, io::Write, path::Path};

use tokio::fs::remove_file;

use crate::{config::Config, error::Error};

pub async fn generate_config_file(path: &str, force: bool) -> Result<(), Error> {
    let path_obj = Path::new(path);
    if path_obj.exists() {
        match force {
            true => {
                remove_file(path_obj).await?;
            }
            false => {
                println!("⚠️ Config file {path} already exists, use --force to overwrite");
                return Ok(());
            }
        }
    }

    let json = serde_json::to_string_pretty(&Config::default())?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    println!("✅ Config file created at {path}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::load_config_from_file;

    #[tokio::test]
    async fn generated_config_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jougen.json");
        let path = path.to_str().unwrap();

        generate_config_file(path, false).await.unwrap();
        let config = load_config_from_file(path).await.unwrap();
        assert_eq!(config.suffix, ".dat");
        assert_eq!(config.udf_hook, "CPAD_oD::libudf");
    }

    #[tokio::test]
    async fn existing_config_is_kept_without_force() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jougen.json");
        std::fs::write(&path, "custom").unwrap();

        generate_config_file(path.to_str().unwrap(), false)
            .await
            .unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "custom");
    }
}
