use std::{io::Write, path::Path};

use tokio::fs::write;
use walkdir::WalkDir;

use crate::{config::Config, error::Error};

pub async fn run_emit(config: Config, output: Option<&str>, verbose: bool) -> Result<(), Error> {
    let case_dir = Path::new(&config.case_dir);
    let names = scan_data_files(case_dir, &config.suffix, config.sorted)?;

    if verbose {
        eprintln!(
            "Found {} *{} files in {}",
            names.len(),
            config.suffix,
            case_dir.display()
        );
    }

    let journal = render_journal(&names, &config.udf_hook);

    match output {
        Some(path) => {
            write(path, &journal).await?;
            if verbose {
                eprintln!("Journal written to {path}");
            }
        }
        None => {
            // stdout carries the journal and nothing else
            std::io::stdout().lock().write_all(journal.as_bytes())?;
        }
    }

    Ok(())
}

/// Collect one level of regular files whose name ends with `suffix`
/// (case-sensitive). Subdirectories never qualify.
pub fn scan_data_files(dir: &Path, suffix: &str, sorted: bool) -> Result<Vec<String>, Error> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory(dir.display().to_string()));
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if name.ends_with(suffix) {
            names.push(name.to_string());
        }
    }

    if sorted {
        names.sort();
    }
    Ok(names)
}

/// Four lines per data file: read it, acknowledge the overwrite prompt,
/// then fire the on-demand UDF.
pub fn render_block(name: &str, udf_hook: &str) -> String {
    format!("file/read-data/{name}\nok\n\n/define/user-defined/execute-on-demand \"{udf_hook}\"\n")
}

pub fn render_journal(names: &[String], udf_hook: &str) -> String {
    names.iter().map(|n| render_block(n, udf_hook)).collect()
}
