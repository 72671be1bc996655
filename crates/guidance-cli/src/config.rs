use std::path::PathBuf;

use guidance_core::loader;
use guidance_core::model::Subject;

/// Application configuration resolved from the environment.
///
/// The data directory holds the five table files: questions, weights and
/// one guidance table per subject. All must exist before loading starts.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
}

pub const DEFAULT_DATA_DIR: &str = "./data";

impl Config {
    /// Resolve the data directory from `GUIDANCE_DATA_DIR`, defaulting to
    /// `./data`, and verify the expected table files are present.
    pub fn from_env() -> anyhow::Result<Self> {
        let data_dir = std::env::var("GUIDANCE_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let mut expected = vec![loader::QUESTIONS_FILE, loader::WEIGHTS_FILE];
        expected.extend(Subject::ALL.map(loader::guidance_file));

        for file in expected {
            let path = data_dir.join(file);
            if !path.exists() {
                anyhow::bail!("table file not found: {}", path.display());
            }
        }

        Ok(Self { data_dir })
    }
}
