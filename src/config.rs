use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CSV_FILE: &str = "data/karuta.csv";
pub const DEFAULT_JSON_FILE: &str = "data/karuta.json";

/// 変換の入出力パス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    fn default_config() -> Self {
        Self::new(DEFAULT_CSV_FILE, DEFAULT_JSON_FILE)
    }

    /// 入力CSVの絶対パス（表示用）
    pub fn input_absolute(&self) -> Result<PathBuf> {
        absolute(&self.input)
    }

    /// 出力JSONの絶対パス（表示用）
    pub fn output_absolute(&self) -> Result<PathBuf> {
        absolute(&self.output)
    }
}

// ファイルが未作成でも解決できるよう canonicalize は使わない
fn absolute(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("data/karuta.csv"));
        assert_eq!(config.output, PathBuf::from("data/karuta.json"));
    }

    #[test]
    fn test_absolute_paths() {
        let config = Config::default();
        let input = config.input_absolute().unwrap();
        assert!(input.is_absolute());
        assert!(input.ends_with("data/karuta.csv"));

        let config = Config::new("/tmp/a.csv", "/tmp/a.json");
        assert_eq!(config.output_absolute().unwrap(), PathBuf::from("/tmp/a.json"));
    }
}
