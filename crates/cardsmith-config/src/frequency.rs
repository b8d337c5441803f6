use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_path() -> PathBuf {
    PathBuf::from("CharFreq.txt")
}

fn default_encodings() -> Vec<String> {
    ["gb18030", "gbk", "gb2312", "utf-8"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct FrequencyConfig {
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Tried in order; the first that decodes the whole file wins
    #[serde(default = "default_encodings")]
    pub encodings: Vec<String>,
    /// Only process the first N entries
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for FrequencyConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            encodings: default_encodings(),
            limit: None,
        }
    }
}
