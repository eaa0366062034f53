//! Output file configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_dir() -> String {
    ".".to_string()
}

fn default_web_types_file() -> String {
    "web-types.json".to_string()
}

fn default_tags_file() -> String {
    "vetur-tags.json".to_string()
}

fn default_attributes_file() -> String {
    "vetur-attributes.json".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory the descriptor files are written to.
    #[serde(default = "default_dir")]
    pub dir: String,

    #[serde(default = "default_web_types_file")]
    pub web_types_file: String,

    #[serde(default = "default_tags_file")]
    pub tags_file: String,

    #[serde(default = "default_attributes_file")]
    pub attributes_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            web_types_file: default_web_types_file(),
            tags_file: default_tags_file(),
            attributes_file: default_attributes_file(),
        }
    }
}

impl OutputConfig {
    #[must_use]
    pub fn web_types_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.web_types_file)
    }

    #[must_use]
    pub fn tags_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.tags_file)
    }

    #[must_use]
    pub fn attributes_path(&self) -> PathBuf {
        PathBuf::from(&self.dir).join(&self.attributes_file)
    }
}
