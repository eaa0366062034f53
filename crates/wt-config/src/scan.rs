//! Source scanning configuration.

use serde::{Deserialize, Serialize};

fn default_source_dir() -> String {
    "examples/sites/demos/apis".to_string()
}

fn default_suffix() -> String {
    ".js".to_string()
}

fn default_locale() -> String {
    "zh-CN".to_string()
}

const fn default_fail_fast() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Directory holding the component API demo modules.
    #[serde(default = "default_source_dir")]
    pub source_dir: String,

    /// File name suffix of scanned modules.
    #[serde(default = "default_suffix")]
    pub suffix: String,

    /// Locale tag whose `desc` entry becomes the description.
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Parse modules in parallel. Output order is unaffected.
    #[serde(default)]
    pub parallel: bool,

    /// Abort on the first unparsable or malformed module instead of skipping it.
    #[serde(default = "default_fail_fast")]
    pub fail_fast: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            suffix: default_suffix(),
            locale: default_locale(),
            parallel: false,
            fail_fast: default_fail_fast(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert_eq!(config.source_dir, "examples/sites/demos/apis");
        assert_eq!(config.suffix, ".js");
        assert_eq!(config.locale, "zh-CN");
        assert!(!config.parallel);
        assert!(config.fail_fast);
    }
}
