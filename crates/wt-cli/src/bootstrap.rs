use anyhow::Context;
use wt_config::{ScanConfig, WebTypesConfig};
use wt_parser::ScanOptions;

/// Load layered configuration, reading `.env` from the working directory first.
pub fn load_config() -> anyhow::Result<WebTypesConfig> {
    WebTypesConfig::load_with_dotenv().context("failed to load webtypes configuration")
}

pub fn scan_options(scan: &ScanConfig) -> ScanOptions {
    ScanOptions {
        suffix: scan.suffix.clone(),
        locale: scan.locale.clone(),
        parallel: scan.parallel,
        fail_fast: scan.fail_fast,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scan_config_matches_default_options() {
        assert_eq!(scan_options(&ScanConfig::default()), ScanOptions::default());
    }
}
