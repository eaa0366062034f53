use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;
use wt_config::WebTypesConfig;
use wt_emit::WrittenFiles;
use wt_parser::scan_dir;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub components: usize,
    pub attributes: usize,
    pub files_scanned: usize,
    pub skipped: Vec<PathBuf>,
    pub written: WrittenFiles,
}

/// Handle `webtypes generate`.
pub fn handle(args: &GenerateArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config()?;
    apply_overrides(&mut config, args);
    config.validate()?;

    let summary = generate(&config)?;
    if !flags.quiet {
        output(&summary, flags.format)?;
    }
    Ok(())
}

fn apply_overrides(config: &mut WebTypesConfig, args: &GenerateArgs) {
    if let Some(source) = &args.source {
        config.scan.source_dir.clone_from(source);
    }
    if let Some(out) = &args.out {
        config.output.dir.clone_from(out);
    }
    if let Some(locale) = &args.locale {
        config.scan.locale.clone_from(locale);
    }
}

/// Scan the whole source directory, then write all descriptor files.
///
/// A scan failure aborts before any file is written.
pub fn generate(config: &WebTypesConfig) -> anyhow::Result<GenerateSummary> {
    let source_dir = Path::new(&config.scan.source_dir);
    let report = scan_dir(source_dir, &bootstrap::scan_options(&config.scan))
        .with_context(|| format!("failed to scan {}", source_dir.display()))?;

    let written = wt_emit::write_descriptors(&report.components, &config.library, &config.output)
        .context("failed to write descriptors")?;

    Ok(GenerateSummary {
        components: report.components.len(),
        attributes: report.components.iter().map(|c| c.attributes.len()).sum(),
        files_scanned: report.files_scanned,
        skipped: report.skipped.into_iter().map(|s| s.path).collect(),
        written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const BUTTON: &str = r#"
export default {
  mode: ['pc', 'mobile-first'],
  apis: [
    {
      name: 'button',
      type: 'component',
      props: [
        { name: 'size', type: "'large' | 'small'", defaultValue: '', desc: { 'zh-CN': '尺寸', 'en-US': 'Size' } },
        { name: 'disabled', type: 'boolean', defaultValue: 'false', desc: { 'zh-CN': '禁用', 'en-US': 'Disabled' } }
      ],
      events: [{ name: 'click', type: '(event) => void', desc: { 'zh-CN': '点击', 'en-US': 'Click' } }],
      methods: [],
      slots: [{ name: 'default', desc: { 'zh-CN': '默认', 'en-US': 'Default' } }]
    }
  ]
}
"#;

    fn config_for(source: &Path, out: &Path) -> WebTypesConfig {
        let mut config = WebTypesConfig::default();
        config.scan.source_dir = source.display().to_string();
        config.output.dir = out.display().to_string();
        config
    }

    #[test]
    fn generate_writes_descriptors_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("apis");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("button.js"), BUTTON).unwrap();
        let out = dir.path().join("out");

        let summary = generate(&config_for(&source, &out)).unwrap();
        assert_eq!(summary.components, 1);
        assert_eq!(summary.attributes, 2);
        assert_eq!(summary.files_scanned, 1);
        assert!(summary.skipped.is_empty());

        let tags: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(summary.written.tags).unwrap())
                .unwrap();
        assert_eq!(
            tags,
            serde_json::json!({ "tiny-button": { "attributes": ["size", "disabled"] } })
        );
    }

    #[test]
    fn locale_override_selects_descriptions() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("button.js"), BUTTON).unwrap();
        let mut config = config_for(dir.path(), &dir.path().join("out"));
        apply_overrides(
            &mut config,
            &GenerateArgs {
                source: None,
                out: None,
                locale: Some("en-US".to_string()),
            },
        );

        let summary = generate(&config).unwrap();
        let attributes: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(summary.written.attributes).unwrap())
                .unwrap();
        assert_eq!(attributes["tiny-button/size"]["description"], "Size");
    }

    #[test]
    fn parse_error_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("apis");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("a.js"), BUTTON).unwrap();
        std::fs::write(source.join("b.js"), "export default { apis: [ { name: 'x', }").unwrap();
        let out = dir.path().join("out");

        let err = generate(&config_for(&source, &out)).unwrap_err();
        assert!(format!("{err:#}").contains("b.js"));
        assert!(!out.exists());
    }

    #[test]
    fn lenient_scan_skips_broken_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("apis");
        std::fs::create_dir(&source).unwrap();
        std::fs::write(source.join("a.js"), BUTTON).unwrap();
        std::fs::write(source.join("b.js"), "export default {").unwrap();
        let mut config = config_for(&source, &dir.path().join("out"));
        config.scan.fail_fast = false;

        let summary = generate(&config).unwrap();
        assert_eq!(summary.components, 1);
        assert_eq!(summary.skipped, vec![source.join("b.js")]);
    }
}
