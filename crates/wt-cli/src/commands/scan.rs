use std::path::Path;

use anyhow::Context;
use wt_parser::scan_all;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::output::output;

/// Handle `webtypes scan`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut config = bootstrap::load_config()?;
    if let Some(source) = &args.source {
        config.scan.source_dir.clone_from(source);
    }
    if let Some(locale) = &args.locale {
        config.scan.locale.clone_from(locale);
    }
    config.validate()?;

    let source_dir = Path::new(&config.scan.source_dir);
    let components = scan_all(source_dir, &bootstrap::scan_options(&config.scan))
        .with_context(|| format!("failed to scan {}", source_dir.display()))?;
    output(&components, flags.format)
}
