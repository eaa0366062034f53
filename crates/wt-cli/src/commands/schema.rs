use wt_core::ComponentRecord;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `webtypes schema`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schemars::schema_for!(ComponentRecord);
    output(&schema, flags.format)
}
