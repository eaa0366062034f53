use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Scan component API demos and write web-types and Vetur descriptors.
    Generate(GenerateArgs),
    /// Print the component records extracted from the API demos.
    Scan(ScanArgs),
    /// Print the JSON Schema of an extracted component record.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    /// Directory of API demo modules (overrides `scan.source_dir`)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output directory (overrides `output.dir`)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Description locale (overrides `scan.locale`)
    #[arg(long)]
    pub locale: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Directory of API demo modules (overrides `scan.source_dir`)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Description locale (overrides `scan.locale`)
    #[arg(long)]
    pub locale: Option<String>,
}
