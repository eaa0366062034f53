use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Generate(args) => commands::generate::handle(args, flags),
        Commands::Scan(args) => commands::scan::handle(args, flags),
        Commands::Schema => commands::schema::handle(flags),
    }
}
