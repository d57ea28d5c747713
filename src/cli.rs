//! CLI domain: parse, route, help, and output only.
//! No domain logic; the route table dispatches to the context builder and generator.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::{format_failure, format_skipped, format_success, map_error, stage};
pub use parse::{Cli, Commands};
pub use route::{CommandOutput, RunContext, RunOutcome};
