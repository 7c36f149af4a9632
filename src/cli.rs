//! CLI domain: parse, route and output only.
//! No scanning logic; the route dispatches to the store and tree scanner.

mod output;
mod parse;
mod route;

pub use output::{format_opening_db, format_scanning_root, format_using_config, map_error};
pub use parse::Cli;
pub use route::{RunContext, RunSummary};
