//! Command dispatch: bridges CLI args -> resolved inventory -> output formatting.

pub mod check;
pub mod config_cmd;
pub mod groups;
pub mod tags;
pub mod util;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

use self::util::Session;

/// Dispatch an inventory-bound command to the appropriate handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Groups(args) => groups::handle(&Session::open(global)?, &args, global),
        Command::Tags(args) => tags::handle(&Session::open(global)?, &args, global),
        // Warnings are printed by the report itself, not logged.
        Command::Check(args) => check::handle(&Session::open_quietly(global)?, &args, global),
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}
