//! Command dispatch.

pub mod config_cmd;
pub mod dns;
pub mod filter;
pub mod policy;
pub mod protocol;
pub mod util;

use clap::CommandFactory;

use crate::cli::{Cli, Command, GlobalOpts};
use crate::error::CliError;

/// Route a parsed command to its handler.
pub fn dispatch(cmd: Command, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Filter(args) => filter::handle(args, global),
        Command::Protocol(args) => protocol::handle(args, global),
        Command::Policy(args) => policy::handle(args, global),
        Command::Dns(args) => dns::handle(args, global),
        Command::Config(args) => config_cmd::handle(&args, global),
        Command::Completions(args) => {
            let mut cmd = Cli::command();
            clap_complete::generate(args.shell, &mut cmd, "unifw", &mut std::io::stdout());
            Ok(())
        }
    }
}
