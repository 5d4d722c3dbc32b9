//! Traffic filter command handlers.

use tracing::debug;

use unifw_api::firewall as wire;
use unifw_core::TrafficFilter;

use super::util;
use crate::cli::{FilterArgs, FilterCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: FilterArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        FilterCommand::Render { file } => {
            let local: TrafficFilter = util::load_local(&file)?;
            let out = output::render(global.output, &local.to_wire())?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FilterCommand::Read { file } => {
            let remote: wire::TrafficFilter = util::load_wire(&file)?;
            let out = output::render(global.output, &TrafficFilter::from_wire(&remote))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        FilterCommand::Check { file } => {
            let local: TrafficFilter = util::load_local(&file)?;
            let first = local.to_wire();
            let second = TrafficFilter::from_wire(&first).to_wire();
            debug!(file = %file.display(), "compared wire renderings");

            if first == second {
                output::print_ok("no drift", global.quiet);
                return Ok(());
            }
            output::print_section("planned:", &output::render(global.output, &first)?);
            output::print_section("after read-back:", &output::render(global.output, &second)?);
            Err(CliError::Drift)
        }
    }
}
