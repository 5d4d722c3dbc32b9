//! Firewall policy command handlers.

use unifw_api::FirewallPolicy;
use unifw_core::FirewallPolicyModel;
use unifw_core::convert::{firewall_policy_from_wire, firewall_policy_to_wire};

use super::util;
use crate::cli::{GlobalOpts, PolicyArgs, PolicyCommand};
use crate::error::CliError;
use crate::output;

pub fn handle(args: PolicyArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        PolicyCommand::Render { file } => {
            let plan: FirewallPolicyModel = util::load_local(&file)?;
            let out = output::render(global.output, &firewall_policy_to_wire(&plan))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        PolicyCommand::Read { file, prior } => {
            let remote: FirewallPolicy = util::load_wire(&file)?;
            let prior: Option<FirewallPolicyModel> =
                prior.as_deref().map(util::load_local::<FirewallPolicyModel>).transpose()?;
            let state = firewall_policy_from_wire(&remote, prior.as_ref());
            let out = output::render(global.output, &state)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
