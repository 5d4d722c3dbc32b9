//! DNS policy command handlers.

use unifw_api::DnsPolicy;
use unifw_core::DnsPolicyModel;
use unifw_core::convert::{apply_dns_policy, dns_policy_to_wire};

use super::util;
use crate::cli::{DnsArgs, DnsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: DnsArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        DnsCommand::Render { file } => {
            let plan: DnsPolicyModel = util::load_local(&file)?;
            if plan.kind().is_none() {
                tracing::warn!(kind = %plan.policy_type, "unrecognized DNS policy type");
            }
            let out = output::render(global.output, &dns_policy_to_wire(&plan))?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        DnsCommand::Read { file, prior } => {
            let remote: DnsPolicy = util::load_wire(&file)?;
            let mut state: DnsPolicyModel = match prior {
                Some(path) => util::load_local(&path)?,
                None => DnsPolicyModel::default(),
            };
            apply_dns_policy(&mut state, &remote);
            let out = output::render(global.output, &state)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
