//! Protocol command handlers.

use serde::Serialize;

use unifw_api::ProtocolSpec;
use unifw_core::convert::{protocol_filter_type_from_wire, protocol_from_wire, protocol_to_wire};

use super::util;
use crate::cli::{GlobalOpts, ProtocolArgs, ProtocolCommand};
use crate::error::CliError;
use crate::output;

/// Local view of a protocol specifier.
#[derive(Debug, Serialize)]
struct ProtocolView {
    protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol_filter_type: Option<String>,
}

pub fn handle(args: ProtocolArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ProtocolCommand::Render {
            filter_type,
            protocol,
        } => {
            let spec = protocol_to_wire(&filter_type, &protocol);
            let out = output::render(global.output, &spec)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ProtocolCommand::Read { json } => {
            let spec: ProtocolSpec = util::parse_json(&json, "protocol argument")?;
            let view = ProtocolView {
                protocol: protocol_from_wire(Some(&spec)),
                protocol_filter_type: protocol_filter_type_from_wire(&spec)
                    .map(|t| t.as_ref().to_owned()),
            };
            let out = output::render(global.output, &view)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
