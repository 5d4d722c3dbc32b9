//! Config subcommand handlers.

use serde::Serialize;

use unifw_config::{Config, ConfigError};
use unifw_core::TlsVerification;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Resolved profile as shown to the user. Never carries the key itself.
#[derive(Debug, Serialize)]
struct ResolvedProfile {
    profile: String,
    controller: String,
    site: String,
    api_key: &'static str,
    tls: String,
    timeout_secs: u64,
}

fn tls_label(tls: &TlsVerification) -> String {
    match tls {
        TlsVerification::SystemDefaults => "system".into(),
        TlsVerification::CustomCa(path) => format!("ca:{}", path.display()),
        TlsVerification::DangerAcceptInvalid => "insecure".into(),
    }
}

fn resolve(cfg: &Config, global: &GlobalOpts, path: &str) -> Result<ResolvedProfile, CliError> {
    let (name, profile) = cfg.profile(global.profile.as_deref()).map_err(|err| match err {
        ConfigError::UnknownProfile { name } => {
            let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
            available.sort();
            CliError::ProfileNotFound {
                name,
                available: if available.is_empty() {
                    "(none)".into()
                } else {
                    available.join(", ")
                },
                path: path.to_owned(),
            }
        }
        other => other.into(),
    })?;

    let mut profile = profile.clone();
    if let Some(site) = &global.site {
        profile.site.clone_from(site);
    }

    let (api_key, provider) =
        match unifw_config::profile_to_provider_config(&profile, name, &cfg.defaults) {
            Ok(provider) => ("<redacted>", Some(provider)),
            Err(ConfigError::NoCredentials { .. }) => ("<missing>", None),
            Err(other) => return Err(other.into()),
        };

    Ok(ResolvedProfile {
        profile: name.to_owned(),
        controller: profile.controller.clone(),
        site: profile.site.clone(),
        api_key,
        tls: provider
            .as_ref()
            .map_or_else(|| "unresolved".into(), |p| tls_label(&p.tls)),
        timeout_secs: profile.timeout.unwrap_or(cfg.defaults.timeout),
    })
}

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let path = global
        .config
        .clone()
        .unwrap_or_else(unifw_config::config_path);

    match args.command {
        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let cfg = unifw_config::load_config_from(&path)?;
            let resolved = resolve(&cfg, global, &path.display().to_string())?;
            let out = output::render(global.output, &resolved)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }
    }
}
