//! Clap derive structures for the `unifw` CLI.
//!
//! Defines the command tree, global flags, and shared types. Kept free of
//! crate-internal imports so `build.rs` can include it for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unifw -- render and check UniFi firewall state offline
#[derive(Debug, Parser)]
#[command(
    name = "unifw",
    version,
    about = "Convert UniFi firewall configuration between local state and the controller wire format",
    long_about = "Offline tooling for UniFi firewall state.\n\n\
        Renders local traffic filters, protocols, DNS and firewall policies\n\
        into the JSON the controller expects, reads controller payloads back\n\
        into local state, and checks that a round trip produces no drift.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "UNIFW_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Site name (overrides profile)
    #[arg(long, short = 's', env = "UNIFW_SITE", global = true)]
    pub site: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "UNIFW_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Config file (defaults to the platform config directory)
    #[arg(long, env = "UNIFW_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert source/destination traffic filters
    #[command(alias = "f")]
    Filter(FilterArgs),

    /// Convert protocol specifiers
    #[command(alias = "proto")]
    Protocol(ProtocolArgs),

    /// Convert firewall policies
    #[command(alias = "fw")]
    Policy(PolicyArgs),

    /// Convert DNS policies
    Dns(DnsArgs),

    /// Inspect configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Filter ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(subcommand)]
    pub command: FilterCommand,
}

#[derive(Debug, Subcommand)]
pub enum FilterCommand {
    /// Render a local filter (YAML or JSON) as wire JSON
    Render {
        /// Local filter file, `-` for stdin
        file: PathBuf,
    },

    /// Read a wire filter (JSON) into local state
    Read {
        /// Wire filter file, `-` for stdin
        file: PathBuf,
    },

    /// Check that a local filter round-trips without drift
    Check {
        /// Local filter file, `-` for stdin
        file: PathBuf,
    },
}

// ── Protocol ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ProtocolArgs {
    #[command(subcommand)]
    pub command: ProtocolCommand,
}

#[derive(Debug, Subcommand)]
pub enum ProtocolCommand {
    /// Render a protocol string as a wire protocol object
    Render {
        /// PRESET, PROTOCOL_NUMBER, NAMED_PROTOCOL, or PROTOCOL
        #[arg(long = "type", short = 't', default_value = "NAMED_PROTOCOL")]
        filter_type: String,

        /// Protocol string (empty renders as `null`)
        protocol: String,
    },

    /// Read a wire protocol object back into a protocol string
    Read {
        /// Inline JSON object, e.g. '{"preset":"WEB"}'
        json: String,
    },
}

// ── Firewall policy ──────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct PolicyArgs {
    #[command(subcommand)]
    pub command: PolicyCommand,
}

#[derive(Debug, Subcommand)]
pub enum PolicyCommand {
    /// Render a local firewall policy as wire JSON
    Render {
        /// Local policy file, `-` for stdin
        file: PathBuf,
    },

    /// Read a wire firewall policy into local state
    Read {
        /// Wire policy file, `-` for stdin
        file: PathBuf,

        /// Prior local state, used to keep the configured protocol filter type
        #[arg(long)]
        prior: Option<PathBuf>,
    },
}

// ── DNS policy ───────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct DnsArgs {
    #[command(subcommand)]
    pub command: DnsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DnsCommand {
    /// Render a local DNS policy as wire JSON
    Render {
        /// Local policy file, `-` for stdin
        file: PathBuf,
    },

    /// Merge a wire DNS policy into local state
    Read {
        /// Wire policy file, `-` for stdin
        file: PathBuf,

        /// Prior local state to merge into
        #[arg(long)]
        prior: Option<PathBuf>,
    },
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the resolved profile (API key redacted)
    Show,

    /// Print the config file path
    Path,
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
