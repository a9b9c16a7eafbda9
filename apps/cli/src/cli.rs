use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

/// Typed, validated struct generation.
#[derive(Debug, Parser)]
#[command(name = "forma", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: `forma.toml` if present)
    #[arg(long, global = true, env = "FORMA_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Log level requested on the command line, if any.
    pub const fn log_level(&self) -> Option<&'static str> {
        match (self.quiet, self.verbose) {
            (true, _) => Some("error"),
            (false, 0) => None,
            (false, 1) => Some("debug"),
            (false, _) => Some("trace"),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate Rust source from a descriptor file
    Expand(ExpandArgs),

    /// Validate a JSON object against a struct from a descriptor file
    Validate(ValidateArgs),

    /// List the builtin guards usable in descriptor files
    Guards,
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Descriptor file (TOML)
    pub descriptors: PathBuf,

    /// Write the generated source here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Pipe the generated source through rustfmt
    #[arg(long)]
    pub rustfmt: bool,

    /// Path of the runtime crate in generated code
    #[arg(long, value_name = "PATH")]
    pub crate_path: Option<String>,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Descriptor file (TOML)
    pub descriptors: PathBuf,

    /// JSON file holding one object
    pub data: PathBuf,

    /// Struct to validate against
    #[arg(long = "struct", value_name = "NAME")]
    pub strukt: String,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
