use std::path::PathBuf;

use clap::Parser;

use crate::models::Ecosystem;

#[derive(Parser, Debug)]
#[command(
    name = "license-csv",
    about = "Resolve dependency licenses and write them to a CSV report",
    version
)]
pub struct Cli {
    /// Project path to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.license-csv/config.toml, fallback ~/.config/license-csv/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// CSV output path; overrides `output.path` from the config
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Exclude an ecosystem from scanning (repeatable)
    #[arg(long = "exclude-lang", value_name = "LANG")]
    pub exclude_lang: Vec<EcosystemArg>,

    /// Only print the summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum EcosystemArg {
    Go,
    Rust,
}

impl From<&EcosystemArg> for Ecosystem {
    fn from(arg: &EcosystemArg) -> Self {
        match arg {
            EcosystemArg::Go => Ecosystem::Go,
            EcosystemArg::Rust => Ecosystem::Rust,
        }
    }
}
