use std::path::PathBuf;

use clap::Parser;

use crate::models::ReportSchema;

#[derive(Parser, Debug)]
#[command(
    name = "repo-licensr",
    about = "Inventory license metadata and copyright notices for GitHub-hosted repositories",
    version
)]
pub struct Cli {
    /// File listing one repository reference per line (host/owner/name)
    #[arg(value_name = "LICENSE-FILE")]
    pub input: Option<PathBuf>,

    /// GitHub personal access token for authenticated API requests
    #[arg(value_name = "GITHUB-PERSONAL-TOKEN")]
    pub token: Option<String>,

    /// Report schema [default: from config, then `full`]
    #[arg(long, value_name = "SCHEMA")]
    pub schema: Option<SchemaArg>,

    /// Config file [default: ./.repo-licensr/config.toml, fallback ~/.config/repo-licensr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List every resolved repository in the terminal summary
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum SchemaArg {
    Full,
    Processed,
}

impl From<&SchemaArg> for ReportSchema {
    fn from(arg: &SchemaArg) -> Self {
        match arg {
            SchemaArg::Full => ReportSchema::Full,
            SchemaArg::Processed => ReportSchema::Processed,
        }
    }
}
