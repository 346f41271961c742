use crate::config::GitHubConfig;
use crate::model::OutputFormat;
use anyhow::Result;
use clap::{Args, Parser};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "genauthors")]
#[command(about = "Generate an AUTHORS file from git shortlog and .mailmap")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[clap(flatten)]
    pub github: GitHubArgs,

    #[arg(
        long,
        default_value = "plain",
        help = "The output format (markdown or plain)"
    )]
    pub format: String,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(long, help = "Path to git repository")]
    pub repo: Option<PathBuf>,

    #[arg(
        long,
        default_value = ".mailmap",
        help = "Path to the mailmap file, relative to the repository"
    )]
    pub mailmap: PathBuf,
}

#[derive(Args, Clone)]
pub struct GitHubArgs {
    #[arg(
        long,
        env = "GITHUB_API_URL",
        default_value = "https://api.github.com",
        help = "Base URL of the GitHub API"
    )]
    pub api_url: String,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub API token")]
    pub token: Option<String>,

    #[arg(long, default_value_t = 30, help = "Timeout in seconds for each search request")]
    pub timeout: u64,

    #[arg(long, default_value_t = 5, help = "Number of e-mails per search request")]
    pub batch_size: usize,
}

impl GitHubArgs {
    pub fn to_config(&self) -> GitHubConfig {
        GitHubConfig {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            timeout: Duration::from_secs(self.timeout),
            batch_size: self.batch_size,
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        let format = OutputFormat::from_flag(&self.format);
        crate::authors::exec(self.common, self.github.to_config(), format)
    }
}
