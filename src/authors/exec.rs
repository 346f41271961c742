use super::{aggregate, render, sort_contributions, LineParser, LineShape};
use crate::cli::CommonArgs;
use crate::config::{GitHubConfig, ProjectInfo, Seeds};
use crate::error::AuthorsError;
use crate::git::GitRepo;
use crate::github::{resolve_logins, GitHubClient, UserSearch};
use crate::model::{Contribution, OutputFormat};
use anyhow::Context;
use std::io::Write;

pub fn exec(common: CommonArgs, github: GitHubConfig, format: OutputFormat) -> anyhow::Result<()> {
    if github.batch_size == 0 {
        return Err(AuthorsError::InvalidArgument("--batch-size must be at least 1".to_string()).into());
    }

    let repo = GitRepo::open(common.repo.as_ref()).context("Failed to open git repository")?;
    let shortlog = repo.shortlog().context("Failed to run git shortlog")?;
    let mailmap = repo
        .read_file(&common.mailmap)
        .with_context(|| format!("Failed to read {}", common.mailmap.display()))?;

    let seeds = Seeds::default();
    let mut contributions = collect(&seeds, &mailmap, &shortlog)?;
    tracing::info!(authors = contributions.len(), "aggregated contributions");

    if format == OutputFormat::Markdown {
        let client = GitHubClient::new(&github).context("Failed to build GitHub client")?;
        attach_logins(&client, &mut contributions, github.batch_size);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render(&mut out, format, &ProjectInfo::default(), &contributions)
        .context("Failed to write output")?;
    out.flush().context("Failed to write output")?;

    Ok(())
}

/// Parse both sources, merge them and sort the result.
pub fn collect(seeds: &Seeds, mailmap: &str, shortlog: &str) -> crate::error::Result<Vec<Contribution>> {
    let mailmap_parser = LineParser::new(LineShape::Mailmap, seeds)?;
    let shortlog_parser = LineParser::new(LineShape::Shortlog, seeds)?;

    let mut items = aggregate(
        mailmap_parser.parse_all(mailmap),
        shortlog_parser.parse_all(shortlog),
    );
    sort_contributions(&mut items);
    Ok(items)
}

/// Look up every e-mail in the aggregated set and fill in the logins found.
pub fn attach_logins<S: UserSearch + ?Sized>(
    search: &S,
    contributions: &mut [Contribution],
    batch_size: usize,
) {
    let emails: Vec<String> = contributions.iter().map(|c| c.email.clone()).collect();
    let logins = resolve_logins(search, &emails, batch_size);
    for c in contributions.iter_mut() {
        if let Some(login) = logins.get(&c.email) {
            c.login = Some(login.clone());
        }
    }
}
