//! GitHub login lookup for contributor e-mails.

mod client;
mod enrich;

pub use client::{GitHubClient, SearchResponse, SearchUser, TextMatch, UserSearch};
pub use enrich::{batches, build_query, resolve_logins};
