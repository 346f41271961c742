//! Generate an AUTHORS file from `git shortlog -sne` and `.mailmap`,
//! optionally linking each author to a GitHub account.

pub mod authors;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod github;
pub mod model;
