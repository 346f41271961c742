//! Fixed project data and runtime settings.

use std::collections::HashMap;
use std::time::Duration;

/// Identity excluded from every source.
pub const BOT_EMAIL: &str = "fireworq.github@gmail.com";

/// Commits made before the history was published.
pub const INITIAL_COMMITS: &[(&str, u64)] = &[
    ("tarao.gnn@gmail.com", 559),
    ("shibayu36@gmail.com", 31),
    ("hakobe@gmail.com", 28),
    ("yuki.tsubo@gmail.com", 25),
    ("fly.me.to.the.moon1204@gmail.com", 17),
];

/// Read-only data the line parser consults.
#[derive(Debug, Clone)]
pub struct Seeds {
    pub bot_email: String,
    pub initial_commits: HashMap<String, u64>,
}

impl Seeds {
    pub fn initial_commits(&self, email: &str) -> Option<u64> {
        self.initial_commits.get(email).copied()
    }
}

impl Default for Seeds {
    fn default() -> Self {
        Self {
            bot_email: BOT_EMAIL.to_string(),
            initial_commits: INITIAL_COMMITS
                .iter()
                .map(|(email, commits)| (email.to_string(), *commits))
                .collect(),
        }
    }
}

/// Text substituted into the header and footer of the generated file.
#[derive(Debug, Clone)]
pub struct ProjectInfo {
    pub name: String,
    pub generator: String,
    pub organization: String,
    pub organization_url: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            name: "Fireworq".to_string(),
            generator: "script/genauthors/genauthors.go".to_string(),
            organization: "Hatena Co., Ltd.".to_string(),
            organization_url: "http://hatenacorp.jp/".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    pub api_url: String,
    pub token: Option<String>,
    pub timeout: Duration,
    pub batch_size: usize,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            timeout: Duration::from_secs(30),
            batch_size: 5,
        }
    }
}
