use crate::config::GitHubConfig;
use crate::error::{AuthorsError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::Deserialize;

const TEXT_MATCH_MEDIA_TYPE: &str = "application/vnd.github.v3.text-match+json";

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchUser>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchUser {
    pub login: String,
    #[serde(default)]
    pub text_matches: Vec<TextMatch>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextMatch {
    #[serde(default)]
    pub property: String,
    #[serde(default)]
    pub fragment: String,
}

/// One user search request per call.
pub trait UserSearch {
    fn search(&self, query: &str) -> Result<Vec<SearchUser>>;
}

/// `GET /search/users` against the GitHub REST API.
pub struct GitHubClient {
    http: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(TEXT_MATCH_MEDIA_TYPE));
        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| AuthorsError::InvalidArgument(format!("GitHub token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search/users", self.base_url)
    }
}

impl UserSearch for GitHubClient {
    fn search(&self, query: &str) -> Result<Vec<SearchUser>> {
        let response = self
            .http
            .get(self.search_url())
            .query(&[("q", query)])
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.items)
    }
}
