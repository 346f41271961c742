#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contribution {
    pub name: String,
    pub email: String,
    pub commits: u64,
    pub login: Option<String>,
}

impl Contribution {
    pub fn new(name: impl Into<String>, email: impl Into<String>, commits: u64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            commits,
            login: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Plain,
    Markdown,
}

impl OutputFormat {
    /// Only the exact value `markdown` selects the table; anything else is plain.
    pub fn from_flag(value: &str) -> Self {
        match value {
            "markdown" => OutputFormat::Markdown,
            _ => OutputFormat::Plain,
        }
    }
}
