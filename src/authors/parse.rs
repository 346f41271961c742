use crate::config::Seeds;
use crate::error::Result;
use crate::model::Contribution;
use regex::Regex;

/// Grammar of a single input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape {
    /// `Name <email>` from `.mailmap`; the count group is always empty.
    Mailmap,
    /// `count\tName <email>` from `git shortlog -sne`.
    Shortlog,
}

impl LineShape {
    fn pattern(self) -> &'static str {
        match self {
            LineShape::Mailmap => r"^()([^<]*) +<([^>]*)>$",
            LineShape::Shortlog => r"^([0-9]+)\t([^<]*) +<([^>]*)>$",
        }
    }
}

pub struct LineParser<'a> {
    regex: Regex,
    seeds: &'a Seeds,
}

impl<'a> LineParser<'a> {
    pub fn new(shape: LineShape, seeds: &'a Seeds) -> Result<Self> {
        Ok(Self {
            regex: Regex::new(shape.pattern())?,
            seeds,
        })
    }

    /// Parse one line. Blank, malformed and bot lines yield `None`.
    pub fn parse(&self, line: &str) -> Option<Contribution> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let caps = self.regex.captures(line)?;
        let email = caps.get(3)?.as_str();
        if email == self.seeds.bot_email {
            return None;
        }

        let count = caps.get(1).map(|m| m.as_str()).unwrap_or("");
        let commits = if !count.is_empty() {
            count.parse::<u64>().ok()?
        } else {
            self.seeds.initial_commits(email).unwrap_or(0)
        };

        Some(Contribution::new(caps.get(2)?.as_str(), email, commits))
    }

    pub fn parse_all<'t>(&'t self, text: &'t str) -> impl Iterator<Item = Contribution> + 't {
        text.lines().filter_map(move |line| self.parse(line))
    }
}
