use crate::error::{AuthorsError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Use the repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };
        if !path.is_dir() {
            return Err(AuthorsError::Git(format!(
                "Not a directory: {}",
                path.display()
            )));
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `HEAD` resolves to a commit. An unborn branch has none.
    pub fn has_commits(&self) -> Result<bool> {
        let output = Command::new("git")
            .args(["rev-parse", "--verify", "-q", "HEAD"])
            .current_dir(&self.path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AuthorsError::Git(format!("Failed to run git rev-parse: {e}")))?;

        match output.status.code() {
            Some(0) => Ok(true),
            // --quiet exits 1 without a message when the ref does not resolve
            Some(1) => Ok(false),
            _ => Err(AuthorsError::Git(format!(
                "git rev-parse exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            ))),
        }
    }

    /// Output of `git shortlog -sne HEAD`: one `count\tName <email>` line per author.
    ///
    /// `.mailmap` in the work tree is applied by git itself. A repository
    /// without commits yields an empty log, as `git log | git shortlog` does.
    pub fn shortlog(&self) -> Result<String> {
        if !self.has_commits()? {
            return Ok(String::new());
        }

        // shortlog reads a log from stdin unless given a revision and a closed stdin
        let output = Command::new("git")
            .args(["shortlog", "-sne", "HEAD"])
            .current_dir(&self.path)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AuthorsError::Git(format!("Failed to run git shortlog: {e}")))?;

        if !output.status.success() {
            return Err(AuthorsError::Git(format!(
                "git shortlog exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Read a file, resolving relative paths against the repository.
    pub fn read_file(&self, path: &Path) -> Result<String> {
        let full = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.path.join(path)
        };
        Ok(std::fs::read_to_string(full)?)
    }
}
