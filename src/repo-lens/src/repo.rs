//! GitHub repository URL parsing

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
}

impl fmt::Display for RepoInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

fn github_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"github\.com/([^/]+)/([^/]+)").expect("static regex"))
}

/// Extract owner and repository name from anything containing
/// `github.com/<owner>/<repo>`. A trailing `.git` is dropped.
pub fn parse_github_url(url: &str) -> Result<RepoInfo> {
    let caps = github_url_regex()
        .captures(url)
        .ok_or_else(|| Error::InvalidRepoUrl(url.to_string()))?;

    let owner = caps[1].to_string();
    let repo = caps[2].strip_suffix(".git").unwrap_or(&caps[2]).to_string();

    Ok(RepoInfo { owner, repo })
}
