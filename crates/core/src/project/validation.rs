//! Repository URL validation.
//!
//! Purely syntactic: no network call is made to verify the repository
//! actually exists.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static GITHUB_REPO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/?$")
        .expect("github repo pattern")
});

/// Errors produced by payload validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("repo_url must look like https://github.com/<owner>/<repo>")]
    InvalidRepoUrl,
}

/// Validates a repository URL and extracts its owner and repo components.
///
/// Accepts `http` or `https`, an optional `www.` prefix, and an optional
/// trailing slash. Owner and repo are limited to alphanumerics, underscore,
/// dot, and hyphen.
pub fn parse_repo_url(url: &str) -> Result<(String, String), ValidationError> {
    let captures = GITHUB_REPO_RE
        .captures(url)
        .ok_or(ValidationError::InvalidRepoUrl)?;

    Ok((captures[2].to_string(), captures[3].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_https_url() {
        let (owner, repo) = parse_repo_url("https://github.com/acme/widget").unwrap();
        assert_eq!(owner, "acme");
        assert_eq!(repo, "widget");
    }

    #[test]
    fn test_accepts_http_www_and_trailing_slash() {
        for url in [
            "http://github.com/acme/widget",
            "https://www.github.com/acme/widget",
            "https://github.com/acme/widget/",
            "http://www.github.com/acme/widget/",
        ] {
            let (owner, repo) = parse_repo_url(url).unwrap();
            assert_eq!(owner, "acme");
            assert_eq!(repo, "widget");
        }
    }

    #[test]
    fn test_accepts_dots_underscores_hyphens() {
        let (owner, repo) = parse_repo_url("https://github.com/rust-lang/rust.vim").unwrap();
        assert_eq!(owner, "rust-lang");
        assert_eq!(repo, "rust.vim");

        let (owner, repo) = parse_repo_url("https://github.com/some_user/my_repo-2").unwrap();
        assert_eq!(owner, "some_user");
        assert_eq!(repo, "my_repo-2");
    }

    #[test]
    fn test_rejects_non_matching_urls() {
        for url in [
            "",
            "not-a-url",
            "github.com/acme/widget",
            "ftp://github.com/acme/widget",
            "https://gitlab.com/acme/widget",
            "https://github.com/acme",
            "https://github.com/acme/widget/issues",
            "https://github.com/acme/widget?tab=readme",
            " https://github.com/acme/widget",
        ] {
            assert_eq!(
                parse_repo_url(url),
                Err(ValidationError::InvalidRepoUrl),
                "expected rejection for {url:?}"
            );
        }
    }

    #[test]
    fn test_error_message_is_user_facing() {
        assert_eq!(
            ValidationError::InvalidRepoUrl.to_string(),
            "repo_url must look like https://github.com/<owner>/<repo>"
        );
    }
}
