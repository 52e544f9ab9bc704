//! Canonical repository identity used to compare sources with artifacts.
//!
//! Application sources, update declarations and freight artifacts spell the
//! same repository in different ways: with or without a scheme, with the OCI
//! chart name folded into the registry path or kept separate. Everything that
//! compares repositories goes through [`SourceKey`] so there is exactly one
//! definition of "same repository".

use crate::freight::{Chart, GitCommit};

const OCI_SCHEME: &str = "oci";

/// Normalized identity of a git repository or chart.
///
/// The variant records what kind of artifact can satisfy the source, so a
/// lookup never has to re-inspect URL shapes.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum SourceKey {
    /// Git repository; scheme, credentials, case and `.git` suffix dropped.
    Git(String),
    /// Chart in a classic (HTTP/HTTPS) chart repository.
    Chart { repo: String, name: String },
    /// Chart in an OCI registry, as `registry/path/chart`.
    Oci(String),
}

impl SourceKey {
    /// Key for a declared source or update declaration.
    ///
    /// An empty `chart` means a git source. Returns `None` when the repository
    /// coordinate is empty; such a source matches nothing.
    pub fn for_source(repo_url: &str, chart: &str) -> Option<Self> {
        if chart.trim().is_empty() {
            git_identity(repo_url).map(SourceKey::Git)
        } else {
            chart_identity(repo_url, chart.trim())
        }
    }

    /// Key for a chart artifact carried by freight.
    pub fn for_chart(chart: &Chart) -> Option<Self> {
        chart_identity(&chart.repo_url, chart.name.trim())
    }

    /// Key for a commit artifact carried by freight.
    pub fn for_commit(commit: &GitCommit) -> Option<Self> {
        git_identity(&commit.repo_url).map(SourceKey::Git)
    }

    pub fn is_chart(&self) -> bool {
        !matches!(self, SourceKey::Git(_))
    }
}

/// Splits `scheme://rest`; the scheme is lowercased.
fn split_scheme(url: &str) -> (Option<String>, &str) {
    match url.split_once("://") {
        Some((scheme, rest)) if !scheme.is_empty() => (Some(scheme.to_ascii_lowercase()), rest),
        _ => (None, url),
    }
}

fn git_identity(repo_url: &str) -> Option<String> {
    let trimmed = repo_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    let (scheme, rest) = split_scheme(&lowered);

    // Userinfo only counts when it precedes the first path separator.
    let rest = match rest.split_once('@') {
        Some((user, host_and_path)) if !user.contains('/') => host_and_path,
        _ => rest,
    };

    // scp-style `host:org/repo` has no scheme. A numeric segment after the
    // colon is a port, with or without a scheme.
    let rewritten = match (scheme, rest.split_once(':')) {
        (None, Some((host, path))) if !host.contains('/') && !starts_with_port(path) => {
            format!("{host}/{path}")
        }
        _ => rest.to_string(),
    };

    let path = rewritten.trim_end_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        return None;
    }
    Some(path.to_string())
}

fn chart_identity(repo_url: &str, name: &str) -> Option<SourceKey> {
    let trimmed = repo_url.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (scheme, rest) = split_scheme(trimmed);
    let repo = lowercase_host(rest.trim_end_matches('/'));
    if repo.is_empty() {
        return None;
    }

    match scheme.as_deref() {
        // A schemeless chart repository can only be an OCI registry: classic
        // chart repositories are always addressed over HTTP(S).
        None | Some(OCI_SCHEME) => {
            let path = if name.is_empty() {
                repo
            } else {
                format!("{repo}/{name}")
            };
            Some(SourceKey::Oci(path))
        }
        Some(_) => Some(SourceKey::Chart {
            repo,
            name: name.to_string(),
        }),
    }
}

fn starts_with_port(path: &str) -> bool {
    let segment = path.split('/').next().unwrap_or_default();
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// Hosts are case-insensitive; registry and repository paths are left alone.
fn lowercase_host(repo: &str) -> String {
    match repo.split_once('/') {
        Some((host, path)) => format!("{}/{path}", host.to_ascii_lowercase()),
        None => repo.to_ascii_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_scheme_variants_compare_equal() {
        let https = SourceKey::for_source("https://github.com/universe/42", "");
        assert_eq!(https, SourceKey::for_source("github.com/universe/42", ""));
        assert_eq!(https, SourceKey::for_source("https://github.com/universe/42/", ""));
        assert_eq!(https, SourceKey::for_source("https://GitHub.com/universe/42.git", ""));
        assert_eq!(https, SourceKey::for_source("ssh://git@github.com/universe/42", ""));
        assert_eq!(https, SourceKey::for_source("git@github.com:universe/42.git", ""));
        assert_eq!(
            https,
            Some(SourceKey::Git("github.com/universe/42".to_string()))
        );
    }

    #[test]
    fn git_port_is_not_mistaken_for_scp_path() {
        assert_eq!(
            SourceKey::for_source("https://git.example.com:8443/org/repo", ""),
            Some(SourceKey::Git("git.example.com:8443/org/repo".to_string()))
        );
    }

    #[test]
    fn schemeless_git_port_matches_https_form() {
        let https = SourceKey::for_source("https://git.example.com:8443/org/repo", "");
        assert_eq!(https, SourceKey::for_source("git.example.com:8443/org/repo", ""));
        assert_eq!(
            SourceKey::for_source("git@git.example.com:org/repo.git", ""),
            Some(SourceKey::Git("git.example.com/org/repo".to_string()))
        );
    }

    #[test]
    fn chart_hosts_compare_case_insensitively() {
        let declared = SourceKey::for_source("https://Example.com/Charts", "fake-chart");
        let artifact = SourceKey::for_chart(&Chart::new("https://example.com/Charts", "fake-chart", "v1"));
        assert_eq!(declared, artifact);

        let oci = SourceKey::for_source("Registry.Example.com/team", "fake-chart");
        let folded = SourceKey::for_chart(&Chart::new("oci://registry.example.com/team/fake-chart", "", "v3"));
        assert_eq!(oci, folded);
    }

    #[test]
    fn empty_repo_matches_nothing() {
        assert_eq!(SourceKey::for_source("", ""), None);
        assert_eq!(SourceKey::for_source("   ", "fake-chart"), None);
        assert_eq!(SourceKey::for_source("https://", ""), None);
        assert_eq!(SourceKey::for_commit(&GitCommit::new("", "abc")), None);
    }

    #[test]
    fn https_chart_keeps_repo_and_name_apart() {
        let declared = SourceKey::for_source("https://example.com", "fake-chart");
        let artifact = SourceKey::for_chart(&Chart::new("https://example.com/", "fake-chart", "v1"));
        assert_eq!(declared, artifact);
        assert_eq!(
            declared,
            Some(SourceKey::Chart {
                repo: "example.com".to_string(),
                name: "fake-chart".to_string()
            })
        );
    }

    #[test]
    fn oci_artifact_matches_schemeless_declared_chart() {
        let declared = SourceKey::for_source("example.com", "fake-chart");
        let folded = SourceKey::for_chart(&Chart::new("oci://example.com/fake-chart", "", "v3.0.0"));
        let split = SourceKey::for_chart(&Chart::new("oci://example.com", "fake-chart", "v3.0.0"));
        assert_eq!(declared, folded);
        assert_eq!(declared, split);
        assert_eq!(declared, Some(SourceKey::Oci("example.com/fake-chart".to_string())));
    }

    #[test]
    fn oci_and_https_registries_stay_distinct() {
        let https = SourceKey::for_source("https://example.com", "fake-chart");
        let oci = SourceKey::for_source("example.com", "fake-chart");
        assert_ne!(https, oci);
        assert!(oci.unwrap().is_chart());
        assert!(!SourceKey::for_source("example.com", "").unwrap().is_chart());
    }
}
