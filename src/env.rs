//! Deployment resolution from process environment flags.
//!
//! The same site is published to GitHub Pages (under a repository subpath),
//! Vercel and EdgeOne (both at the domain root). Which one is being built is
//! only visible through environment variables set by the hosting provider:
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `BASE` | Explicit base path, used verbatim when non-empty |
//! | `VERCEL` | `"1"` on Vercel builds |
//! | `VERCEL_URL` | Deployment hostname on Vercel builds |
//! | `EDGEONE` | Any non-empty value on EdgeOne builds |
//!
//! Resolution is total: missing or odd values mean "flag not set".

use crate::config::DeployConfig;
use std::collections::BTreeMap;
use tracing::debug;

pub const BASE_VAR: &str = "BASE";
pub const VERCEL_VAR: &str = "VERCEL";
pub const VERCEL_URL_VAR: &str = "VERCEL_URL";
pub const EDGEONE_VAR: &str = "EDGEONE";

/// Snapshot of the environment variables, read once.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: BTreeMap<String, String>,
}

impl EnvVars {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        Self {
            vars: std::env::vars_os()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// The variable's value if it is set and non-empty.
    fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|v| !v.is_empty())
    }

    fn is_one(&self, name: &str) -> bool {
        self.get(name) == Some("1")
    }
}

/// Hosting provider the build is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hosting {
    Vercel,
    EdgeOne,
    /// Default when no provider flag is set; also covers local builds.
    GitHubPages,
}

impl Hosting {
    /// Whether the provider serves the site from the domain root.
    pub fn serves_from_root(self) -> bool {
        matches!(self, Hosting::Vercel | Hosting::EdgeOne)
    }
}

impl std::fmt::Display for Hosting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Hosting::Vercel => "Vercel",
            Hosting::EdgeOne => "EdgeOne",
            Hosting::GitHubPages => "GitHub Pages",
        })
    }
}

/// Detect the hosting provider. Vercel wins when both flags are present.
pub fn detect_hosting(env: &EnvVars) -> Hosting {
    if env.is_one(VERCEL_VAR) || env.non_empty(VERCEL_URL_VAR).is_some() {
        Hosting::Vercel
    } else if env.non_empty(EDGEONE_VAR).is_some() {
        Hosting::EdgeOne
    } else {
        Hosting::GitHubPages
    }
}

/// Resolve the deployment base path.
///
/// Priority: non-empty `BASE` verbatim, then `"/"` for root-serving hosts,
/// then the configured fallback subpath.
pub fn resolve_base_path(env: &EnvVars, deploy: &DeployConfig) -> String {
    if let Some(base) = env.non_empty(BASE_VAR) {
        debug!(base, "base path overridden by {BASE_VAR}");
        return base.to_string();
    }
    if detect_hosting(env).serves_from_root() {
        return "/".to_string();
    }
    deploy.fallback_base.clone()
}

/// Canonical site URL (no trailing slash) for the given host.
///
/// Only Vercel has its own hostname; EdgeOne builds keep the GitHub Pages URL
/// as canonical.
pub fn resolve_site_url(hosting: Hosting, deploy: &DeployConfig) -> String {
    match hosting {
        Hosting::Vercel => deploy.vercel_url.clone(),
        Hosting::EdgeOne | Hosting::GitHubPages => deploy.github_pages_url.clone(),
    }
}

/// Everything the head builder needs to know about where the site lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub hosting: Hosting,
    pub base: String,
    pub site_url: String,
}

impl Deployment {
    pub fn resolve(env: &EnvVars, deploy: &DeployConfig) -> Self {
        let hosting = detect_hosting(env);
        let deployment = Self {
            hosting,
            base: resolve_base_path(env, deploy),
            site_url: resolve_site_url(hosting, deploy),
        };
        debug!(
            hosting = %deployment.hosting,
            base = %deployment.base,
            site_url = %deployment.site_url,
            "resolved deployment"
        );
        deployment
    }

    /// Join a base-relative file onto the base path, collapsing the first `//`.
    pub fn asset(&self, file: &str) -> String {
        format!("{}{}", self.base, file).replacen("//", "/", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> EnvVars {
        EnvVars::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn base_override_wins_over_flags() {
        let deploy = DeployConfig::default();
        let e = env(&[("BASE", "/custom/"), ("VERCEL", "1"), ("EDGEONE", "1")]);
        assert_eq!(resolve_base_path(&e, &deploy), "/custom/");
    }

    #[test]
    fn empty_base_override_is_ignored() {
        let deploy = DeployConfig::default();
        assert_eq!(resolve_base_path(&env(&[("BASE", "")]), &deploy), "/easy-vibe/");
    }

    #[test]
    fn vercel_flag_uses_root() {
        let deploy = DeployConfig::default();
        assert_eq!(resolve_base_path(&env(&[("VERCEL", "1")]), &deploy), "/");
        assert_eq!(
            resolve_base_path(&env(&[("VERCEL_URL", "x.vercel.app")]), &deploy),
            "/"
        );
    }

    #[test]
    fn vercel_flag_must_be_one() {
        assert_eq!(detect_hosting(&env(&[("VERCEL", "true")])), Hosting::GitHubPages);
        assert_eq!(detect_hosting(&env(&[("VERCEL_URL", "")])), Hosting::GitHubPages);
    }

    #[test]
    fn edgeone_flag_uses_root() {
        let deploy = DeployConfig::default();
        let e = env(&[("EDGEONE", "yes")]);
        assert_eq!(detect_hosting(&e), Hosting::EdgeOne);
        assert_eq!(resolve_base_path(&e, &deploy), "/");
    }

    #[test]
    fn flag_names_are_case_sensitive() {
        assert_eq!(
            detect_hosting(&env(&[("vercel", "1"), ("EdgeOne", "1")])),
            Hosting::GitHubPages
        );
    }

    #[test]
    fn no_flags_uses_fallback() {
        let deploy = DeployConfig::default();
        assert_eq!(resolve_base_path(&EnvVars::default(), &deploy), "/easy-vibe/");
    }

    #[test]
    fn vercel_takes_precedence_over_edgeone() {
        assert_eq!(
            detect_hosting(&env(&[("VERCEL", "1"), ("EDGEONE", "1")])),
            Hosting::Vercel
        );
    }

    #[test]
    fn site_url_per_host() {
        let deploy = DeployConfig::default();
        assert_eq!(
            resolve_site_url(Hosting::Vercel, &deploy),
            "https://your-project.vercel.app"
        );
        assert_eq!(
            resolve_site_url(Hosting::EdgeOne, &deploy),
            "https://datawhalechina.github.io/easy-vibe"
        );
        assert_eq!(
            resolve_site_url(Hosting::GitHubPages, &deploy),
            "https://datawhalechina.github.io/easy-vibe"
        );
    }

    #[test]
    fn deployment_asset_collapses_double_slash() {
        let root = Deployment::resolve(&env(&[("VERCEL", "1")]), &DeployConfig::default());
        assert_eq!(root.asset("logo.png"), "/logo.png");
        assert_eq!(root.asset("/logo.png"), "/logo.png");

        let pages = Deployment::resolve(&EnvVars::default(), &DeployConfig::default());
        assert_eq!(pages.asset("style.css"), "/easy-vibe/style.css");
    }
}
