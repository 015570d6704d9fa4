//! Allow-list parsing and the default origin set.
//!
//! Raw lists look like `"https://a.com, https://b.com"`. Entries are split on
//! `,`, trimmed, and empty entries are dropped. Nothing else is normalized:
//! `https://A.com` and `https://a.com/` are distinct from `https://a.com`.

use std::collections::BTreeSet;

/// Origins admitted whenever enforcement is enabled, unless overridden.
pub const BUILTIN_DEFAULT_ORIGINS: &[&str] = &["https://app.docsgpt.cloud", "https://ent.docsgpt.cloud"];

/// Iterate the trimmed, non-empty entries of a raw allow-list without allocating.
pub fn allowed_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// Compile a raw allow-list into a set.
pub fn parse_allowed_origins(raw: &str) -> AllowedOrigins {
    allowed_entries(raw).collect()
}

/// Compiled set of origins (ordered for stable logs and metrics).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedOrigins {
    set: BTreeSet<String>,
}

impl AllowedOrigins {
    pub fn contains(&self, origin: &str) -> bool {
        self.set.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.set.iter().map(String::as_str)
    }

    /// Effective allow-set: this list plus the given defaults.
    pub fn union(&self, defaults: &DefaultOrigins) -> AllowedOrigins {
        self.iter().chain(defaults.iter()).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedOrigins {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self { set: iter.into_iter().map(Into::into).collect() }
    }
}

/// Deployment-wide origins admitted regardless of per-agent lists.
///
/// Injected into [`crate::origin::OriginEvaluator`] at construction so tests
/// and self-hosted deployments can replace the built-in set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultOrigins {
    origins: AllowedOrigins,
}

impl DefaultOrigins {
    /// The hosted DocsGPT front-ends.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_DEFAULT_ORIGINS.iter().copied())
    }

    /// No defaults: only per-agent lists admit anything.
    pub fn none() -> Self {
        Self { origins: AllowedOrigins::default() }
    }

    /// Custom defaults. Entries are trimmed and empty ones dropped, same as agent lists.
    pub fn new<I, S>(origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let origins = origins
            .into_iter()
            .filter_map(|s| {
                let s = s.as_ref().trim();
                (!s.is_empty()).then(|| s.to_string())
            })
            .collect();
        Self { origins }
    }

    /// Builtin set extended with extra entries.
    pub fn builtin_with<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::new(BUILTIN_DEFAULT_ORIGINS.iter().map(|s| s.to_string()).chain(extra))
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.origins.contains(origin)
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.origins.iter()
    }
}

impl Default for DefaultOrigins {
    fn default() -> Self {
        Self::builtin()
    }
}
