//! Social profile URL smoke tests.

/// Platforms a profile can be linked from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    Linkedin,
    Instagram,
}

impl Platform {
    /// Base profile URL a pasted link must start with.
    pub fn profile_prefix(self) -> &'static str {
        match self {
            Platform::Linkedin => "https://www.linkedin.com/in/",
            Platform::Instagram => "https://www.instagram.com/",
        }
    }
}

/// Passes iff the URL starts with the platform's profile prefix and a
/// non-empty handle follows it. Deliberately a smoke test, not a URL parser.
pub fn validate_social_url(url: &str, platform: Platform) -> bool {
    let prefix = platform.profile_prefix();
    url.starts_with(prefix) && url.len() > prefix.len()
}
