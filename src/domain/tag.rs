use semver::Version;

/// A git tag that names a stable release.
///
/// Constructed only from tag text matching the release pattern: one optional
/// ASCII letter marker, then exactly three dot-separated non-negative
/// integers (e.g. "v1.2.3", "r0.10.0", "1.2.3"). Pre-release or build
/// suffixes, missing or extra components, leading zeros and components
/// beyond the u64 range all fail to parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    /// Original tag text, unmodified
    pub name: String,
    /// Leading marker letter, if present
    pub marker: Option<char>,
    /// Parsed version triple; pre-release and build are empty by construction
    pub version: Version,
}

impl ReleaseTag {
    /// Parse a tag name against the release pattern.
    ///
    /// Accepts only the tag name itself, not a ref path; callers strip
    /// `refs/tags/` style prefixes first (see [`tag_name`]).
    ///
    /// Returns `None` for anything outside the pattern, including leading
    /// zeros ("v1.02.3") and components that overflow u64. Rejecting rather
    /// than silently wrapping keeps the ordering trustworthy.
    pub fn parse(name: &str) -> Option<Self> {
        let re =
            regex::Regex::new(r"^([A-Za-z])?(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)$").ok()?;

        let caps = re.captures(name)?;

        let marker = caps.get(1).and_then(|m| m.as_str().chars().next());
        let major = caps[2].parse::<u64>().ok()?;
        let minor = caps[3].parse::<u64>().ok()?;
        let patch = caps[4].parse::<u64>().ok()?;

        Some(ReleaseTag {
            name: name.to_string(),
            marker,
            version: Version::new(major, minor, patch),
        })
    }
}

impl std::fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Extract the tag name from a raw remote ref entry.
///
/// Remote listings report full ref paths ("refs/tags/v1.2.3"); only the
/// final path segment is the tag name. Entries without a path separator are
/// returned as-is. Peeled entries ("v1.2.3^{}") keep their suffix here and
/// drop out later at the release pattern.
pub fn tag_name(raw: &str) -> &str {
    raw.rsplit('/').next().unwrap_or(raw)
}
