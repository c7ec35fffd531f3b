//! Dotted version to comparable integer encoding
//!
//! A version `X.Y.Z` encodes to `X * 1_000_000 + Y * 1_000 + Z`, so encoded
//! values order the same way as the versions themselves as long as minor and
//! patch stay below 1000. Past that bound the encoding collides with other
//! versions (`1.1000.0` encodes like `2.0.0`); this is reported with a warning,
//! not rejected, so values stay comparable with ones produced elsewhere.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::config::SNAPSHOT_MARKER;
use crate::version::error::{MalformedReason, MalformedVersion};

const MAJOR_WEIGHT: u64 = 1_000_000;
const MINOR_WEIGHT: u64 = 1_000;

/// Largest minor or patch value the encoding keeps ordered
pub const COMPONENT_LIMIT: u64 = 999;

/// A three-component release version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

/// Integer form of a [`Version`], ordered as a plain integer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct ComparableVersion(u64);

/// Parse and encode a version string in one step.
///
/// Only the literal `-SNAPSHOT` marker is stripped; any other suffix such as
/// `-beta` is left in the last segment and rejected.
///
/// Examples:
/// - "1.4.2" -> 1004002
/// - "1.4.2-SNAPSHOT" -> 1004002
/// - "1.2" -> MalformedVersion
pub fn encode(raw: &str) -> Result<ComparableVersion, MalformedVersion> {
    Version::parse(raw)?
        .encode()
        .map_err(|err| MalformedVersion::new(raw, err.reason))
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse `<int>.<int>.<int>`, after removing every `-SNAPSHOT` marker.
    pub fn parse(raw: &str) -> Result<Self, MalformedVersion> {
        let stripped = raw.replace(SNAPSHOT_MARKER, "");
        let segments: Vec<&str> = stripped.split('.').collect();

        let [major, minor, patch] = segments.as_slice() else {
            return Err(MalformedVersion::new(
                raw,
                MalformedReason::SegmentCount(segments.len()),
            ));
        };

        Ok(Self {
            major: parse_segment(raw, major)?,
            minor: parse_segment(raw, minor)?,
            patch: parse_segment(raw, patch)?,
        })
    }

    /// Whether minor or patch is large enough to break ordering once encoded
    pub fn exceeds_encoding_bounds(&self) -> bool {
        self.minor > COMPONENT_LIMIT || self.patch > COMPONENT_LIMIT
    }

    pub fn encode(&self) -> Result<ComparableVersion, MalformedVersion> {
        if self.exceeds_encoding_bounds() {
            warn!(
                version = %self,
                "Minor or patch above {}; encoded value will not order correctly",
                COMPONENT_LIMIT
            );
        }

        self.major
            .checked_mul(MAJOR_WEIGHT)
            .and_then(|v| v.checked_add(self.minor.checked_mul(MINOR_WEIGHT)?))
            .and_then(|v| v.checked_add(self.patch))
            .map(ComparableVersion)
            .ok_or_else(|| MalformedVersion::new(&self.to_string(), MalformedReason::OutOfRange))
    }
}

fn parse_segment(raw: &str, segment: &str) -> Result<u64, MalformedVersion> {
    // u64::from_str accepts a leading '+', which is not a valid segment here
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MalformedVersion::new(
            raw,
            MalformedReason::InvalidSegment(segment.to_string()),
        ));
    }

    segment
        .parse::<u64>()
        .map_err(|_| MalformedVersion::new(raw, MalformedReason::OutOfRange))
}

impl FromStr for Version {
    type Err = MalformedVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl From<Version> for semver::Version {
    fn from(version: Version) -> Self {
        semver::Version::new(version.major, version.minor, version.patch)
    }
}

impl ComparableVersion {
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Split the integer back into components.
    ///
    /// Exact only for versions whose minor and patch were within bounds.
    pub const fn decode(self) -> Version {
        Version::new(
            self.0 / MAJOR_WEIGHT,
            (self.0 / MINOR_WEIGHT) % 1_000,
            self.0 % MINOR_WEIGHT,
        )
    }
}

impl From<u64> for ComparableVersion {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ComparableVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
