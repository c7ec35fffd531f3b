use thiserror::Error;

/// Why a version string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// The string did not split into exactly three dot-separated segments
    SegmentCount(usize),
    /// A segment was empty, signed, or contained non-digit characters
    InvalidSegment(String),
    /// A segment or the encoded result does not fit in 64 bits
    OutOfRange,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::SegmentCount(n) => write!(f, "expected 3 segments, found {n}"),
            MalformedReason::InvalidSegment(segment) => {
                write!(f, "segment {segment:?} is not a non-negative integer")
            }
            MalformedReason::OutOfRange => f.write_str("value out of range"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Malformed version {input:?}: {reason}")]
pub struct MalformedVersion {
    pub input: String,
    pub reason: MalformedReason,
}

impl MalformedVersion {
    pub(crate) fn new(input: &str, reason: MalformedReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}
