//! Identifier normalization.
//!
//! Parcel identifiers arrive in whatever shape the source system used:
//! dash-delimited (`012-345-678`), bare digits (`012345678`), padded with
//! whitespace, or occasionally something that is not a PID at all (a plan
//! number, a roll number). Resolution therefore tries a small set of
//! candidate forms derived here rather than a single verbatim string.

/// The candidate forms tried when resolving a user-supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCandidates {
    /// The input with surrounding whitespace removed.
    pub verbatim: String,
    /// Every non-digit stripped, leading zeros preserved. Falls back to
    /// `verbatim` when the input contains no digits.
    pub digits: String,
}

/// Derive the candidate forms for a raw identifier.
///
/// Total: always yields two strings (possibly identical), never fails.
pub fn candidates(raw: &str) -> IdCandidates {
    let verbatim = raw.trim().to_string();
    let digits: String = verbatim.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = if digits.is_empty() {
        verbatim.clone()
    } else {
        digits
    };
    IdCandidates { verbatim, digits }
}
