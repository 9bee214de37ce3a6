//! Operational status of a network asset.

use core::fmt;

/// Normalized status label of a node or pipe.
///
/// Always lowercase. Built only through [`Status::normalize`], so an absent
/// or empty source label becomes [`Status::UNKNOWN`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", from = "Option<String>")
)]
pub struct Status(String);

impl Status {
    pub const NORMAL: &'static str = "normal";
    pub const FAULTY: &'static str = "faulty";
    pub const UNKNOWN: &'static str = "unknown";

    /// Normalize a raw status label taken from feature properties.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw {
            Some(label) if !label.is_empty() => Self(label.to_lowercase()),
            _ => Self::unknown(),
        }
    }

    pub fn unknown() -> Self {
        Self(Self::UNKNOWN.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_normal(&self) -> bool {
        self.0 == Self::NORMAL
    }

    pub fn is_faulty(&self) -> bool {
        self.0 == Self::FAULTY
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == Self::UNKNOWN
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.0
    }
}

impl From<Option<String>> for Status {
    fn from(raw: Option<String>) -> Self {
        Self::normalize(raw.as_deref())
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Self::normalize(Some(raw))
    }
}
