//! Fundamental enumerations and identifier newtypes.
//!
//! This module defines the fixed vocabularies of the message log:
//! - [`Section`]: the functional-area tag a message is routed to
//! - [`Status`]: the three-value workflow state
//! - [`Role`]: an authenticated identity's permission class
//!
//! and the two identifier newtypes:
//! - [`RowUid`]: stable surrogate identity, assigned once at append
//! - [`Version`]: per-row optimistic-concurrency token

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Functional-area tag a message is routed to.
///
/// Sections are a fixed enumeration; there is no per-section scoping of
/// permissions. A section is distinct from a [`Role`], even though the staff
/// sections S1..S7 appear in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    /// Personnel
    S1,
    /// Intelligence
    S2,
    /// Operations
    S3,
    /// Logistics
    S4,
    /// Plans
    S5,
    /// Communications
    S6,
    /// Training
    S7,
    /// Headquarters
    Hq,
}

impl Section {
    /// All sections, in display order.
    pub const ALL: [Section; 8] = [
        Section::S1,
        Section::S2,
        Section::S3,
        Section::S4,
        Section::S5,
        Section::S6,
        Section::S7,
        Section::Hq,
    ];

    /// The section's cell representation in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::S1 => "S1",
            Section::S2 => "S2",
            Section::S3 => "S3",
            Section::S4 => "S4",
            Section::S5 => "S5",
            Section::S6 => "S6",
            Section::S7 => "S7",
            Section::Hq => "HQ",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S1" => Ok(Section::S1),
            "S2" => Ok(Section::S2),
            "S3" => Ok(Section::S3),
            "S4" => Ok(Section::S4),
            "S5" => Ok(Section::S5),
            "S6" => Ok(Section::S6),
            "S7" => Ok(Section::S7),
            "HQ" => Ok(Section::Hq),
            other => Err(DecodeError::UnknownSection(other.to_string())),
        }
    }
}

/// Workflow state of a message.
///
/// Transitions are free: any authenticated role may set any value at any
/// time. There is no enforced state machine beyond the enumeration itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Newly appended, awaiting action. The default.
    #[default]
    Logged,
    /// Someone is working the message.
    ActionOngoing,
    /// Resolved.
    Completed,
}

impl Status {
    /// All statuses, in workflow order.
    pub const ALL: [Status; 3] = [Status::Logged, Status::ActionOngoing, Status::Completed];

    /// The status cell representation in the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Logged => "Logged",
            Status::ActionOngoing => "Action Ongoing",
            Status::Completed => "Completed",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Logged" => Ok(Status::Logged),
            "Action Ongoing" => Ok(Status::ActionOngoing),
            "Completed" => Ok(Status::Completed),
            other => Err(DecodeError::UnknownStatus(other.to_string())),
        }
    }
}

/// An authenticated identity's permission class.
///
/// Distinct from [`Section`]: a role is who you logged in as, a section is
/// where a message is routed. The trust model is flat; rank naming carries no
/// hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// System administrator; the only role that may upload messages.
    Admin,
    /// Battalion commander.
    Commander,
    /// Executive officer.
    ExO,
    /// Personnel section.
    S1,
    /// Intelligence section.
    S2,
    /// Operations section.
    S3,
    /// Logistics section.
    S4,
    /// Plans section.
    S5,
    /// Communications section.
    S6,
    /// Training section.
    S7,
    /// Headquarters.
    Hq,
}

impl Role {
    /// All roles.
    pub const ALL: [Role; 11] = [
        Role::Admin,
        Role::Commander,
        Role::ExO,
        Role::S1,
        Role::S2,
        Role::S3,
        Role::S4,
        Role::S5,
        Role::S6,
        Role::S7,
        Role::Hq,
    ];

    /// The role's display name, as used in comment author tags and export
    /// filenames.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Commander => "Commander",
            Role::ExO => "EX-O",
            Role::S1 => "S1",
            Role::S2 => "S2",
            Role::S3 => "S3",
            Role::S4 => "S4",
            Role::S5 => "S5",
            Role::S6 => "S6",
            Role::S7 => "S7",
            Role::Hq => "HQ",
        }
    }

    /// Whether this role belongs to the full-control set permitted to edit
    /// comments, delete messages, and export the log.
    pub fn is_full_control(&self) -> bool {
        matches!(self, Role::Admin | Role::Commander | Role::ExO | Role::S6)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Commander" => Ok(Role::Commander),
            "EX-O" => Ok(Role::ExO),
            "S1" => Ok(Role::S1),
            "S2" => Ok(Role::S2),
            "S3" => Ok(Role::S3),
            "S4" => Ok(Role::S4),
            "S5" => Ok(Role::S5),
            "S6" => Ok(Role::S6),
            "S7" => Ok(Role::S7),
            "HQ" => Ok(Role::Hq),
            other => Err(DecodeError::UnknownRole(other.to_string())),
        }
    }
}

/// Stable surrogate identifier for a stored row.
///
/// Assigned by the store at append, monotonically increasing, never reused.
/// Unlike a positional message id, a `RowUid` survives deletions of earlier
/// rows; the repository's position-lookup layer resolves it back to the
/// current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RowUid(u64);

impl RowUid {
    /// Wrap a raw uid value.
    pub fn new(raw: u64) -> Self {
        RowUid(raw)
    }

    /// The raw uid value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-row optimistic-concurrency token.
///
/// Bumped by the store on every cell write to the row. A checked write that
/// presents a stale version fails with a retryable conflict instead of
/// silently overwriting a concurrent update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version(u64);

impl Version {
    /// The version every row starts at.
    pub fn initial() -> Self {
        Version(1)
    }

    /// Wrap a raw version value.
    pub fn new(raw: u64) -> Self {
        Version(raw)
    }

    /// The raw version value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The version after one more write.
    pub fn next(&self) -> Self {
        Version(self.0 + 1)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Section Tests =====

    #[test]
    fn section_roundtrips_through_str() {
        for section in Section::ALL {
            let parsed: Section = section.as_str().parse().unwrap();
            assert_eq!(parsed, section, "section should roundtrip through its cell form");
        }
    }

    #[test]
    fn section_rejects_unknown_text() {
        let err = "S9".parse::<Section>().unwrap_err();
        assert!(matches!(err, DecodeError::UnknownSection(_)));
    }

    #[test]
    fn section_parse_is_case_sensitive() {
        assert!("hq".parse::<Section>().is_err(), "cell values are exact, not normalized");
    }

    // ===== Status Tests =====

    #[test]
    fn status_default_is_logged() {
        assert_eq!(Status::default(), Status::Logged);
    }

    #[test]
    fn status_roundtrips_through_str() {
        for status in Status::ALL {
            let parsed: Status = status.as_str().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn status_display_uses_spaced_form() {
        assert_eq!(Status::ActionOngoing.to_string(), "Action Ongoing");
    }

    // ===== Role Tests =====

    #[test]
    fn role_roundtrips_through_str() {
        for role in Role::ALL {
            let parsed: Role = role.as_str().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn full_control_set_is_exact() {
        let full: Vec<Role> = Role::ALL.iter().copied().filter(Role::is_full_control).collect();
        assert_eq!(full, vec![Role::Admin, Role::Commander, Role::ExO, Role::S6]);
    }

    #[test]
    fn exo_display_uses_hyphenated_form() {
        assert_eq!(Role::ExO.to_string(), "EX-O");
    }

    // ===== Identifier Tests =====

    #[test]
    fn row_uid_orders_by_allocation() {
        assert!(RowUid::new(1) < RowUid::new(2));
    }

    #[test]
    fn version_next_increments() {
        let v = Version::initial();
        assert_eq!(v.next().as_u64(), v.as_u64() + 1);
    }

    #[test]
    fn types_roundtrip_through_json() {
        let json = serde_json::to_string(&Section::S3).unwrap();
        let back: Section = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Section::S3);

        let json = serde_json::to_string(&Version::new(7)).unwrap();
        let back: Version = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Version::new(7));
    }
}
