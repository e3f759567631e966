//! Role resolution.
//!
//! Maps URL role segments to the canonical role enum. Unknown slugs resolve
//! to `None` so callers can render a fallback panel instead of failing the
//! request.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Patient,
    Doctor,
    Receptionist,
    LabTechnician,
}

pub const ALL_ROLES: [Role; 4] = [
    Role::Patient,
    Role::Doctor,
    Role::Receptionist,
    Role::LabTechnician,
];

impl Role {
    /// Resolve a URL segment to a role. `lab` is an accepted alias for the
    /// lab technician dashboard; anything unrecognized is `None`.
    pub fn from_slug(slug: &str) -> Option<Role> {
        match slug {
            "patient" => Some(Role::Patient),
            "doctor" => Some(Role::Doctor),
            "receptionist" => Some(Role::Receptionist),
            "lab" | "lab_technician" => Some(Role::LabTechnician),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Patient => "patient",
            Role::Doctor => "doctor",
            Role::Receptionist => "receptionist",
            Role::LabTechnician => "lab_technician",
        }
    }

    /// The route a freshly logged-in user of this role lands on. The lab
    /// technician dashboard lives under the short `/lab` path.
    pub fn home_route(self) -> &'static str {
        match self {
            Role::Patient => "/patient",
            Role::Doctor => "/doctor",
            Role::Receptionist => "/receptionist",
            Role::LabTechnician => "/lab",
        }
    }

    /// Display name synthesized for mock logins.
    pub fn default_display_name(self) -> &'static str {
        match self {
            Role::Patient => "John Doe",
            Role::Doctor => "Dr. Sarah Smith",
            Role::Receptionist => "Emily Rose",
            Role::LabTechnician => "Tech. Mike",
        }
    }

    pub fn dashboard_title(self) -> &'static str {
        match self {
            Role::Patient => "Patient Dashboard",
            Role::Doctor => "Doctor Dashboard",
            Role::Receptionist => "Receptionist Dashboard",
            Role::LabTechnician => "Laboratory Dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolves_canonical_slugs() {
        assert_eq!(Role::from_slug("patient"), Some(Role::Patient));
        assert_eq!(Role::from_slug("doctor"), Some(Role::Doctor));
        assert_eq!(Role::from_slug("receptionist"), Some(Role::Receptionist));
        assert_eq!(Role::from_slug("lab_technician"), Some(Role::LabTechnician));
    }

    #[test]
    fn lab_alias_matches_lab_technician() {
        assert_eq!(Role::from_slug("lab"), Role::from_slug("lab_technician"));
    }

    #[test]
    fn unknown_slugs_resolve_to_none() {
        assert_eq!(Role::from_slug("unknown"), None);
        assert_eq!(Role::from_slug(""), None);
        assert_eq!(Role::from_slug("Patient"), None);
    }

    #[test]
    fn lab_technician_home_route_uses_short_path() {
        assert_eq!(Role::LabTechnician.home_route(), "/lab");
        assert_eq!(Role::Doctor.home_route(), "/doctor");
    }

    #[test]
    fn serializes_to_wire_spelling() {
        let json = serde_json::to_string(&Role::LabTechnician).unwrap();
        assert_eq!(json, "\"lab_technician\"");
    }
}
