//! Section title resolution.
//!
//! Known `(role, section)` pairs come from a static table; anything else
//! falls back to a humanized form of the slug so every slug produces some
//! title.

use crate::auth::Role;

const PATIENT_SECTIONS: &[(&str, &str)] = &[
    ("appointments", "Appointments"),
    ("records", "Medical Records"),
    ("messages", "Messages"),
    ("profile", "Profile"),
];

const DOCTOR_SECTIONS: &[(&str, &str)] = &[
    ("schedule", "My Schedule"),
    ("patients", "My Patients"),
    ("messages", "Messages"),
    ("profile", "Profile"),
];

const RECEPTIONIST_SECTIONS: &[(&str, &str)] = &[
    ("appointments", "All Appointments"),
    ("registration", "Patient Registration"),
    ("queue", "Queue Management"),
];

const LAB_SECTIONS: &[(&str, &str)] = &[
    ("requests", "Test Requests"),
    ("reports", "Lab Reports"),
    ("profile", "Profile"),
];

fn sections_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::Patient => PATIENT_SECTIONS,
        Role::Doctor => DOCTOR_SECTIONS,
        Role::Receptionist => RECEPTIONIST_SECTIONS,
        Role::LabTechnician => LAB_SECTIONS,
    }
}

pub fn is_known_section(role: Role, slug: &str) -> bool {
    sections_for(role).iter().any(|(key, _)| *key == slug)
}

/// Resolve the display title for a section. Unknown slugs get the fallback
/// derivation instead of an error.
pub fn section_title(role: Role, slug: &str) -> String {
    sections_for(role)
        .iter()
        .find(|(key, _)| *key == slug)
        .map(|(_, title)| (*title).to_string())
        .unwrap_or_else(|| fallback_title(slug))
}

/// Humanize a slug: split on hyphens, capitalize each word.
pub fn fallback_title(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_sections_use_the_table() {
        assert_eq!(section_title(Role::Doctor, "schedule"), "My Schedule");
        assert_eq!(
            section_title(Role::Receptionist, "registration"),
            "Patient Registration"
        );
        assert_eq!(section_title(Role::LabTechnician, "requests"), "Test Requests");
    }

    #[test]
    fn unknown_sections_fall_back_to_humanized_slug() {
        assert_eq!(
            section_title(Role::Doctor, "unmapped-section"),
            "Unmapped Section"
        );
        assert!(!is_known_section(Role::Doctor, "unmapped-section"));
    }

    #[test]
    fn fallback_never_fails() {
        assert_eq!(fallback_title("queue"), "Queue");
        assert_eq!(fallback_title("lab-test-results"), "Lab Test Results");
        assert_eq!(fallback_title(""), "");
        assert_eq!(fallback_title("--"), "");
    }
}
