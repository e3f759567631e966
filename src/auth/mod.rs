//! Session, roles, and the role-scoped access gate.
//!
//! Together these decide which dashboards an authenticated user can reach:
//! the role resolver validates the URL segment, the session store supplies
//! the current user, and [`authorize`] turns the pair into an access
//! decision. Mismatches redirect instead of dead-ending — an authenticated
//! user who wanders into another role's dashboard is sent to their own.

pub mod role;
pub mod session;

pub use role::Role;
pub use session::{SessionStore, User};

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// The user exists and their role is in the allowed set.
    Granted(User),
    /// No session — the caller must redirect to the public entry route.
    RedirectToEntry,
    /// A session exists but the role does not match — redirect to the
    /// user's own home route rather than showing an access-denied wall.
    RedirectToHome(Role),
}

/// Gate a role-scoped view: a user must exist and hold one of the allowed
/// roles. Anything else resolves to a redirect, never an error.
pub fn authorize(user: Option<&User>, allowed: &[Role]) -> Access {
    match user {
        None => Access::RedirectToEntry,
        Some(user) if allowed.contains(&user.role) => Access::Granted(user.clone()),
        Some(user) => Access::RedirectToHome(user.role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn user_with(role: Role) -> User {
        User {
            id: "usr-test".to_string(),
            name: role.default_display_name().to_string(),
            role,
            email: format!("{}@medicore.example", role.as_str()),
        }
    }

    #[test]
    fn missing_session_redirects_to_entry() {
        assert_eq!(authorize(None, &[Role::Patient]), Access::RedirectToEntry);
    }

    #[test]
    fn matching_role_is_granted() {
        let user = user_with(Role::Doctor);
        assert_eq!(
            authorize(Some(&user), &[Role::Doctor]),
            Access::Granted(user)
        );
    }

    #[test]
    fn mismatched_role_redirects_to_own_home() {
        let user = user_with(Role::Receptionist);
        assert_eq!(
            authorize(Some(&user), &[Role::Patient]),
            Access::RedirectToHome(Role::Receptionist)
        );
    }
}
