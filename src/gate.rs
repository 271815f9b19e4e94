//! The authorization gate applied before rendering a protected view.

use crate::session::{Role, Session};

/// True iff the session may render a view requiring `required`. A view with
/// no required role admits any authenticated session. Pure decision function:
/// the router performs the redirect when this returns false.
pub fn can_access(session: &Session, required: Option<Role>) -> bool {
    if !session.authenticated() {
        return false;
    }
    match required {
        None => true,
        Some(role) => session.role() == Some(role),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Identity;

    #[test]
    fn anonymous_is_denied_everything() {
        let s = Session::anonymous();
        assert!(!can_access(&s, None));
        for r in Role::ALL {
            assert!(!can_access(&s, Some(r)));
        }
    }

    #[test]
    fn authenticated_passes_roleless_views() {
        let s = Session::new(Identity::Civilian { civilian_id: "7".into() }, "asha");
        assert!(can_access(&s, None));
    }

    #[test]
    fn role_must_match_exactly() {
        let s = Session::new(Identity::Police { badge_id: "B123".into() }, "officer1");
        assert!(can_access(&s, Some(Role::Police)));
        assert!(!can_access(&s, Some(Role::Lawyer)));
        assert!(!can_access(&s, Some(Role::Civilian)));
    }
}
