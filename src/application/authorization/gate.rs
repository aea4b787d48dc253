// src/application/authorization/gate.rs
use super::principal::Principal;

/// Hides UI output the current principal has no permission for. Display only:
/// access is enforced by the request interceptor and the command services.
#[derive(Debug, Clone, Copy)]
pub struct PermissionGate<'a> {
    principal: Option<&'a Principal>,
}

impl<'a> PermissionGate<'a> {
    pub const fn new(principal: Option<&'a Principal>) -> Self {
        Self { principal }
    }

    pub fn allows(&self, permission: &str) -> bool {
        self.principal
            .is_some_and(|principal| principal.has_permission(permission))
    }

    /// `Some(content())` when allowed; `content` is not evaluated otherwise.
    pub fn render<T>(&self, permission: &str, content: impl FnOnce() -> T) -> Option<T> {
        self.allows(permission).then(content)
    }

    pub fn render_fragment(&self, permission: &str, fragment: &str) -> String {
        self.render(permission, || fragment.to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::authorization::principal::{Claim, ROLE_CLAIM_TYPE};
    use crate::domain::user::{Role, UserId};
    use chrono::Utc;

    fn principal(claims: Vec<Claim>) -> Principal {
        Principal {
            user_id: UserId(2),
            username: "sam".into(),
            role: Role::Viewer,
            claims,
            issued_at: Utc::now(),
            expires_at: Utc::now(),
        }
    }

    #[test]
    fn anonymous_sees_nothing() {
        let gate = PermissionGate::new(None);
        assert_eq!(gate.render_fragment("Permissions.Content.Edit", "<a>Edit</a>"), "");
    }

    #[test]
    fn missing_claim_hides_fragment() {
        let p = principal(vec![Claim::permission("Permissions.Content.View")]);
        let gate = PermissionGate::new(Some(&p));
        assert_eq!(gate.render_fragment("Permissions.Content.Edit", "<a>Edit</a>"), "");
    }

    #[test]
    fn matching_claim_renders_fragment() {
        let p = principal(vec![Claim::permission("Permissions.Content.Edit")]);
        let gate = PermissionGate::new(Some(&p));
        assert_eq!(
            gate.render_fragment("Permissions.Content.Edit", "<a>Edit</a>"),
            "<a>Edit</a>"
        );
    }

    #[test]
    fn claim_of_other_type_does_not_count() {
        let p = principal(vec![Claim::new(ROLE_CLAIM_TYPE, "Permissions.Content.Edit")]);
        let gate = PermissionGate::new(Some(&p));
        assert!(!gate.allows("Permissions.Content.Edit"));
    }

    #[test]
    fn hidden_content_is_not_built() {
        let gate = PermissionGate::new(None);
        let rendered = gate.render("Permissions.Dashboard.View", || -> u32 {
            panic!("must not render")
        });
        assert!(rendered.is_none());
    }
}
