// src/application/authorization/mod.rs
pub mod gate;
pub mod policy;
pub mod principal;

pub use gate::PermissionGate;
pub use policy::{
    AuthorizationPolicy, PERMISSION_POLICY_PREFIX, PermissionPolicyProvider, PolicyDecision,
    PolicyRegistry, PolicyRequirement,
};
pub use principal::{Claim, PERMISSION_CLAIM_TYPE, Principal, ROLE_CLAIM_TYPE};

use crate::application::error::{ApplicationError, ApplicationResult};

/// Command-side permission check, independent of the HTTP interceptor.
pub fn ensure_permission(actor: &Principal, permission: &str) -> ApplicationResult<()> {
    if actor.has_permission(permission) {
        Ok(())
    } else {
        Err(ApplicationError::forbidden(format!(
            "missing permission {permission}"
        )))
    }
}
