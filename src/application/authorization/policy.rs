// src/application/authorization/policy.rs
use std::collections::HashMap;

use super::principal::{PERMISSION_CLAIM_TYPE, Principal, ROLE_CLAIM_TYPE};

/// Policy names with this prefix are synthesized on demand.
pub const PERMISSION_POLICY_PREFIX: &str = "Permissions.";

pub const AUTHENTICATED_POLICY: &str = "Authenticated";
pub const ADMIN_ONLY_POLICY: &str = "AdminOnly";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyRequirement {
    AuthenticatedUser,
    /// Satisfied by a claim of `claim_type` whose value is one of `allowed_values`.
    Claim {
        claim_type: String,
        allowed_values: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyDecision {
    Allowed,
    Unauthenticated,
    Forbidden,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationPolicy {
    name: String,
    requirements: Vec<PolicyRequirement>,
}

impl AuthorizationPolicy {
    pub fn new(name: impl Into<String>, requirements: Vec<PolicyRequirement>) -> Self {
        Self {
            name: name.into(),
            requirements,
        }
    }

    /// Policy requiring an authenticated principal holding permission `name`.
    pub fn for_permission(name: &str) -> Self {
        Self::new(
            name,
            vec![
                PolicyRequirement::AuthenticatedUser,
                PolicyRequirement::Claim {
                    claim_type: PERMISSION_CLAIM_TYPE.to_string(),
                    allowed_values: vec![name.to_string()],
                },
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn requirements(&self) -> &[PolicyRequirement] {
        &self.requirements
    }

    pub fn evaluate(&self, principal: Option<&Principal>) -> PolicyDecision {
        let mut decision = PolicyDecision::Allowed;
        for requirement in &self.requirements {
            let satisfied = match (requirement, principal) {
                (_, None) => {
                    return PolicyDecision::Unauthenticated;
                }
                (PolicyRequirement::AuthenticatedUser, Some(_)) => true,
                (
                    PolicyRequirement::Claim {
                        claim_type,
                        allowed_values,
                    },
                    Some(principal),
                ) => allowed_values
                    .iter()
                    .any(|value| principal.has_claim(claim_type, value)),
            };
            if !satisfied {
                decision = PolicyDecision::Forbidden;
            }
        }
        decision
    }
}

/// Named policies registered at startup.
#[derive(Debug, Clone, Default)]
pub struct PolicyRegistry {
    policies: HashMap<String, AuthorizationPolicy>,
}

impl PolicyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(AuthorizationPolicy::new(
            AUTHENTICATED_POLICY,
            vec![PolicyRequirement::AuthenticatedUser],
        ));
        registry.register(AuthorizationPolicy::new(
            ADMIN_ONLY_POLICY,
            vec![
                PolicyRequirement::AuthenticatedUser,
                PolicyRequirement::Claim {
                    claim_type: ROLE_CLAIM_TYPE.to_string(),
                    allowed_values: vec!["admin".to_string()],
                },
            ],
        ));
        registry
    }

    pub fn register(&mut self, policy: AuthorizationPolicy) {
        self.policies.insert(policy.name.clone(), policy);
    }

    pub fn get(&self, name: &str) -> Option<&AuthorizationPolicy> {
        self.policies.get(name)
    }
}

/// Resolves a policy name: registered policies win, `Permissions.*` names get
/// a synthesized permission policy, anything else is unknown. Resolution never
/// mutates the registry.
#[derive(Debug, Clone, Default)]
pub struct PermissionPolicyProvider {
    registry: PolicyRegistry,
}

impl PermissionPolicyProvider {
    pub const fn new(registry: PolicyRegistry) -> Self {
        Self { registry }
    }

    pub fn resolve(&self, name: &str) -> Option<AuthorizationPolicy> {
        if let Some(policy) = self.registry.get(name) {
            return Some(policy.clone());
        }

        match name.strip_prefix(PERMISSION_POLICY_PREFIX) {
            Some(rest) if !rest.is_empty() => Some(AuthorizationPolicy::for_permission(name)),
            _ => None,
        }
    }
}
