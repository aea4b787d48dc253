// src/infrastructure/security/claims.rs
use crate::application::{
    authorization::{Claim, Principal, ROLE_CLAIM_TYPE},
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::user::{Role, UserId};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub fn parse_claims(facts: Vec<Fact>) -> ApplicationResult<Principal> {
    let ctx = ClaimsContext::from_facts(facts);
    build_principal(ctx)
}

fn build_principal(ctx: ClaimsContext) -> ApplicationResult<Principal> {
    let user_id = ctx
        .user_id
        .ok_or_else(|| ApplicationError::unauthorized("missing user id"))?;
    let username = ctx
        .username
        .ok_or_else(|| ApplicationError::unauthorized("missing username"))?;
    let role = ctx
        .role
        .ok_or_else(|| ApplicationError::unauthorized("missing role"))?;
    let issued_at = ctx
        .issued_at
        .ok_or_else(|| ApplicationError::unauthorized("missing issued_at"))?;
    let expires_at = ctx
        .expires_at
        .ok_or_else(|| ApplicationError::unauthorized("missing expires_at"))?;

    let user_id =
        UserId::new(user_id).map_err(|_| ApplicationError::unauthorized("invalid user id"))?;

    let mut claims = Vec::with_capacity(ctx.permissions.len() + 1);
    claims.push(Claim::new(ROLE_CLAIM_TYPE, role.as_str()));
    claims.extend(ctx.permissions.into_iter().map(Claim::permission));

    Ok(Principal {
        user_id,
        username,
        role,
        claims,
        issued_at: DateTime::<Utc>::from(issued_at),
        expires_at: DateTime::<Utc>::from(expires_at),
    })
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<i64>,
    username: Option<String>,
    role: Option<Role>,
    issued_at: Option<SystemTime>,
    expires_at: Option<SystemTime>,
    permissions: Vec<String>,
}

impl ClaimsContext {
    fn from_facts(facts: Vec<Fact>) -> Self {
        let mut ctx = Self::default();
        for fact in facts {
            ctx.apply_predicate(fact.predicate);
        }
        ctx.permissions.sort();
        ctx.permissions.dedup();
        ctx
    }

    fn apply_predicate(&mut self, predicate: Predicate) {
        match (predicate.name.as_str(), predicate.terms.as_slice()) {
            ("user", [Term::Integer(id), Term::Str(name)]) => {
                self.user_id = Some(*id);
                self.username = Some(name.clone());
            }
            ("role", [Term::Str(role)]) => {
                self.role = role.parse().ok();
            }
            ("issued_at", [Term::Date(seconds)]) => {
                self.issued_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("expires_at", [Term::Date(seconds)]) => {
                self.expires_at = Some(UNIX_EPOCH + Duration::from_secs(*seconds));
            }
            ("permission", [Term::Str(permission)]) => {
                self.permissions.push(permission.clone());
            }
            _ => {}
        }
    }
}
