use crate::application::{authorization::Principal, dto::ProfileDto, ports::time::Clock};
use std::sync::Arc;

pub struct UserQueryService {
    clock: Arc<dyn Clock>,
}

impl UserQueryService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The principal is rebuilt from the token, so no lookup is needed.
    pub fn profile(&self, actor: &Principal) -> ProfileDto {
        ProfileDto::from_principal(actor, self.clock.now())
    }
}
