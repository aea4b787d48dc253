pub mod rate_limit;
pub mod require_policy;

pub use rate_limit::public_write_rate_limit_layer;
pub use require_policy::require_policy;
