mod memory_cache;
mod redis_cache;

pub use memory_cache::InMemoryCacheStore;
pub use redis_cache::RedisCacheStore;
