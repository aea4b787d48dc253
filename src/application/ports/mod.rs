// src/application/ports/mod.rs
pub mod cache;
pub mod security;
pub mod time;
pub mod util;

