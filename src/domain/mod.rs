// src/domain/mod.rs
pub mod contact;
pub mod content;
pub mod errors;
pub mod user;
