// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod contact;
pub mod content;
pub mod dashboard;
