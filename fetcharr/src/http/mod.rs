// HTTP handlers

pub mod auth;
pub mod error;
pub mod health;
pub mod request;
pub mod search;
