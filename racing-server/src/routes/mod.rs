//! HTTP route handlers

pub mod plays;
pub mod status;
