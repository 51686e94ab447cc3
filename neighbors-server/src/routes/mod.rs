//! HTTP route handlers

pub mod bot;
pub mod status;
