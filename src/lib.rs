//! Staff Manager API Library
//!
//! This library provides the core functionality for the staff-management
//! API: the authentication/authorization substrate, domain state machines,
//! application services and their adapters.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
