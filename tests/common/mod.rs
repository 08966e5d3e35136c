//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests: an isolated config directory,
//! fake git working trees and services wired against them.

#![allow(dead_code)]

pub mod assertion_helpers;
pub mod test_fixtures;
