//! Shared helpers for synscan integration tests.
#![allow(dead_code)]

pub mod source_fixtures;
pub mod token_helpers;
