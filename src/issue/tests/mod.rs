//! Unit tests for the issue lifecycle core.

mod permission_tests;

pub mod support;
