//! Integration tests for command-guard

mod guard_tests;
