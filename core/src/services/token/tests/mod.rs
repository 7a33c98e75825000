//! Unit tests for the token service

mod validation_tests;
