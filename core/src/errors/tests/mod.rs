//! Error type tests
