//! Property test suite entry point.

mod derived_views_tests;
