//! Integration tests
//!
//! Components exercised together against an in-memory database.

mod guard_tests;
mod http_tests;
mod import_tests;
mod rbac_tests;
mod storage_tests;
