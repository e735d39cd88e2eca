//! Common test utilities
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestDatabase, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let db = TestDatabase::new().await;
//!     let user = fixtures::create_user(db.db(), "alice", UserRole::Geologist).await;
//!     // ...
//! }
//! ```

pub mod database;
pub mod fixtures;

pub use database::TestDatabase;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
