//! Service layer providing the business operations on top of models.
//! - Record Store: generic JSON-file-backed list persistence.
//! - Credential Service: password strength/breach checks, bcrypt hash/verify.
//! - User Directory: registration and login atop the Record Store.
//! - Catalog Service: product listing/creation and image attachment.

pub mod catalog;
pub mod credential;
pub mod errors;
pub mod runtime;
pub mod storage;
pub mod users;
