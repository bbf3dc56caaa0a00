//! Storage abstractions for the service layer
//!
//! Contains the reusable file-backed list store that both the user
//! directory and the catalog persist through.

pub mod json_list_store;
