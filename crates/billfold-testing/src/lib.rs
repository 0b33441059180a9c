//! Test doubles and fixtures for the billfold crates.
//!
//! [`MockStore`] is the injectable in-memory double of the store capability:
//! seed it with bills, or force any of its three operations to reject with a
//! chosen message and assert what the client renders.

pub mod fixtures;
mod store;

pub use store::MockStore;
