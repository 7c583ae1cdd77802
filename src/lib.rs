//! Predictable state containers for two small front-end flows: a users
//! directory bootstrapped from a remote API and mirrored to device storage,
//! and a three-step profile wizard that commits an in-memory draft.

pub mod cli;
pub mod config;
pub mod logging;
pub mod navigation;
pub mod persistence;
pub mod profiles;
pub mod remote;
pub mod scope;
pub mod store;
pub mod users;
pub mod validation;
