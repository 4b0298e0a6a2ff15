//! Async HTTP lookup of module licenses.
//!
//! [`deps_dev::fetch_license`] returns `Ok(Some(license))` when the registry
//! knows the license, `Ok(None)` when the module is unknown (404) or has no
//! license data, and `Err` on network failures, any other non-success status,
//! or an undecodable body.

pub mod deps_dev;
