//! License naming helpers.
//!
//! - [`spdx`] — full names for common SPDX identifiers and normalization of
//!   common non-SPDX spellings.

pub mod spdx;
