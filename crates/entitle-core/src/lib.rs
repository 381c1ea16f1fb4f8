//! Entitle Core — directory user model and attribute normalization.
//!
//! This crate has no internal dependencies. It turns the loosely-typed
//! attribute bags returned by the identity provider into fixed,
//! application-ready user records.
//!
//! # Modules
//!
//! - [`user`]: Raw directory entries and normalized users
//! - [`normalize`]: Attribute validation, coercion and entitlement resolution

pub mod normalize;
pub mod user;

mod proptests;

pub use normalize::{REQUIRED_ATTRIBUTES, normalize, parse_bool_or_default, parse_int_or_default};
pub use user::{NormalizedUser, RawDirectoryEntry};
