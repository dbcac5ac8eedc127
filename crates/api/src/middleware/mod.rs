//! Request extractors.
//!
//! - [`auth::MaybeAuthUser`] -- the caller's identity from an optional JWT
//!   Bearer token. A missing token is allowed; a bad one is rejected.

pub mod auth;
