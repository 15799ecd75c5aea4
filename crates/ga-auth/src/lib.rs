//! Authentication core for the game-account backend.
//!
//! Replaces a conventional user login with a bespoke client-credential
//! scheme: the client proves freshness by presenting values derived from
//! the current date and a random seed, and receives a signed access/refresh
//! token pair in exchange. Account registration, login, and profile
//! retrieval ride on top of the bearer tokens this crate issues.
//!
//! ## Credential Scheme
//!
//! - [`credentials`] — Expected username/password derivation
//! - [`Protocol`] — Token obtain/refresh state machine
//!
//! ## Tokens
//!
//! - [`Crypto`] — JWT signing and verification
//! - [`Claims`] — JWT payload structure
//! - [`Identity`] — Authenticated request-scoped identity
//!
//! ## Accounts
//!
//! - [`GameAccount`] — Player account with gaming profile
//! - [`password`] — Argon2 hashing and verification
mod authenticate;
mod claims;
mod clock;
pub mod credentials;
mod crypto;
mod dto;
mod error;
mod identity;
pub mod password;
mod protocol;

pub use authenticate::*;
pub use claims::*;
pub use clock::*;
pub use crypto::*;
pub use dto::*;
pub use error::*;
pub use identity::*;
pub use protocol::*;

mod account;
pub use account::*;

#[cfg(feature = "database")]
mod repository;
#[cfg(feature = "database")]
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
