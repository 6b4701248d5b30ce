//! `sundry-auth` — role-based authorization for product operations.
//!
//! This crate is intentionally decoupled from transport and storage: a
//! [`RoleDirectory`] maps an identifier (an email) to roles, roles to
//! permissions, and [`authorize`] is a pure policy check.

pub mod authorize;
pub mod directory;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{authorize, AuthzError};
pub use directory::RoleDirectory;
pub use permissions::Permission;
pub use principal::{Principal, PrincipalId};
pub use roles::Role;
