//! Authentication utilities

mod password;
mod session;

pub use password::{hash_password, verify_password};
pub use session::{SessionClaims, SessionService, SessionToken};
