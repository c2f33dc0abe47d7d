//! Domain entities - core business objects

mod user;

pub use user::{User, STATUS_ACTIVE};
