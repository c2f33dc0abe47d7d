//! Axum extractors for request handling
//!
//! Custom extractors for the view selection header, validated JSON bodies,
//! query strings, and numeric path IDs.

mod path;
mod query;
mod validated;
mod view;

pub use path::UserIdPath;
pub use query::QueryParams;
pub use validated::ValidatedJson;
pub use view::{PublicView, XPublic};
