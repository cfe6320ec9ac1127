//! Value objects - immutable types that represent domain concepts

mod id;
mod pagination;
mod violation;

pub use id::{Id, IdParseError};
pub use pagination::{total_pages, Page, PageRequest, PageRequestError, PageWindow};
pub use violation::{Field, Rule, Violation, Violations};
