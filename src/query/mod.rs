//! Translation of view state into data-fetching parameters.

mod compiler;
mod request;

pub use compiler::{FieldRemap, OrderBy, SortQueryCompiler};
pub use request::ListRequest;
