//! Records shared by the loader, the search filter and the interface.

mod company;
mod row_key;

pub use company::Company;
pub use row_key::{RowKey, row_keys};
