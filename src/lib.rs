mod catalog;
mod fetcher;
mod portal;
mod query;
mod school;
mod school_error;
mod text_manipulators;

pub mod config;
pub mod requests;

pub use catalog::{PageKind, Region, SchoolType};
pub use fetcher::Fetcher;
pub use portal::SchoolPortal;
pub use query::{DateQuery, MonthInput, QueryArgs, QueryOptions};
pub use school::{School, SchoolBuilder};
pub use school_error::{ConfigurationError, SchoolError};
pub use text_manipulators::{month_format, parse_month};
