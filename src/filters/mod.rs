//! Filtering and sorting of the loaded collection

pub mod options;
pub mod pipeline;

pub use options::{Category, FilterOptions};
pub use pipeline::{filter_and_sort, PostedSort, TitleSort, ViewQuery};
