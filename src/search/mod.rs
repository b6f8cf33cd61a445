//! Search layer: page/sort vocabulary and the criteria-driven service.

mod page;
mod service;

pub use page::{Direction, Page, PageRequest, SortSpec};
pub use service::SearchService;

pub(crate) use page::compute_slice_window;
