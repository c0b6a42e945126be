//! Text helpers used when saving and rendering articles.
//!
//! Everything in here is a pure function of its arguments: no I/O, no
//! shared state, safe to call from any number of threads.

pub mod filters;
pub mod reading_time;
pub mod slug;
pub mod summary;
pub mod truncate;

pub use filters::{FilterFn, FilterRegistry};
pub use reading_time::{reading_minutes, reading_time};
pub use slug::{derive_slug, is_valid_slug};
pub use summary::extract_summary;
pub use truncate::{truncate_html, truncate_html_words};
