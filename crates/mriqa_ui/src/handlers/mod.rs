//! Message handlers, grouped by concern.
//!
//! Each module adds handler methods to [`crate::app::App`]; the `update`
//! dispatch in `app.rs` routes messages here.

mod browse;
mod download;
mod submit;
