//! Session-local store, keyword pipeline and filter/pagination engine
//! behind the finance market daily insights view.

pub mod filter;
pub mod keywords;
pub mod links;
pub mod loader;
pub mod model;
pub mod speech;
pub mod store;
pub mod toggle;
