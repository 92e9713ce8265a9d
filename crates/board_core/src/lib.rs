pub mod error;
pub mod model;
pub mod prefs;
pub mod query;
pub mod storage;
pub mod store;
pub mod view;
