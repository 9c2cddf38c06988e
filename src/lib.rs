pub mod catalog;
pub mod config;
pub mod fire;
pub mod gateway;
pub mod permalink;
pub mod store;

pub use store::{SharedStore, Store};
