#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod filter;
pub mod model;
pub mod time;

pub use error::Error;
pub use time::Clock;
