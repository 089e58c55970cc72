pub mod cache;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod output;
pub mod pipeline;
pub mod source;
pub mod table;
