pub mod config;
pub mod logging;

pub mod checksum;
pub mod dedup;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod storage;
pub mod url_model;
