// Library for tests to access modules

pub mod camera_repo;
pub mod cli;
pub mod config;
pub mod error;
pub mod extremum_index;
pub mod models;
pub mod pipeline;
pub mod poller;
pub mod stats;
pub mod summarizer;
pub mod version;
