// Infrastructure module - File store, configuration files, logging
pub mod config;
pub mod logging;
pub mod storage;
