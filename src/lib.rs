pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{FileDefectLog, LocalStorage, MemoryDefectLog, NoopMailer};
pub use crate::app::pipelines::BatchPipeline;
pub use crate::config::CliConfig;
pub use crate::core::etl::EtlEngine;
pub use crate::utils::error::{EtlError, Result};
