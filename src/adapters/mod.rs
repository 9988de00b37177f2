// Adapters layer: concrete implementations for external systems
// (filesystem storage, verification log, mail).

pub mod defect_log;
pub mod mailer;
pub mod storage;

pub use defect_log::{FileDefectLog, MemoryDefectLog};
pub use mailer::NoopMailer;
pub use storage::LocalStorage;
