use crate::domain::model::{Datasets, Defect, TransformResult, User};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn companies_file(&self) -> &str;
    fn users_file(&self) -> &str;
    fn data_dir(&self) -> &str;
}

/// Sink for validation defects. Implementations decide where a defect
/// ends up (append-mode log file, memory, ...); callers only emit.
pub trait DefectLog: Send + Sync {
    fn record(&self, defect: &Defect) -> Result<()>;
}

/// Outbound email collaborator. The batch report only needs the
/// emailed / not-emailed split, so production wires a no-op.
pub trait Mailer: Send + Sync {
    fn send_top_up_email(&self, user: &User);
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Datasets>;
    fn transform(&self, data: Datasets) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
