use crate::domain::model::Defect;
use crate::domain::ports::DefectLog;
use crate::utils::error::Result;
use chrono::Local;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const LOG_FILE: &str = "verification_log.txt";

/// Append-mode verification log. The file is opened, written, and closed
/// per defect, so repeated runs against the same directory interleave
/// cleanly and the log accumulates across invocations. Each defect is
/// also echoed (un-timestamped) to stdout.
#[derive(Debug, Clone)]
pub struct FileDefectLog {
    path: PathBuf,
}

impl FileDefectLog {
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            path: base_path.as_ref().join(LOG_FILE),
        }
    }
}

impl DefectLog for FileDefectLog {
    fn record(&self, defect: &Defect) -> Result<()> {
        let warning = defect.to_string();
        println!("{}", warning);

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "[{}] {}", timestamp, warning)?;
        Ok(())
    }
}

/// In-memory defect sink, used by tests.
#[derive(Debug, Default)]
pub struct MemoryDefectLog {
    defects: Mutex<Vec<Defect>>,
}

impl MemoryDefectLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defects(&self) -> Vec<Defect> {
        self.defects.lock().unwrap().clone()
    }
}

impl DefectLog for MemoryDefectLog {
    fn record(&self, defect: &Defect) -> Result<()> {
        self.defects.lock().unwrap().push(defect.clone());
        Ok(())
    }
}
