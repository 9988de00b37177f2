pub mod dedup;
pub mod etl;
pub mod report;
pub mod topup;
pub mod validator;

pub use crate::domain::model::{
    Company, CompanySummary, Datasets, Defect, Record, TransformResult, User, UserTopUp,
};
pub use crate::domain::ports::{ConfigProvider, DefectLog, Mailer, Pipeline, Storage};
pub use crate::utils::error::Result;
