use crate::core::dedup::dedup_companies;
use crate::core::report::{
    render_report, INVALID_COMPANIES_FILE, INVALID_USERS_FILE, OUTPUT_FILE,
};
use crate::core::topup::process_top_ups;
use crate::core::validator::partition_records;
use crate::core::{
    Company, ConfigProvider, Datasets, DefectLog, Mailer, Pipeline, Record, Storage,
    TransformResult, User,
};
use crate::domain::schema::{COMPANY_SCHEMA, USER_SCHEMA};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// The single-shot batch pipeline: read both JSON inputs, validate and
/// dedup, apply top-ups, write the report and the invalid-record files.
pub struct BatchPipeline<S: Storage, C: ConfigProvider, L: DefectLog, M: Mailer> {
    pub(crate) storage: S,
    pub(crate) config: C,
    pub(crate) defect_log: L,
    pub(crate) mailer: M,
}

impl<S: Storage, C: ConfigProvider, L: DefectLog, M: Mailer> BatchPipeline<S, C, L, M> {
    pub fn new(storage: S, config: C, defect_log: L, mailer: M) -> Self {
        Self {
            storage,
            config,
            defect_log,
            mailer,
        }
    }

    /// Read one input file as a JSON array of objects. Any failure here is
    /// fatal to the run: a missing file, unparsable JSON, or a shape other
    /// than an array of objects.
    fn read_records(&self, path: &str) -> Result<Vec<Record>> {
        let bytes = self.storage.read_file(path).map_err(|e| match e {
            EtlError::IoError(io) if io.kind() == ErrorKind::NotFound => EtlError::InputNotFound {
                path: path.to_string(),
            },
            other => other,
        })?;

        let value: Value = serde_json::from_slice(&bytes).map_err(|_| EtlError::InputParse {
            path: path.to_string(),
        })?;

        let items = match value {
            Value::Array(items) => items,
            _ => {
                return Err(EtlError::InputShape {
                    path: path.to_string(),
                })
            }
        };

        let mut records = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::Object(data) => records.push(Record { data }),
                _ => {
                    return Err(EtlError::InputShape {
                        path: path.to_string(),
                    })
                }
            }
        }

        Ok(records)
    }
}

impl<S: Storage, C: ConfigProvider, L: DefectLog, M: Mailer> Pipeline
    for BatchPipeline<S, C, L, M>
{
    fn extract(&self) -> Result<Datasets> {
        tracing::debug!("Reading companies from {}", self.config.companies_file());
        let companies = self.read_records(self.config.companies_file())?;

        tracing::debug!("Reading users from {}", self.config.users_file());
        let users = self.read_records(self.config.users_file())?;

        Ok(Datasets { companies, users })
    }

    fn transform(&self, data: Datasets) -> Result<TransformResult> {
        // Companies are fully settled (schema check, then dedup) before
        // any user is looked at, so defects hit the log in that order
        let (valid_companies, mut invalid_companies) =
            partition_records(data.companies, COMPANY_SCHEMA, "Company", &self.defect_log)?;

        // Bind schema-valid records to typed models; the raw record rides
        // along so a duplicate can still be emitted verbatim as invalid
        let mut bound_companies: Vec<(Company, Record)> =
            Vec::with_capacity(valid_companies.len());
        for record in valid_companies {
            let company: Company = record.bind()?;
            bound_companies.push((company, record));
        }

        let companies = dedup_companies(bound_companies, &mut invalid_companies, &self.defect_log)?;

        let (valid_users, invalid_users) =
            partition_records(data.users, USER_SCHEMA, "User", &self.defect_log)?;

        let mut users: Vec<User> = Vec::with_capacity(valid_users.len());
        for record in &valid_users {
            users.push(record.bind()?);
        }

        let summaries = process_top_ups(&companies, &mut users, &self.mailer);

        Ok(TransformResult {
            summaries,
            invalid_companies,
            invalid_users,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let report = render_report(&result.summaries);
        self.storage.write_file(OUTPUT_FILE, report.as_bytes())?;
        println!("output.txt generated successfully!");

        if !result.invalid_companies.is_empty() {
            println!("There are companies with bad format, generating a list of bad companies in invalid_companies.json");
            println!("Check verification_log.txt for details");
            let json = serde_json::to_string_pretty(&result.invalid_companies)?;
            self.storage
                .write_file(INVALID_COMPANIES_FILE, json.as_bytes())?;
        }

        if !result.invalid_users.is_empty() {
            println!("There are users with bad format, generating a list of bad users in invalid_users.json");
            println!("Check verification_log.txt for details");
            let json = serde_json::to_string_pretty(&result.invalid_users)?;
            self.storage
                .write_file(INVALID_USERS_FILE, json.as_bytes())?;
        }

        let output_path = Path::new(self.config.data_dir()).join(OUTPUT_FILE);
        Ok(output_path.display().to_string())
    }
}
