use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "topup-etl")]
#[command(about = "Batch token top-up over companies.json and users.json")]
pub struct CliConfig {
    #[arg(long, default_value = "companies.json")]
    pub companies_file: String,

    #[arg(long, default_value = "users.json")]
    pub users_file: String,

    /// Directory holding the input files; outputs and the verification
    /// log are written here too
    #[arg(long, default_value = ".")]
    pub data_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn companies_file(&self) -> &str {
        &self.companies_file
    }

    fn users_file(&self) -> &str {
        &self.users_file
    }

    fn data_dir(&self) -> &str {
        &self.data_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("companies_file", &self.companies_file)?;
        validate_non_empty_string("users_file", &self.users_file)?;
        validate_path("companies_file", &self.companies_file)?;
        validate_path("users_file", &self.users_file)?;
        validate_path("data_dir", &self.data_dir)?;
        validate_file_extensions(
            "input_files",
            &[self.companies_file.clone(), self.users_file.clone()],
            &["json"],
        )?;
        Ok(())
    }
}
