use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        println!("Starting top-up process...");

        // Extract
        println!("Loading input data...");
        let datasets = self.pipeline.extract()?;
        println!(
            "Loaded {} companies and {} users",
            datasets.companies.len(),
            datasets.users.len()
        );

        // Transform
        println!("Validating and processing top-ups...");
        let result = self.pipeline.transform(datasets)?;
        println!("Prepared {} company summaries", result.summaries.len());

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(result)?;
        println!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
