use crate::workflow::config::{OutputFormat, WorkflowConfig};
use anyhow::Context;
use std::fs::File;
use std::io::BufReader;
use trackcore::export::{export_csv, export_kml};
use trackcore::ingest::CsvPointReader;
use trackcore::processing::clean_track;
use trackcore::telemetry::FilterStats;

#[derive(Debug)]
pub struct WorkflowResult {
    pub written: usize,
    pub speed: FilterStats,
    pub noise: FilterStats,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let input = File::open(&self.config.input)
            .with_context(|| format!("opening input file {}", self.config.input.display()))?;
        let output = File::create(&self.config.output)
            .with_context(|| format!("opening output file {}", self.config.output.display()))?;

        let mut chain = clean_track(CsvPointReader::new(BufReader::new(input)), &self.config.filter);
        let written = match self.config.format {
            OutputFormat::Csv => export_csv(&mut chain, output),
            OutputFormat::Kml => export_kml(&mut chain, output),
        }
        .with_context(|| format!("exporting to {}", self.config.output.display()))?;

        Ok(WorkflowResult {
            written,
            speed: chain.get_ref().stats(),
            noise: chain.stats(),
        })
    }
}
