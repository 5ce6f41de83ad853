use anyhow::{bail, Context};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use trackcore::FilterConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Kml,
}

impl OutputFormat {
    pub fn default_output(&self) -> PathBuf {
        match self {
            OutputFormat::Csv => PathBuf::from("points_output.csv"),
            OutputFormat::Kml => PathBuf::from("points_output.kml"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> anyhow::Result<Self> {
        match value.trim() {
            "csv" => Ok(OutputFormat::Csv),
            "kml" => Ok(OutputFormat::Kml),
            other => bail!("unexpected output format {:?}, expected 'csv' or 'kml'", other),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorkflowConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub filter: FilterConfig,
}

impl WorkflowConfig {
    pub fn from_args(
        input: PathBuf,
        output: Option<PathBuf>,
        format: &str,
        filter: FilterConfig,
    ) -> anyhow::Result<Self> {
        let format: OutputFormat = format.parse()?;
        let output = output
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| format.default_output());
        Ok(Self {
            input,
            output,
            format,
            filter,
        })
    }
}

/// Reads filter thresholds from YAML; omitted keys keep their defaults.
pub fn load_filter_config<P: AsRef<Path>>(path: P) -> anyhow::Result<FilterConfig> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading filter config {}", path_ref.display()))?;
    let config: FilterConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing filter config {}", path_ref.display()))?;
    Ok(config)
}
