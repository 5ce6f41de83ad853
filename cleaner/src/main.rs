use clap::Parser;
use log::info;
use std::ffi::OsString;
use std::path::PathBuf;
use trackcore::FilterConfig;
use workflow::config::{load_filter_config, WorkflowConfig};
use workflow::runner::Runner;

mod workflow;

const LONG_FLAGS: &[&str] = &["in", "out", "out_format", "config", "help", "version"];

#[derive(Parser)]
#[command(author, version, about = "Removes erroneous samples from a GPS track")]
struct Args {
    /// Input CSV of latitude,longitude,unix-seconds records
    #[arg(long = "in", default_value = "points.csv")]
    input: PathBuf,
    /// Output file (defaults to points_output.<format>)
    #[arg(long = "out")]
    output: Option<PathBuf>,
    /// Output format, 'csv' or 'kml'
    #[arg(long = "out_format", default_value = "csv")]
    out_format: String,
    /// YAML file overriding the filter thresholds
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Accepts single-dash long flags (`-in path`, `-out_format=kml`) by
/// rewriting them to the double-dash form.
fn single_dash_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let rewritten = arg.to_str().and_then(|text| {
                let flag = text.strip_prefix('-')?;
                if flag.starts_with('-') {
                    return None;
                }
                let name = flag.split('=').next().unwrap_or(flag);
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", text)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse_from(single_dash_flags(std::env::args_os()));

    let filter = match &args.config {
        Some(path) => load_filter_config(path)?,
        None => FilterConfig::default(),
    };
    let config = WorkflowConfig::from_args(args.input, args.output, &args.out_format, filter)?;

    let result = Runner::new(config.clone()).execute()?;
    info!(
        "wrote {} points to {}",
        result.written,
        config.output.display()
    );
    info!("speed filter: {}", result.speed);
    info!("noise filter: {}", result.noise);
    Ok(())
}
