use crate::chart::{ChartSpec, load_chart};
use crate::config::load_config;
use crate::layout::compute_layout;
use crate::render::{render_svg, write_output_svg};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[cfg(feature = "png")]
use crate::render::write_output_png;

#[derive(Parser, Debug)]
#[command(name = "dcr", version, about = "Donut chart renderer in Rust (weighted sections to SVG)")]
pub struct Args {
    /// Chart description (.json5) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png). Defaults to stdout for SVG if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config JSON file (theme and tuning overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let spec = read_spec(args.input.as_deref())?;
    let layout = compute_layout(&spec, &config.theme, &config.chart);
    let svg = render_svg(&layout, &config.theme);

    match args.output_format {
        OutputFormat::Svg => {
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            #[cfg(feature = "png")]
            {
                let output = ensure_output(&args.output, "png")?;
                write_output_png(&svg, &output, &config.render)?;
            }
            #[cfg(not(feature = "png"))]
            return Err(anyhow::anyhow!(
                "PNG output requires the 'png' feature"
            ));
        }
    }

    Ok(())
}

fn read_spec(path: Option<&Path>) -> Result<ChartSpec> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(load_chart(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(ChartSpec::from_json5(&buf)?)
}

#[cfg(feature = "png")]
fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        let args =
            Args::try_parse_from(["dcr", "-i", "chart.json5", "-e", "png", "-o", "out.png"])
                .unwrap();
        assert!(matches!(args.output_format, OutputFormat::Png));
        assert_eq!(args.input.as_deref(), Some(Path::new("chart.json5")));
        assert_eq!(args.output.as_deref(), Some(Path::new("out.png")));
    }

    #[test]
    fn output_format_defaults_to_svg() {
        let args = Args::try_parse_from(["dcr"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Svg));
        assert!(args.config.is_none());
    }
}
