// SPDX-License-Identifier: MIT OR Apache-2.0
#![deny(unsafe_code)]

mod spec;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use ogc_config::{ReportConfig, load_config, validate_config};
use ogc_ows::ReportFormat;
use ogc_wms130::{ExceptionCode, WmsException, report_builder};
use spec::{ExceptionSpec, describe_arities};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ogc-exception",
    version,
    about = "Render OGC WMS 1.3.0 service exception reports"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging.
    #[arg(long, global = true)]
    debug: bool,

    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the WMS 1.3.0 exception codes.
    Codes {
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Render a service exception report.
    Render {
        /// Exception as CODE or CODE=ARG[,ARG...]. Can be repeated; order is kept.
        ///
        /// Examples:
        /// --exception InvalidCRS=EPSG:9999,roads
        /// --exception LayerNotQueryable=roads
        /// --exception CurrentUpdateSequence
        #[arg(long = "exception", short = 'e')]
        exceptions: Vec<ExceptionSpec>,

        /// Output format: xml | yaml | json. Defaults to the configured format.
        #[arg(long)]
        format: Option<ReportFormat>,

        /// XML indentation width. Defaults to the configured width.
        #[arg(long)]
        indent: Option<usize>,

        /// Write the report to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, env_warnings) = load_config(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(p) => format!("load config {}", p.display()),
            None => "load default config".to_owned(),
        })?;

    let filter = if cli.debug {
        EnvFilter::new("ogc=debug,ogc.report=debug,ogc.wms130=debug")
    } else {
        EnvFilter::new(format!(
            "ogc={}",
            config.log_level.as_deref().unwrap_or("info")
        ))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for w in &env_warnings {
        warn!(target: "ogc", "{w}");
    }
    for w in validate_config(&config).context("invalid config")? {
        warn!(target: "ogc", "{w}");
    }

    match cli.command {
        Commands::Codes { json } => cmd_codes(json),
        Commands::Render {
            exceptions,
            format,
            indent,
            out,
        } => cmd_render(&config, exceptions, format, indent, out),
    }
}

fn cmd_codes(json: bool) -> Result<()> {
    if json {
        let codes: Vec<serde_json::Value> = ExceptionCode::ALL
            .iter()
            .map(|c| {
                serde_json::json!({
                    "code": c.as_str(),
                    "arities": c.supported_arities(),
                    "description": c.description(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&codes)?);
        return Ok(());
    }

    for c in ExceptionCode::ALL {
        println!(
            "{:<24} args: {:<10} {}",
            c.as_str(),
            describe_arities(c.supported_arities()),
            c.description()
        );
    }
    Ok(())
}

fn cmd_render(
    config: &ReportConfig,
    specs: Vec<ExceptionSpec>,
    format: Option<ReportFormat>,
    indent: Option<usize>,
    out: Option<PathBuf>,
) -> Result<()> {
    let format = format.unwrap_or(config.format);
    let indent = indent.unwrap_or(config.indent);
    if indent > ogc_config::MAX_INDENT {
        bail!(
            "indent {indent} out of range (0..={})",
            ogc_config::MAX_INDENT
        );
    }

    let exceptions: Vec<WmsException> = specs
        .iter()
        .map(|spec| {
            if !spec.arity_supported() {
                warn!(
                    target: "ogc",
                    "{spec}: {} takes {} argument(s), got {}; rendering its fallback form",
                    spec.code,
                    describe_arities(spec.code.supported_arities()),
                    spec.args.len()
                );
            }
            spec.to_exception()
        })
        .collect();
    debug!(target: "ogc", count = exceptions.len(), %format, indent, "rendering");

    let builder = report_builder().with_indent(indent);
    let mut body = match format {
        ReportFormat::Xml => builder.build(exceptions),
        other => builder
            .render(exceptions, other)
            .with_context(|| format!("render {other} report"))?,
    };
    if !body.ends_with(b"\n") {
        body.push(b'\n');
    }

    match out {
        Some(path) => {
            std::fs::write(&path, &body).with_context(|| format!("write {}", path.display()))?;
            eprintln!("wrote {format} report to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&body).context("write report to stdout")?;
            stdout.flush().context("flush stdout")?;
        }
    }
    Ok(())
}
