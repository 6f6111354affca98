//! Command line front end for crossdock-routes.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error, trace};

use crossdock_routes::config::{DEFAULT_INSTANCE_PATH, DEFAULT_OUTPUT_PATH};
use crossdock_routes::evaluation::CostReport;
use crossdock_routes::{run, Config, Error};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Solver result file with `owner from to` edge lines
    #[arg(value_name = "RESULT")]
    result: Option<PathBuf>,

    /// Instance table (`nSuppliers,nConsumers` then `nodeId,x,y` rows)
    #[arg(value_name = "INSTANCE", env = "CROSSDOCK_INSTANCE", default_value = DEFAULT_INSTANCE_PATH)]
    instance: PathBuf,

    /// Where to write the SVG diagram
    #[arg(short, long, value_name = "SVG", env = "CROSSDOCK_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Rows to skip between the instance header and the first node row
    #[arg(long = "skip-rows", value_name = "N", env = "CROSSDOCK_SKIP_ROWS", default_value_t = 0)]
    skip_rows: usize,

    /// Print the cost report as JSON
    #[cfg(feature = "json")]
    #[arg(long)]
    json: bool,

    /// Open the diagram with the system viewer
    #[arg(long)]
    open: bool,
}

fn main() {
    let cli = Cli::parse();

    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    debug!("Verbose level: {}", cli.verbose);

    let outcome = config_from(&cli)
        .and_then(|config| {
            trace!("Config: {:?}", config);
            run(&config)
        })
        .and_then(|report| write_report(&mut io::stdout().lock(), &report, wants_json(&cli)));

    if let Err(e) = outcome {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}

fn config_from(cli: &Cli) -> Result<Config, Error> {
    let result = cli.result.clone().ok_or(Error::MissingArgument("RESULT"))?;
    Ok(Config::new(result, Some(cli.instance.clone()))
        .with_output(cli.output.clone())
        .with_skip_rows(cli.skip_rows)
        .with_open(cli.open))
}

fn write_report<W: Write>(out: &mut W, report: &CostReport, json: bool) -> Result<(), Error> {
    if json {
        return write_json(out, report);
    }
    for route in report.routes() {
        let edges: Vec<(u32, u32)> = route.edges.iter().map(|e| (e.from, e.to)).collect();
        writeln!(out, "Route {}: {:?} cost {}", route.owner, edges, route.cost).map_err(Error::Output)?;
    }
    writeln!(out, "Total cost = {}", report.total()).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}

#[cfg(feature = "json")]
fn wants_json(cli: &Cli) -> bool {
    cli.json
}

#[cfg(not(feature = "json"))]
fn wants_json(_cli: &Cli) -> bool {
    false
}

#[cfg(feature = "json")]
fn write_json<W: Write>(out: &mut W, report: &CostReport) -> Result<(), Error> {
    serde_json::to_writer_pretty(&mut *out, report).map_err(|e| Error::Output(e.into()))?;
    writeln!(out).map_err(Error::Output)?;
    out.flush().map_err(Error::Output)
}

#[cfg(not(feature = "json"))]
fn write_json<W: Write>(_out: &mut W, _report: &CostReport) -> Result<(), Error> {
    Ok(())
}
