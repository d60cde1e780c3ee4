use clap::{Args, Parser, Subcommand};
use sso_indicators::error::AppError;

use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::server;

#[derive(Parser, Debug)]
#[command(
    name = "SSO Indicator Service",
    about = "Compute and serve IESS CD 513 occupational-safety indicators",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Assess a CSV batch and render the annual report
    Report(ReportArgs),
    /// Assess a deterministic synthetic year for demos and smoke checks
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
