use crate::demo::{run_churn_report, run_demo, ChurnReportArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use salon_iq::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Salon IQ",
    about = "Run the salon scoring service and its reporting tools from the command line",
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
    /// Score customer churn risk from booking exports
    Churn {
        #[command(subcommand)]
        command: ChurnCommand,
    },
    /// Run a CLI demo across the churn, review, and compliance engines
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ChurnCommand {
    /// Score one customer's appointment CSV export
    Report(ChurnReportArgs),
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
        Command::Churn {
            command: ChurnCommand::Report(args),
        } => run_churn_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
