use crate::demo::{run_demo, DemoArgs};
use crate::server;
use crate::session::run_session;
use clap::{Args, Parser, Subcommand};
use hostel::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Hostel Front Desk",
    about = "Register students and allocate hostel rooms from the browser or the terminal",
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
    /// Run an interactive front desk session on stdin/stdout
    Session,
    /// Walk through the standard allocation scenarios and print the roster
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
        Command::Session => run_session(),
        Command::Demo(args) => run_demo(args),
    }
}
