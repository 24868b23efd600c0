use crate::invoke::{run_invoke, run_preview, InvokeArgs, PreviewArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use form_relay::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Form Relay",
    about = "Validate property management web forms and relay them as e-mail",
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
    /// Run one request descriptor through the handler and print the response descriptor
    Invoke(InvokeArgs),
    /// Validate a submission and print the e-mail it would produce, without sending
    Preview(PreviewArgs),
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
        Command::Invoke(args) => run_invoke(args),
        Command::Preview(args) => run_preview(args),
    }
}
