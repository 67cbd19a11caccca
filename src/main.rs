use clap::Parser;
use fsmeta::config::Args;
use fsmeta::server::Server;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // stdout carries the protocol; all logging goes to stderr.
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    info!("Starting file metadata server...");
    let server = Server::new();
    if let Err(e) = server.run() {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
