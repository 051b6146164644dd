use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Builder, Env};
use ftp_binding::config::load_from_file;
use ftp_binding::core_cli::Cli;
use ftp_binding::core_session::SuppaConnector;
use ftp_binding::{FtpBinding, InvokeRequest};
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    // Initialize the logger with a custom format
    let default_filter = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    let config = load_from_file(&args.config)?;
    let binding = FtpBinding::new(config, Arc::new(SuppaConnector));

    let request = InvokeRequest {
        operation: args.operation.clone(),
        metadata: args.metadata_map(),
        data: args.payload()?,
    };
    let response = binding
        .invoke(request)
        .await
        .with_context(|| format!("Operation {} failed", args.operation))?;

    match &args.output {
        Some(path) => std::fs::write(path, &response.data)
            .with_context(|| format!("Failed to write output file: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&response.data)?;
            stdout.flush()?;
        }
    }

    Ok(())
}
