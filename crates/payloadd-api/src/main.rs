//! payloadd CLI and HTTP API entry point.
//!
//! Binary name: `payloadd`
//!
//! Parses CLI arguments, loads configuration, builds the payload registry,
//! then runs the requested command or starts the HTTP server.

mod cli;
mod config;
mod http;
mod state;

use std::process::ExitCode;

use clap::Parser;
use clap_complete::generate;

use payloadd_observe::tracing_setup::{
    filter_directive, init_tracing, install_panic_hook, shutdown_tracing, TracingOptions,
};
use payloadd_types::config::ServerConfig;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Shell completions don't need config or logging
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "payloadd", &mut std::io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let (server_config, config_error) =
        match config::load_server_config(cli.config.as_deref()).await {
            Ok(server_config) => (server_config, None),
            Err(err) => (ServerConfig::default(), Some(err)),
        };

    init_tracing(&TracingOptions {
        default_filter: filter_directive(cli.verbose, cli.quiet).to_string(),
        format: server_config.log_format,
        enable_otel: cli.otel,
    })?;
    install_panic_hook();

    if let Some(err) = config_error {
        tracing::warn!(error = %err, "Ignoring config file, using defaults");
    }

    let code = run(cli, server_config).await;
    shutdown_tracing();
    code
}

async fn run(cli: Cli, server_config: ServerConfig) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::Serve { port, host } => {
            let server_config = config::apply_overrides(server_config, host, port);
            let state = AppState::from_config(&server_config);

            let addr = format!("{}:{}", server_config.host, server_config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} payloadd listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }

        Commands::List => {
            let state = AppState::from_config(&server_config);
            cli::payload::list_payloads(&state, cli.json)?;
        }

        Commands::Info { name } => {
            let state = AppState::from_config(&server_config);
            cli::payload::show_info(&state, &name, cli.json)?;
        }

        Commands::Run { name, arg, args } => {
            let state = AppState::from_config(&server_config);
            let payload_args = cli::payload::build_args(args.as_deref(), arg)?;
            if !cli::payload::run_payload(&state, &name, &payload_args, cli.json)? {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Completions { .. } => unreachable!("handled in main"),
    }

    Ok(ExitCode::SUCCESS)
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
