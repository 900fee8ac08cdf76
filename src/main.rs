use clap::{Parser, Subcommand};
use docker_desktop_installer::{
    detect_docker_with_options, dispatch, CommandOutcome, DetectOptions, DockerStatusChecker, HostCommand,
    HostOs, HttpDownloader, InstallOptions, InstallOutcome, InstallStatus, Installer, SystemProcessRunner,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod terminal;

use terminal::TerminalInteraction;

#[derive(Debug, Parser)]
#[command(name = "docker-install", version, about, long_about = None, propagate_version = true)]
struct Cli {
    /// Platform to act for instead of the detected one
    #[arg(long, global = true)]
    platform: Option<HostOs>,

    /// Answer every prompt with its first option
    #[arg(short = 'y', long, global = true)]
    yes: bool,

    /// Directory the installer is downloaded into
    #[arg(long, global = true)]
    temp_dir: Option<PathBuf>,

    /// Seconds to wait for `docker --version`
    #[arg(long, global = true, default_value_t = 5)]
    probe_timeout: u64,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Download and launch the Docker Desktop installer
    #[command(alias = "i")]
    Install,
    /// Show the "Docker is not installed" prompt
    #[command(alias = "n")]
    Notify,
    /// Report whether Docker is installed
    #[command(alias = "s")]
    Status,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let os = cli.platform.unwrap_or_else(HostOs::current);
    let detect_options = DetectOptions {
        timeout: Duration::from_secs(cli.probe_timeout),
        ..Default::default()
    };

    let command = match cli.cmd {
        Commands::Install => HostCommand::InstallDocker,
        Commands::Notify => HostCommand::ShowInstallNotification,
        Commands::Status => {
            print_status(&detect_docker_with_options(&detect_options).await);
            return Ok(());
        }
    };

    let mut install_options = InstallOptions::default();
    if let Some(dir) = cli.temp_dir {
        install_options.temp_dir = dir;
    }

    let ui = TerminalInteraction::new(cli.yes);
    let checker = DockerStatusChecker::new(detect_options);
    let downloader = HttpDownloader::new();
    let runner = SystemProcessRunner::new();
    let installer = Installer::new(&checker, &ui, &downloader, &runner, install_options);

    match dispatch(command, os, &installer).await {
        Ok(CommandOutcome::Install(InstallOutcome::Launched(mut task))) => {
            eprintln!("Started \"{}\"", task.title());
            if let Some(Ok(status)) = task.wait().await {
                if !status.success() {
                    warn!(%status, "installer task exited unsuccessfully");
                }
            }
            Ok(())
        }
        Ok(outcome) => {
            tracing::debug!(?outcome, "command finished");
            Ok(())
        }
        Err(e) => {
            eprintln!("To fix: {}", e.fix_suggestion());
            Err(e.into())
        }
    }
}

fn print_status(status: &InstallStatus) {
    match status {
        InstallStatus::Installed(meta) => {
            let version = meta
                .version
                .as_ref()
                .map_or_else(|| "unknown version".to_string(), |v| v.to_string());
            println!("Docker {} at {}", version, meta.path.display());
            if let Some(method) = &meta.install_method {
                println!("Installed via {method}");
            }
        }
        InstallStatus::NotInstalled => println!("Docker is not installed"),
        InstallStatus::Unknown { message, .. } => println!("Docker status unknown: {message}"),
        _ => println!("Docker status unknown"),
    }
}
