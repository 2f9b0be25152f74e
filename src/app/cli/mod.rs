//! CLI Adapter.

mod session;

use std::io::{self, IsTerminal};

use clap::{ArgAction, Parser};
use tokio::io::BufReader;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::api::{self, BootstrapOutcome, BootstrapReport, TerminalContext};
use crate::domain::{AppError, RawConfig};
use crate::services::TerminalPrompter;
use session::{QUIT_KEY, SessionEnd};

/// Environment variable overriding the verbosity flags.
const LOG_ENV: &str = "OVITE_LOG";

#[derive(Parser)]
#[command(name = "ovite")]
#[command(version)]
#[command(about = "Bootstrap a Vite front-end project", long_about = None)]
struct Cli {
    /// `.` for the current directory, a new directory, or a remote repository ending in .git
    project: Option<String>,
    /// Skip prompts and use defaults for everything not given as a flag
    #[arg(short, long)]
    yes: bool,
    /// Use the React template instead of vanilla
    #[arg(short, long)]
    react: bool,
    /// Use TypeScript
    #[arg(short, long)]
    typescript: bool,
    /// Add ESLint with the Airbnb profile
    #[arg(short, long)]
    eslint: bool,
    /// Commit the installation, pushing when a remote exists
    #[arg(short, long)]
    commit: bool,
    /// Open the project in the editor and start the dev server
    #[arg(short, long)]
    access: bool,
    /// Print an environment report and exit without changing anything
    #[arg(long)]
    debug: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_raw(self) -> RawConfig {
        RawConfig {
            project: self.project,
            yes: self.yes,
            react: self.react,
            typescript: self.typescript,
            eslint: self.eslint,
            commit: self.commit,
            access: self.access,
            debug: self.debug,
        }
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = execute(cli) {
        // Stage failures were already rendered by the reporter.
        if !matches!(e, AppError::Stage(_)) {
            eprintln!("Error: {}", e);
        }
        let code = e.exit_code();
        eprintln!();
        eprintln!("Something went wrong (exit code {code}).");
        eprintln!(
            "Re-run with --debug to inspect your environment and include the exit code when \
             reporting the issue."
        );
        std::process::exit(code);
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}

fn execute(cli: Cli) -> Result<(), AppError> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(run_bootstrap(cli.into_raw()))
}

async fn run_bootstrap(raw: RawConfig) -> Result<(), AppError> {
    let invocation_dir = std::env::current_dir()?;
    let prompter = TerminalPrompter::for_run(&raw, io::stdin().is_terminal());
    let ctx = api::context_at(&invocation_dir, prompter)?;

    match api::bootstrap(&ctx, raw).await? {
        BootstrapOutcome::Inspected(report) => println!("{report}"),
        BootstrapOutcome::Ready(report) if report.serving => serve(&ctx).await?,
        BootstrapOutcome::Ready(report) => print_next_steps(&ctx, &report),
    }
    Ok(())
}

async fn serve(ctx: &TerminalContext) -> Result<(), AppError> {
    println!();
    println!("🚀 Dev server running. Press {QUIT_KEY} then Enter to stop it.");

    match session::wait_for_quit(BufReader::new(tokio::io::stdin())).await? {
        SessionEnd::Quit => match api::stop_dev_server(ctx).await {
            Ok(Some(pid)) => println!("👋 Stopped the dev server (pid {pid})"),
            Ok(None) => {
                let port = ctx.settings().dev_server_port;
                println!("👋 No dev server was listening on port {port}")
            }
            // The session is over either way.
            Err(e) => warn!(error = %e, "failed to stop the dev server"),
        },
        SessionEnd::InputClosed => println!("Input closed; the dev server keeps running."),
    }
    Ok(())
}

fn print_next_steps(ctx: &TerminalContext, report: &BootstrapReport) {
    println!();
    println!("🎉 Project ready. Next steps:");
    if !report.target.is_current() {
        println!("  cd {}", report.target);
    }
    println!("  {} .", ctx.settings().editor_command);
    println!("  {}", report.manager.dev_hint());
}
