/*!
 * Command-line interface for folder-to-llm
 */

use std::io;
use std::process;

use clap_complete::generate;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use folder_to_llm::config::{Args, Config};
use folder_to_llm::confirm::{confirm, Decision};
use folder_to_llm::error::Result;
use folder_to_llm::writer::{render, write_output};

fn main() {
    // Parse command line arguments
    let args = Args::parse_args();

    if let Some(shell) = args.generate {
        let mut command = Args::build_command();
        generate(shell, &mut command, "folder-to-llm", &mut io::stdout());
        return;
    }

    // Logs go to stderr so stdout carries only the rendered document
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str())),
        )
        .init();

    if let Err(e) = run(args) {
        error!(error = %e, "run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = Config::from_args(args)?;
    info!(root = %config.root.display(), "starting");

    if config.confirm {
        let stdin = io::stdin();
        let decision = confirm(&config.root, &mut config.matcher, stdin.lock(), io::stdout())?;
        if decision == Decision::Abort {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let result = render(&config.root, &config.matcher, &config.render)?;

    match &config.output_file {
        Some(path) => {
            write_output(path, &result)?;
            println!("Output written to {}", path.display());
        }
        None => println!("{}", result),
    }

    Ok(())
}
