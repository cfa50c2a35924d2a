use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::Level;

use gitgraph_git::RepositoryLocation;

mod cli;
mod commands;
mod config;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    execute(
        &cli,
        &RepositoryLocation::from_env(),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Run one invocation against `location`.
///
/// The graph reaches `stdout` only after the whole walk and render
/// succeeded. Any failure writes one error line to `stderr`, leaves
/// `stdout` untouched and yields exit code 1.
fn execute(
    cli: &cli::Cli,
    location: &RepositoryLocation,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> ExitCode {
    let result = commands::run(cli, location).and_then(|output| {
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    });
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // A closed stderr still fails the run.
            let _ = writeln!(stderr, "{} {err:#}", "git-graphviz: error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
