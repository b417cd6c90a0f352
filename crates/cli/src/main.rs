use std::env;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use cmdmark_cli::cli_args::{Args, Commands, PreviewArgs, SearchArgs};
use cmdmark_cli::finder::Fzf;
use cmdmark_cli::preview::preview_output;
use cmdmark_cli::resolution::{resolve, Resolution};
use cmdmark_core::error::{Error, Result};
use cmdmark_core::{config, execution, file_handling};

/// Path of this binary, which the finder calls back for previews.
fn current_program() -> Result<String> {
    let program = env::current_exe().map_err(Error::CurrentProgram)?;
    Ok(program.to_string_lossy().into_owned())
}

fn search(args: &SearchArgs) -> Result<ExitCode> {
    let config_path = config::get_config_path(&args.config)?;
    debug!("Config path: `{config_path}`");

    let config = file_handling::load_config(&config_path)?;
    let finder = Fzf::locate()?;
    let program = current_program()?;

    match resolve(&config, &finder, &program)? {
        Resolution::Print(command) => {
            println!("{command}");
            Ok(ExitCode::SUCCESS)
        }
        Resolution::Execute(command) => {
            let status = execution::execute_command(&command)?;
            Ok(ExitCode::from(execution::exit_code(status)))
        }
        Resolution::Quit => Ok(ExitCode::SUCCESS),
    }
}

fn preview(args: &PreviewArgs) -> Result<ExitCode> {
    println!("{}", preview_output(args)?);
    Ok(ExitCode::SUCCESS)
}

fn execute() -> Result<ExitCode> {
    let args = Args::parse();

    match &args.command {
        Commands::Search(search_args) => search(search_args),
        Commands::Preview(preview_args) => preview(preview_args),
    }
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
