#[cfg(not(feature = "cli"))]
compile_error!("The `wlog` binary requires the `cli` feature. Build with `--features cli`.");

use clap::Parser;
use std::fs::File;
use std::io::Write;
use std::process;

use weblog::cli;
use weblog::cli::app::{Cli, ColorMode, Commands};
use weblog::accesslog::batch::CancelFlag;
use weblog::WeblogError;

fn main() {
    let cli = Cli::parse();

    // Configure rayon thread pool if --threads was specified
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok(); // Ignore if already initialized
    }

    match cli.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {} // colored auto-detects tty
    }

    let writer_result: Result<Box<dyn Write>, WeblogError> = match &cli.output {
        Some(path) => File::create(path)
            .map(|f| Box::new(f) as Box<dyn Write>)
            .map_err(|e| WeblogError::Io(format!("Cannot create {}: {}", path, e))),
        None => Ok(Box::new(std::io::stdout()) as Box<dyn Write>),
    };

    let mut writer = match writer_result {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Ctrl+C cancels an in-flight batch; partial columns are never emitted
    let cancel = CancelFlag::new();
    let handler_flag = cancel.clone();
    ctrlc::set_handler(move || {
        handler_flag.trigger();
    })
    .ok(); // Ignore if a handler is already installed

    let result = match cli.command {
        Commands::Clf {
            file,
            json,
            csv,
            na,
        } => cli::clf::execute(
            &cli::clf::ClfOptions {
                file,
                json,
                csv,
                na,
                threads: cli.threads,
                cancel: cancel.clone(),
            },
            &mut writer,
        ),

        Commands::Squid {
            file,
            json,
            csv,
            na,
        } => cli::squid::execute(
            &cli::squid::SquidOptions {
                file,
                json,
                csv,
                na,
                threads: cli.threads,
                cancel: cancel.clone(),
            },
            &mut writer,
        ),

        Commands::Decode { file, json } => {
            cli::decode::execute(&cli::decode::DecodeOptions { file, json }, &mut writer)
        }

        Commands::Encode { file, json } => {
            cli::encode::execute(&cli::encode::EncodeOptions { file, json }, &mut writer)
        }

        Commands::Ips {
            file,
            xff_file,
            json,
        } => cli::ips::execute(
            &cli::ips::IpsOptions {
                file,
                xff_file,
                json,
            },
            &mut writer,
        ),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "wlog", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
