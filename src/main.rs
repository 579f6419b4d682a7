use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use nestcheck::{
    generate, verify_fixtures, Error, Fixture, FixtureFile, GeneratorConfig, Validator,
    ValidatorConfig, Verdict,
};

mod cli;
use cli::display;
use cli::{Cli, Commands};

fn main() -> ExitCode {
    init_tracing();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Usage errors share the runtime-error status.
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    let validator = Validator::new(ValidatorConfig {
        max_len: cli.max_len,
    });

    match cli.command {
        Some(Commands::Check { input }) => run_check(&validator, input),
        Some(Commands::Generate {
            seed,
            step,
            max_length,
            big_length,
            output,
        }) => {
            let config = GeneratorConfig {
                seed,
                step,
                max_length,
                big_length,
            };
            report_failure(run_generate(&config, output))
        }
        Some(Commands::Verify { files }) => run_verify(&validator, &files),
        None => match cli.input {
            Some(input) => run_check(&validator, input),
            None => {
                eprintln!("{} no input given", display::error_prefix());
                eprintln!("Usage: nestcheck <INPUT> | nestcheck <COMMAND>  (see --help)");
                ExitCode::FAILURE
            }
        },
    }
}

/// Log to stderr so stdout only carries results. `RUST_LOG` overrides the default.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn exit_for(verdict: Verdict) -> ExitCode {
    ExitCode::from(verdict.exit_code() as u8)
}

fn report_failure(result: nestcheck::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprintln!("{} {}", display::error_prefix(), e);
            ExitCode::FAILURE
        }
    }
}

/// Validate one argument. A non-UTF-8 argument is a usage error, reported
/// with the offending input and never turned into an INVALID verdict.
fn run_check(validator: &Validator, input: OsString) -> ExitCode {
    match input.into_string() {
        Ok(input) => {
            let verdict = validator.validate(&input);
            println!("{}", display::verdict_line(&input, verdict));
            exit_for(verdict)
        }
        Err(raw) => {
            let lossy = raw.to_string_lossy().into_owned();
            let err = Error::NonUtf8Input {
                lossy: lossy.clone(),
            };
            error!(error = %err, "argument is not a string");
            println!("{}", display::error_line(&lossy, &err));
            ExitCode::FAILURE
        }
    }
}

fn run_generate(config: &GeneratorConfig, output: Option<PathBuf>) -> nestcheck::Result<()> {
    let file = generate(config)?;
    match output {
        Some(path) => {
            file.save(&path)?;
            info!(path = %path.display(), fixtures = file.len(), "wrote fixture file");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", file.to_json()?)?;
        }
    }
    Ok(())
}

fn run_verify(validator: &Validator, files: &[PathBuf]) -> ExitCode {
    let mut fixtures: Vec<Fixture> = Vec::new();
    let mut sources = Vec::with_capacity(files.len());
    let mut load_failed = false;

    for path in files {
        match FixtureFile::load(path) {
            Ok(file) => {
                sources.push(format!("{} ({} fixtures)", path.display(), file.len()));
                fixtures.extend(file.fixtures());
            }
            Err(e) => {
                load_failed = true;
                error!(path = %path.display(), error = %e, "could not load fixtures");
                eprintln!("{} {}", display::error_prefix(), e);
            }
        }
    }

    let report = verify_fixtures(validator, &fixtures);
    display::print_report(&sources, &report);

    if load_failed || !report.is_success() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
