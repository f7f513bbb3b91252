use std::io;
use std::io::Write;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use fcqs_cli::FcqsCli;
use fcqs_cli::LOG_ENV;
use fcqs_cli::Mode;
use fcqs_core::FcqsResult;
use fcqs_core::NotesFiles;
use fcqs_core::config;
use fcqs_core::config::FcqsConfig;
use fcqs_core::config::NOTES_FILE_ENV;
use fcqs_core::write_contents;
use fcqs_core::write_first_command_block;
use fcqs_core::write_first_url;
use fcqs_core::write_note_location;
use fcqs_core::write_titles;
use tracing_subscriber::EnvFilter;

fn main() {
	let args = FcqsCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	initialize_logging(&args, use_color);

	let mut stdout = io::stdout().lock();
	if let Err(e) = run(&args, &mut stdout) {
		let report: miette::Report = e.into();
		eprintln!("{report:?}");
		process::exit(1);
	}
}

fn initialize_logging(args: &FcqsCli, use_color: bool) {
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		EnvFilter::new(if args.verbose { "debug" } else { "warn" })
	});

	let _ = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.try_init();
}

fn run(args: &FcqsCli, w: &mut impl Write) -> FcqsResult<()> {
	let mode = args.mode()?;
	let notes = NotesFiles::open(notes_files(args)?)?;
	tracing::debug!(?mode, files = notes.len(), "running");

	match mode {
		Mode::Titles => write_titles(w, notes.lines()),
		Mode::Contents {
			title,
			suppress_header,
		} => write_contents(w, notes.lines(), &title, suppress_header),
		Mode::Url(title) => write_first_url(w, notes.lines(), &title),
		Mode::Command(title) => write_first_command_block(w, notes.lines(), &title),
		Mode::Location(title) => write_note_location(w, notes.sources(), &title),
	}?;

	w.flush()?;

	Ok(())
}

/// Resolve the notes files from the environment, the config file, or the
/// default location.
fn notes_files(args: &FcqsCli) -> FcqsResult<Vec<PathBuf>> {
	let env = std::env::var_os(NOTES_FILE_ENV).filter(|value| !value.is_empty());

	let config = match (&env, &args.config) {
		(Some(_), _) => None,
		(None, Some(path)) => Some(FcqsConfig::load_from(path)?),
		(None, None) => {
			match config::home_dir() {
				Ok(home) => FcqsConfig::load(&home)?,
				Err(_) => None,
			}
		}
	};

	config::resolve_notes_files(env.as_deref(), config.as_ref(), config::home_dir)
}
