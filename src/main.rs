use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use redirect_table::artifact::write_if_production;
use redirect_table::config::{BUILTIN_RULES, BuildOverrides, BuildSettings, LoadedRuleSet, load_rules};
use redirect_table::rules::{RedirectTable, compile_rule_set, find_redirect, route_matchers};

#[derive(Parser)]
#[command(name = "redirects")]
#[command(
	author,
	version,
	about = "Compile documentation redirects for the request router and the static host"
)]
#[command(arg_required_else_help = true)]
struct Cli {
	#[command(subcommand)]
	command: Option<Commands>,

	/// Rules file to use instead of the built-in site rules
	#[arg(long, global = true, value_name = "FILE")]
	rules: Option<PathBuf>,

	/// Create a template redirects.toml in the current directory
	#[arg(long)]
	init: bool,

	/// Overwrite existing redirects.toml when using --init
	#[arg(long, requires = "init")]
	force: bool,
}

#[derive(Subcommand)]
enum Commands {
	/// Compile the table and write the redirects file on production builds
	Build {
		#[command(flatten)]
		versions: VersionArgs,

		/// Output path for the redirects file [default: out/_redirects]
		#[arg(long, value_name = "PATH")]
		out: Option<PathBuf>,

		/// Build mode; only `production` writes the file [env: NODE_ENV]
		#[arg(long, value_name = "MODE")]
		mode: Option<String>,
	},
	/// Print the compiled table
	Table {
		#[command(flatten)]
		versions: VersionArgs,

		#[arg(long, value_enum, default_value_t = TableFormat::Router)]
		format: TableFormat,
	},
	/// Check the rules for errors without writing anything
	Validate {
		#[command(flatten)]
		versions: VersionArgs,
	},
	/// Show which redirect, if any, the router applies to a path
	Match {
		#[command(flatten)]
		versions: VersionArgs,

		/// Request path, e.g. /docs/manual/latest/installation
		path: String,
	},
}

#[derive(Args)]
struct VersionArgs {
	/// Version substituted for ${latest} [env: VERSION_LATEST]
	#[arg(long, value_name = "VERSION")]
	latest: Option<String>,

	/// Version substituted for ${next} [env: VERSION_NEXT]
	#[arg(long, value_name = "VERSION")]
	next: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TableFormat {
	/// `source -> destination (permanent|temporary)`, router syntax
	Router,
	/// Exact contents of the hosting redirects file
	File,
}

fn main() -> ExitCode {
	tracing_subscriber::registry()
		.with(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "redirects=warn,redirect_table=warn".into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	match run() {
		Ok(code) => code,
		Err(e) => {
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run() -> Result<ExitCode> {
	let cli = Cli::parse();

	if cli.init {
		return handle_init(cli.force);
	}

	let rules_path = cli.rules.as_deref();
	match cli.command {
		Some(Commands::Build {
			versions,
			out,
			mode,
		}) => handle_build(rules_path, versions.into_overrides(out, mode)),
		Some(Commands::Table { versions, format }) => {
			handle_table(rules_path, versions.into_overrides(None, None), format)
		}
		Some(Commands::Validate { versions }) => {
			handle_validate(rules_path, versions.into_overrides(None, None))
		}
		Some(Commands::Match { versions, path }) => {
			handle_match(rules_path, versions.into_overrides(None, None), &path)
		}
		// Unreachable with arg_required_else_help unless only --rules was given
		None => Ok(ExitCode::SUCCESS),
	}
}

impl VersionArgs {
	fn into_overrides(self, output: Option<PathBuf>, mode: Option<String>) -> BuildOverrides {
		BuildOverrides {
			latest: self.latest,
			next: self.next,
			mode,
			output,
		}
	}
}

fn handle_init(force: bool) -> Result<ExitCode> {
	let rules_path = PathBuf::from("redirects.toml");

	if rules_path.exists() && !force {
		anyhow::bail!("redirects.toml already exists. Use --force to overwrite.");
	}

	std::fs::write(&rules_path, BUILTIN_RULES)
		.with_context(|| format!("Failed to write {}", rules_path.display()))?;

	println!("Created redirects.toml");
	Ok(ExitCode::SUCCESS)
}

/// Load rules, resolve settings and compile the table.
fn prepare(
	rules_path: Option<&Path>,
	overrides: &BuildOverrides,
) -> Result<(LoadedRuleSet, BuildSettings, RedirectTable)> {
	let loaded = load_rules(rules_path).context("Failed to load redirect rules")?;
	let settings = BuildSettings::from_process_env(&loaded.rules, overrides);

	tracing::debug!(
		rules = %describe_source(&loaded),
		mode = %settings.mode,
		latest = ?settings.versions.latest,
		next = ?settings.versions.next,
		"Resolved build settings"
	);

	let table = compile_rule_set(&loaded.rules, &settings.versions)
		.context("Failed to compile redirect table")?;

	Ok((loaded, settings, table))
}

fn describe_source(loaded: &LoadedRuleSet) -> String {
	match loaded.path {
		Some(ref path) => path.display().to_string(),
		None => "built-in rules".to_string(),
	}
}

fn handle_build(rules_path: Option<&Path>, overrides: BuildOverrides) -> Result<ExitCode> {
	let (loaded, settings, table) = prepare(rules_path, &overrides)?;

	println!(
		"Compiled {} redirects ({} exact, {} splat) from {}",
		table.len(),
		loaded.rules.redirects.len(),
		loaded.rules.splat_redirects.len(),
		describe_source(&loaded)
	);

	let written = write_if_production(&table.file_table(), &settings.output, settings.mode)
		.context("Failed to write redirects file")?;

	if written {
		println!("Wrote {}", settings.output.display());
	} else {
		println!(
			"Skipped {} ({} build)",
			settings.output.display(),
			settings.mode
		);
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_table(
	rules_path: Option<&Path>,
	overrides: BuildOverrides,
	format: TableFormat,
) -> Result<ExitCode> {
	let (_, _, table) = prepare(rules_path, &overrides)?;

	match format {
		TableFormat::File => print!("{}", table.file_table()),
		TableFormat::Router => {
			for entry in table.router_table() {
				let kind = if entry.permanent {
					"permanent"
				} else {
					"temporary"
				};
				println!("{} -> {} ({})", entry.source, entry.destination, kind);
			}
		}
	}

	Ok(ExitCode::SUCCESS)
}

fn handle_validate(rules_path: Option<&Path>, overrides: BuildOverrides) -> Result<ExitCode> {
	match prepare(rules_path, &overrides) {
		Ok((loaded, _, table)) => {
			println!(
				"All redirects are valid: {} ({} rules)",
				describe_source(&loaded),
				table.len()
			);
			Ok(ExitCode::SUCCESS)
		}
		Err(e) => {
			eprintln!("Redirect error: {e:#}");
			Ok(ExitCode::FAILURE)
		}
	}
}

fn handle_match(
	rules_path: Option<&Path>,
	overrides: BuildOverrides,
	path: &str,
) -> Result<ExitCode> {
	let (_, _, table) = prepare(rules_path, &overrides)?;
	let matchers = route_matchers(&table);

	match find_redirect(&matchers, path) {
		Some(found) => println!(
			"{} {} (rule {})",
			found.status(),
			found.location,
			found.redirect.source()
		),
		None => println!("No redirect for {path}"),
	}

	Ok(ExitCode::SUCCESS)
}
