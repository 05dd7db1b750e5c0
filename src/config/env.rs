use crate::config::types::RuleSet;
use std::fmt;
use std::path::PathBuf;

/// Environment variable holding the "latest" documentation version.
pub const VERSION_LATEST_VAR: &str = "VERSION_LATEST";

/// Environment variable holding the "next" documentation version.
pub const VERSION_NEXT_VAR: &str = "VERSION_NEXT";

/// Environment variable selecting the build mode.
pub const NODE_ENV_VAR: &str = "NODE_ENV";

/// Where the hosting redirects file goes when nothing else says otherwise.
pub const DEFAULT_OUTPUT: &str = "out/_redirects";

/// The concrete versions substituted into splat destinations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionContext {
	pub latest: Option<String>,
	pub next: Option<String>,
}

impl VersionContext {
	pub fn new(latest: impl Into<String>, next: impl Into<String>) -> Self {
		VersionContext {
			latest: Some(latest.into()),
			next: Some(next.into()),
		}
	}
}

/// Whether this build persists the hosting redirects file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildMode {
	Production,
	#[default]
	Development,
}

impl BuildMode {
	/// Only the exact value `production` selects a production build.
	pub fn from_env_value(value: Option<&str>) -> Self {
		match value {
			Some("production") => BuildMode::Production,
			_ => BuildMode::Development,
		}
	}

	pub fn is_production(self) -> bool {
		self == BuildMode::Production
	}
}

impl fmt::Display for BuildMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BuildMode::Production => f.write_str("production"),
			BuildMode::Development => f.write_str("development"),
		}
	}
}

/// Values given explicitly on the command line. These win over everything.
#[derive(Debug, Clone, Default)]
pub struct BuildOverrides {
	pub latest: Option<String>,
	pub next: Option<String>,
	pub mode: Option<String>,
	pub output: Option<PathBuf>,
}

/// Fully resolved inputs for one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettings {
	pub versions: VersionContext,
	pub mode: BuildMode,
	pub output: PathBuf,
}

impl BuildSettings {
	/// Resolve settings with precedence: override > environment > rules file > default.
	///
	/// `lookup` reads an environment variable; empty values count as unset.
	pub fn resolve<F>(rules: &RuleSet, overrides: &BuildOverrides, lookup: F) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let env = |name: &str| non_empty(lookup(name));

		let latest = non_empty(overrides.latest.clone())
			.or_else(|| env(VERSION_LATEST_VAR))
			.or_else(|| non_empty(rules.versions.latest.clone()));
		let next = non_empty(overrides.next.clone())
			.or_else(|| env(VERSION_NEXT_VAR))
			.or_else(|| non_empty(rules.versions.next.clone()));

		let mode_value = non_empty(overrides.mode.clone()).or_else(|| env(NODE_ENV_VAR));
		let mode = BuildMode::from_env_value(mode_value.as_deref());

		let output = overrides
			.output
			.clone()
			.or_else(|| rules.output.clone())
			.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

		BuildSettings {
			versions: VersionContext { latest, next },
			mode,
			output,
		}
	}

	/// Resolve settings against the current process environment.
	pub fn from_process_env(rules: &RuleSet, overrides: &BuildOverrides) -> Self {
		Self::resolve(rules, overrides, |name| std::env::var(name).ok())
	}
}

fn non_empty(value: Option<String>) -> Option<String> {
	value.filter(|v| !v.is_empty())
}
