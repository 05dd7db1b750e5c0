use std::path::PathBuf;

/// Which side of a rule an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleField {
	Source,
	Destination,
}

impl std::fmt::Display for RuleField {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			RuleField::Source => f.write_str("source"),
			RuleField::Destination => f.write_str("destination"),
		}
	}
}

/// Library-level structured errors.
///
/// Every variant is fatal to a build. The CLI binary wraps these with
/// `anyhow` for context chains.
#[derive(Debug, thiserror::Error)]
pub enum RedirectError {
	#[error("Version `{placeholder}` is referenced by splat redirect {source_path} but is not set (set {env_var})")]
	MissingVersion {
		placeholder: &'static str,
		env_var: &'static str,
		source_path: String,
	},

	#[error("Version `{placeholder}` for splat redirect {source_path} contains whitespace: {version:?} (check {env_var})")]
	InvalidVersion {
		placeholder: &'static str,
		env_var: &'static str,
		version: String,
		source_path: String,
	},

	#[error(
		"Splat redirect {source_path} -> {destination}: {field} must end with exactly one `:name*` capture"
	)]
	PatternMismatch {
		source_path: String,
		destination: String,
		field: RuleField,
	},

	#[error("Exact redirect {source_path} -> {destination}: {field} contains a `:name*` capture")]
	WildcardInExactRule {
		source_path: String,
		destination: String,
		field: RuleField,
	},

	#[error("Invalid redirect {source_path}: {reason}")]
	InvalidRule { source_path: String, reason: String },

	#[error("Failed to read rules file: {path}")]
	RulesRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse rules file: {path}")]
	RulesParse {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Failed to create output directory: {path}")]
	CreateDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to write redirects file: {path}")]
	WriteArtifact {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

/// Result type alias using RedirectError.
pub type Result<T> = std::result::Result<T, RedirectError>;
