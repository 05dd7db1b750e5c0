use crate::error::{RedirectError, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// A redirect with fully literal source and destination paths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RedirectRule {
	pub source: String,
	pub destination: String,
	/// Selects 308 (permanent) over 307 (temporary).
	pub permanent: bool,
}

/// A redirect whose source and destination both end in a `:name*` capture.
///
/// The destination may embed `${latest}` / `${next}` version placeholders,
/// resolved before validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SplatRedirectRule {
	pub source: String,
	pub destination: String,
	pub permanent: bool,
}

/// Version fallbacks declared in the rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VersionDefaults {
	pub latest: Option<String>,
	pub next: Option<String>,
}

/// Top-level contents of a `redirects.toml` file.
///
/// Declaration order is significant: the router matches top-to-bottom and
/// the first match wins, so both arrays are kept in file order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleSet {
	/// Exact rules. Emitted before every splat rule.
	#[serde(default)]
	pub redirects: Vec<RedirectRule>,

	/// Pattern rules.
	#[serde(default)]
	pub splat_redirects: Vec<SplatRedirectRule>,

	#[serde(default)]
	pub versions: VersionDefaults,

	/// Where production builds write the hosting redirects file.
	#[serde(default)]
	pub output: Option<PathBuf>,
}

/// A rule set together with where it came from, for display.
#[derive(Debug, Clone)]
pub struct LoadedRuleSet {
	pub rules: RuleSet,

	/// `None` for the built-in rule set.
	pub path: Option<PathBuf>,
}

fn validate_source(source: &str, destination: &str) -> Result<()> {
	if !source.starts_with('/') {
		return Err(RedirectError::InvalidRule {
			source_path: source.to_string(),
			reason: "source must start with `/`".to_string(),
		});
	}
	if destination.is_empty() {
		return Err(RedirectError::InvalidRule {
			source_path: source.to_string(),
			reason: "destination is empty".to_string(),
		});
	}
	// Fields are whitespace-separated in the hosting file.
	for (field, value) in [("source", source), ("destination", destination)] {
		if value.chars().any(char::is_whitespace) {
			return Err(RedirectError::InvalidRule {
				source_path: source.to_string(),
				reason: format!("{field} contains whitespace"),
			});
		}
	}
	Ok(())
}

impl RedirectRule {
	pub fn validate(&self) -> Result<()> {
		validate_source(&self.source, &self.destination)
	}
}

impl SplatRedirectRule {
	pub fn validate(&self) -> Result<()> {
		validate_source(&self.source, &self.destination)
	}
}

impl RuleSet {
	/// Validate the shape of every rule. Capture-token checks happen at compile time.
	pub fn validate(&self) -> Result<()> {
		for rule in &self.redirects {
			rule.validate()?;
		}
		for rule in &self.splat_redirects {
			rule.validate()?;
		}
		Ok(())
	}

	pub fn len(&self) -> usize {
		self.redirects.len() + self.splat_redirects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
