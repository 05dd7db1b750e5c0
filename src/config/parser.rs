use crate::config::types::{LoadedRuleSet, RuleSet};
use crate::error::{RedirectError, Result};
use std::path::Path;

/// The documentation site's own rules, shipped with the binary.
pub const BUILTIN_RULES: &str = include_str!("../rules/builtin.toml");

/// Parse a rules file from the given path.
pub fn parse_rules_file(path: &Path) -> Result<RuleSet> {
	let content = std::fs::read_to_string(path).map_err(|source| RedirectError::RulesRead {
		path: path.to_path_buf(),
		source,
	})?;

	parse_rules_str(&content, path)
}

/// Parse a rule set from a string (useful for testing).
pub fn parse_rules_str(content: &str, path: &Path) -> Result<RuleSet> {
	let rules: RuleSet = toml::from_str(content).map_err(|source| RedirectError::RulesParse {
		path: path.to_path_buf(),
		source,
	})?;

	rules.validate()?;

	Ok(rules)
}

/// Parse the built-in rule set.
pub fn builtin_rules() -> Result<RuleSet> {
	parse_rules_str(BUILTIN_RULES, Path::new("<builtin>"))
}

/// Load the rules file at `path`, or the built-in rules when no path is given.
pub fn load_rules(path: Option<&Path>) -> Result<LoadedRuleSet> {
	match path {
		Some(path) => Ok(LoadedRuleSet {
			rules: parse_rules_file(path)?,
			path: Some(path.to_path_buf()),
		}),
		None => Ok(LoadedRuleSet {
			rules: builtin_rules()?,
			path: None,
		}),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::types::{RedirectRule, SplatRedirectRule};
	use std::path::PathBuf;

	#[test]
	fn test_parse_empty_rules() {
		let path = PathBuf::from("redirects.toml");
		let rules = parse_rules_str("", &path).unwrap();

		assert!(rules.is_empty());
		assert!(rules.versions.latest.is_none());
		assert!(rules.versions.next.is_none());
		assert!(rules.output.is_none());
	}

	#[test]
	fn test_parse_array_of_tables_keeps_order() {
		let content = r#"
output = "public/_redirects"

[versions]
latest = "v11.0.0"

[[redirects]]
source = "/community"
destination = "/community/overview"
permanent = true

[[redirects]]
source = "/try"
destination = "/playground"
permanent = false

[[splat-redirects]]
source = "/docs/manual/latest/:slug*"
destination = "/docs/manual/${latest}/:slug*"
permanent = false
"#;
		let path = PathBuf::from("redirects.toml");
		let rules = parse_rules_str(content, &path).unwrap();

		assert_eq!(rules.output, Some(PathBuf::from("public/_redirects")));
		assert_eq!(rules.versions.latest.as_deref(), Some("v11.0.0"));
		assert_eq!(
			rules.redirects,
			vec![
				RedirectRule {
					source: "/community".to_string(),
					destination: "/community/overview".to_string(),
					permanent: true,
				},
				RedirectRule {
					source: "/try".to_string(),
					destination: "/playground".to_string(),
					permanent: false,
				},
			]
		);
		assert_eq!(
			rules.splat_redirects,
			vec![SplatRedirectRule {
				source: "/docs/manual/latest/:slug*".to_string(),
				destination: "/docs/manual/${latest}/:slug*".to_string(),
				permanent: false,
			}]
		);
	}

	#[test]
	fn test_missing_permanent_is_parse_error() {
		let content = r#"
[[redirects]]
source = "/a"
destination = "/b"
"#;
		let path = PathBuf::from("redirects.toml");
		match parse_rules_str(content, &path).unwrap_err() {
			RedirectError::RulesParse { path, .. } => {
				assert_eq!(path, PathBuf::from("redirects.toml"));
			}
			other => panic!("Expected RulesParse error, got {other:?}"),
		}
	}

	#[test]
	fn test_relative_source_is_rejected() {
		let content = r#"
[[splat-redirects]]
source = "docs/:slug*"
destination = "/manual/:slug*"
permanent = false
"#;
		let path = PathBuf::from("redirects.toml");
		match parse_rules_str(content, &path).unwrap_err() {
			RedirectError::InvalidRule { source_path, .. } => {
				assert_eq!(source_path, "docs/:slug*");
			}
			other => panic!("Expected InvalidRule error, got {other:?}"),
		}
	}

	#[test]
	fn test_whitespace_in_destination_is_rejected() {
		let content = r#"
[[redirects]]
source = "/a"
destination = "/b /c"
permanent = true
"#;
		let path = PathBuf::from("redirects.toml");
		match parse_rules_str(content, &path).unwrap_err() {
			RedirectError::InvalidRule { reason, .. } => {
				assert_eq!(reason, "destination contains whitespace");
			}
			other => panic!("Expected InvalidRule error, got {other:?}"),
		}
	}

	#[test]
	fn test_builtin_rules_parse() {
		let rules = builtin_rules().unwrap();

		assert_eq!(rules.redirects.len(), 8);
		assert_eq!(rules.splat_redirects.len(), 4);
		assert_eq!(rules.redirects[0].source, "/community");
		assert!(
			rules
				.splat_redirects
				.iter()
				.all(|rule| rule.destination.contains("${"))
		);
	}

	#[test]
	fn test_load_rules_missing_file() {
		let result = load_rules(Some(Path::new("/nonexistent/redirects.toml")));
		assert!(matches!(result, Err(RedirectError::RulesRead { .. })));
	}
}
