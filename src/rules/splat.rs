use crate::config::types::{RedirectRule, SplatRedirectRule};
use crate::error::{RedirectError, Result, RuleField};
use crate::rules::table::{CaptureOffsets, CompiledRedirect};
use regex::Regex;
use std::sync::LazyLock;

/// A `:name*` capture token anywhere in a path.
static CAPTURE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r":[A-Za-z0-9_]+\*").expect("capture token pattern is valid")
});

/// Byte offset of the single trailing `:name*` token, if the path has exactly
/// one capture token and it ends the string.
pub fn trailing_capture(path: &str) -> Option<usize> {
	let mut tokens = CAPTURE_TOKEN.find_iter(path);
	let token = tokens.next()?;
	if tokens.next().is_some() || token.end() != path.len() {
		return None;
	}
	Some(token.start())
}

/// Whether a path carries any `:name*` capture token.
pub fn has_capture(path: &str) -> bool {
	CAPTURE_TOKEN.is_match(path)
}

/// Check a version-resolved splat rule and compile it.
///
/// Capture names may differ between source and destination; only the shape
/// is checked.
pub fn validate_and_transform(rule: &SplatRedirectRule) -> Result<CompiledRedirect> {
	rule.validate()?;

	let mismatch = |field| RedirectError::PatternMismatch {
		source_path: rule.source.clone(),
		destination: rule.destination.clone(),
		field,
	};

	let source = trailing_capture(&rule.source).ok_or_else(|| mismatch(RuleField::Source))?;
	let destination =
		trailing_capture(&rule.destination).ok_or_else(|| mismatch(RuleField::Destination))?;

	Ok(CompiledRedirect::splat(
		rule.source.clone(),
		rule.destination.clone(),
		rule.permanent,
		CaptureOffsets {
			source,
			destination,
		},
	))
}

/// Compile an exact rule, rejecting any capture token in it.
pub fn compile_exact(rule: &RedirectRule) -> Result<CompiledRedirect> {
	rule.validate()?;

	for (field, value) in [
		(RuleField::Source, &rule.source),
		(RuleField::Destination, &rule.destination),
	] {
		if has_capture(value) {
			return Err(RedirectError::WildcardInExactRule {
				source_path: rule.source.clone(),
				destination: rule.destination.clone(),
				field,
			});
		}
	}

	Ok(CompiledRedirect::exact(
		rule.source.clone(),
		rule.destination.clone(),
		rule.permanent,
	))
}
