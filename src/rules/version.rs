use crate::config::env::{VERSION_LATEST_VAR, VERSION_NEXT_VAR, VersionContext};
use crate::config::types::SplatRedirectRule;
use crate::error::{RedirectError, Result};

/// Placeholder replaced by the "latest" documentation version.
pub const LATEST_PLACEHOLDER: &str = "${latest}";

/// Placeholder replaced by the "next" documentation version.
pub const NEXT_PLACEHOLDER: &str = "${next}";

/// Substitute version placeholders in a splat rule's destination.
///
/// Fails if a placeholder is present but its version is unset or empty.
pub fn resolve(rule: &SplatRedirectRule, ctx: &VersionContext) -> Result<SplatRedirectRule> {
	let mut destination = rule.destination.clone();

	for (placeholder, env_var, version) in [
		(LATEST_PLACEHOLDER, VERSION_LATEST_VAR, &ctx.latest),
		(NEXT_PLACEHOLDER, VERSION_NEXT_VAR, &ctx.next),
	] {
		if !destination.contains(placeholder) {
			continue;
		}
		let version = version
			.as_deref()
			.filter(|v| !v.is_empty())
			.ok_or_else(|| RedirectError::MissingVersion {
				placeholder,
				env_var,
				source_path: rule.source.clone(),
			})?;
		if version.chars().any(char::is_whitespace) {
			return Err(RedirectError::InvalidVersion {
				placeholder,
				env_var,
				version: version.to_string(),
				source_path: rule.source.clone(),
			});
		}
		destination = destination.replace(placeholder, version);
	}

	Ok(SplatRedirectRule {
		source: rule.source.clone(),
		destination,
		permanent: rule.permanent,
	})
}

/// Resolve every rule, stopping at the first missing version.
pub fn resolve_all(
	rules: &[SplatRedirectRule],
	ctx: &VersionContext,
) -> Result<Vec<SplatRedirectRule>> {
	rules.iter().map(|rule| resolve(rule, ctx)).collect()
}
