use crate::config::env::VersionContext;
use crate::config::types::{RedirectRule, RuleSet, SplatRedirectRule};
use crate::error::Result;
use crate::rules::splat::{compile_exact, validate_and_transform};
use crate::rules::table::RedirectTable;
use crate::rules::version;

/// Compile exact and splat rules into one ordered table.
///
/// Splat rules go through version resolution and then capture validation.
/// Any error aborts the whole compile; no partial table is returned.
/// The result depends only on the arguments.
pub fn compile(
	exact: &[RedirectRule],
	splat: &[SplatRedirectRule],
	ctx: &VersionContext,
) -> Result<RedirectTable> {
	let mut entries = Vec::with_capacity(exact.len() + splat.len());

	for rule in exact {
		entries.push(compile_exact(rule)?);
	}

	for rule in version::resolve_all(splat, ctx)? {
		entries.push(validate_and_transform(&rule)?);
	}

	tracing::debug!(
		exact = exact.len(),
		splat = splat.len(),
		"Compiled redirect table"
	);

	Ok(RedirectTable::new(entries))
}

/// Compile every rule in a rule set.
pub fn compile_rule_set(rules: &RuleSet, ctx: &VersionContext) -> Result<RedirectTable> {
	compile(&rules.redirects, &rules.splat_redirects, ctx)
}
