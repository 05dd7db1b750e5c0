use crate::rules::table::{CompiledRedirect, RedirectStatus, RedirectTable};
use regex::Regex;

/// A table entry prepared for request-time matching.
#[derive(Debug)]
pub struct RouteMatcher<'a> {
	/// The entry this matcher was built from.
	pub redirect: &'a CompiledRedirect,

	/// Splat entries only. Group 1 holds the captured remainder.
	pattern: Option<Regex>,
}

/// The outcome of matching one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectMatch<'a> {
	pub redirect: &'a CompiledRedirect,
	/// The path to redirect to, with any capture filled in.
	pub location: String,
}

impl RedirectMatch<'_> {
	pub fn status(&self) -> RedirectStatus {
		self.redirect.status()
	}
}

impl<'a> RouteMatcher<'a> {
	pub fn new(redirect: &'a CompiledRedirect) -> Self {
		let pattern = redirect.capture().map(|offsets| {
			let prefix = &redirect.source()[..offsets.source];
			let expr = match prefix.strip_suffix('/') {
				// `/a/:x*` matches `/a` as well as `/a/...`
				Some(dir) => format!("^{}(?:/(.*))?$", regex::escape(dir)),
				None => format!("^{}(.*)$", regex::escape(prefix)),
			};
			Regex::new(&expr).expect("escaped route prefix is a valid pattern")
		});

		RouteMatcher { redirect, pattern }
	}

	/// Match a request path, returning the redirect location on success.
	pub fn matches(&self, path: &str) -> Option<String> {
		match (&self.pattern, self.redirect.capture()) {
			(Some(pattern), Some(offsets)) => {
				let captures = pattern.captures(path)?;
				let rest = captures.get(1).map_or("", |m| m.as_str());
				let prefix = &self.redirect.destination()[..offsets.destination];
				if rest.is_empty() {
					let location = prefix.strip_suffix('/').unwrap_or(prefix);
					Some(if location.is_empty() { "/" } else { location }.to_string())
				} else {
					Some(format!("{prefix}{rest}"))
				}
			}
			_ => (path == self.redirect.source()).then(|| self.redirect.destination().to_string()),
		}
	}
}

/// Build matchers for every entry, in table order.
pub fn route_matchers(table: &RedirectTable) -> Vec<RouteMatcher<'_>> {
	table.entries().iter().map(RouteMatcher::new).collect()
}

/// Find the first matching redirect for a path. `None` means the path falls
/// through to normal routing.
pub fn find_redirect<'a>(matchers: &[RouteMatcher<'a>], path: &str) -> Option<RedirectMatch<'a>> {
	matchers.iter().find_map(|matcher| {
		matcher.matches(path).map(|location| RedirectMatch {
			redirect: matcher.redirect,
			location,
		})
	})
}
