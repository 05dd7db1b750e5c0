use std::borrow::Cow;
use std::fmt;

/// Source-side wildcard in the hosting redirects format.
pub const HOSTING_WILDCARD: &str = "*";

/// Destination-side back-reference in the hosting redirects format.
pub const HOSTING_SPLAT: &str = ":splat";

/// HTTP redirect semantics selected by a rule's `permanent` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
	/// 308 Permanent Redirect.
	Permanent,
	/// 307 Temporary Redirect.
	Temporary,
}

impl RedirectStatus {
	/// 308 when `permanent`, 307 otherwise.
	pub fn from_permanent(permanent: bool) -> Self {
		if permanent {
			RedirectStatus::Permanent
		} else {
			RedirectStatus::Temporary
		}
	}

	/// The numeric HTTP status written to the hosting file.
	pub fn code(self) -> u16 {
		match self {
			RedirectStatus::Permanent => 308,
			RedirectStatus::Temporary => 307,
		}
	}

	/// Whether this is the 308 variant.
	pub fn is_permanent(self) -> bool {
		self == RedirectStatus::Permanent
	}
}

impl fmt::Display for RedirectStatus {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.code())
	}
}

/// Byte offsets where the trailing `:name*` token starts in each field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CaptureOffsets {
	pub source: usize,
	pub destination: usize,
}

/// One validated redirect, in the router's own pattern dialect.
///
/// The hosting-file form is derived on demand, so both consumers read the
/// same validated value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledRedirect {
	source: String,
	destination: String,
	status: RedirectStatus,
	capture: Option<CaptureOffsets>,
}

/// A redirect as handed to the request router: the boolean, not the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterRedirect<'a> {
	pub source: &'a str,
	pub destination: &'a str,
	pub permanent: bool,
}

impl CompiledRedirect {
	pub(crate) fn exact(source: String, destination: String, permanent: bool) -> Self {
		CompiledRedirect {
			source,
			destination,
			status: RedirectStatus::from_permanent(permanent),
			capture: None,
		}
	}

	pub(crate) fn splat(
		source: String,
		destination: String,
		permanent: bool,
		capture: CaptureOffsets,
	) -> Self {
		CompiledRedirect {
			source,
			destination,
			status: RedirectStatus::from_permanent(permanent),
			capture: Some(capture),
		}
	}

	/// Source in router syntax (`:name*` kept).
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Destination in router syntax, versions already substituted.
	pub fn destination(&self) -> &str {
		&self.destination
	}

	pub fn status(&self) -> RedirectStatus {
		self.status
	}

	pub fn permanent(&self) -> bool {
		self.status.is_permanent()
	}

	pub fn is_splat(&self) -> bool {
		self.capture.is_some()
	}

	pub(crate) fn capture(&self) -> Option<CaptureOffsets> {
		self.capture
	}

	pub fn router_entry(&self) -> RouterRedirect<'_> {
		RouterRedirect {
			source: &self.source,
			destination: &self.destination,
			permanent: self.permanent(),
		}
	}

	/// Source with the trailing capture rewritten to `*`.
	pub fn hosting_source(&self) -> Cow<'_, str> {
		match self.capture {
			Some(offsets) => {
				Cow::Owned(format!("{}{}", &self.source[..offsets.source], HOSTING_WILDCARD))
			}
			None => Cow::Borrowed(&self.source),
		}
	}

	/// Destination with the trailing capture rewritten to `:splat`.
	pub fn hosting_destination(&self) -> Cow<'_, str> {
		match self.capture {
			Some(offsets) => Cow::Owned(format!(
				"{}{}",
				&self.destination[..offsets.destination],
				HOSTING_SPLAT
			)),
			None => Cow::Borrowed(&self.destination),
		}
	}

	/// One line of the hosting redirects file, without the newline.
	pub fn hosting_line(&self) -> String {
		format!(
			"{}  {}  {}",
			self.hosting_source(),
			self.hosting_destination(),
			self.status
		)
	}
}

/// Compiled redirects in match order: exact rules, then splat rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedirectTable {
	entries: Vec<CompiledRedirect>,
}

impl RedirectTable {
	pub(crate) fn new(entries: Vec<CompiledRedirect>) -> Self {
		RedirectTable { entries }
	}

	pub fn entries(&self) -> &[CompiledRedirect] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// The table in the request router's form.
	pub fn router_table(&self) -> Vec<RouterRedirect<'_>> {
		self.entries.iter().map(CompiledRedirect::router_entry).collect()
	}

	/// The hosting redirects file: one newline-terminated line per rule.
	pub fn file_table(&self) -> String {
		let mut out = String::new();
		for entry in &self.entries {
			out.push_str(&entry.hosting_line());
			out.push('\n');
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_codes() {
		assert_eq!(RedirectStatus::from_permanent(true).code(), 308);
		assert_eq!(RedirectStatus::from_permanent(false).code(), 307);
		assert_eq!(RedirectStatus::Permanent.to_string(), "308");
	}

	#[test]
	fn test_exact_views_are_identical() {
		let entry = CompiledRedirect::exact("/community".into(), "/community/overview".into(), true);

		assert_eq!(entry.hosting_source(), "/community");
		assert_eq!(entry.hosting_destination(), "/community/overview");
		assert_eq!(entry.hosting_line(), "/community  /community/overview  308");
		assert_eq!(
			entry.router_entry(),
			RouterRedirect {
				source: "/community",
				destination: "/community/overview",
				permanent: true,
			}
		);
	}

	#[test]
	fn test_splat_views_differ() {
		let entry = CompiledRedirect::splat(
			"/a/:x*".into(),
			"/b/v10.0.0/:x*".into(),
			false,
			CaptureOffsets {
				source: 3,
				destination: 11,
			},
		);

		assert_eq!(entry.source(), "/a/:x*");
		assert_eq!(entry.destination(), "/b/v10.0.0/:x*");
		assert_eq!(entry.hosting_line(), "/a/*  /b/v10.0.0/:splat  307");
	}

	#[test]
	fn test_empty_table_has_empty_file() {
		assert_eq!(RedirectTable::default().file_table(), "");
	}
}
