//! Redirect table compiler for a documentation site.
//!
//! This library provides:
//! - Rules file parsing and build settings resolution
//! - Version placeholder substitution and capture-token validation
//! - One compiled table with two views: the request router's and the
//!   static host's `_redirects` file
//! - Writing the `_redirects` file on production builds
//!
//! # Example
//!
//! ```
//! use redirect_table::config::{RedirectRule, SplatRedirectRule, VersionContext};
//! use redirect_table::rules::compile;
//!
//! let exact = [RedirectRule {
//!     source: "/community".to_string(),
//!     destination: "/community/overview".to_string(),
//!     permanent: true,
//! }];
//! let splat = [SplatRedirectRule {
//!     source: "/docs/manual/latest/:slug*".to_string(),
//!     destination: "/docs/manual/${latest}/:slug*".to_string(),
//!     permanent: false,
//! }];
//!
//! let table = compile(&exact, &splat, &VersionContext::new("v11.0.0", "next")).unwrap();
//! assert_eq!(
//!     table.file_table(),
//!     "/community  /community/overview  308\n\
//!      /docs/manual/latest/*  /docs/manual/v11.0.0/:splat  307\n"
//! );
//! ```

pub mod artifact;
pub mod config;
pub mod error;
pub mod rules;

pub use error::{RedirectError, Result};
