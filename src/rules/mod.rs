//! Redirect compilation and matching.
//!
//! This module handles:
//! - Version placeholder substitution in splat destinations
//! - Capture-token validation and the hosting-format rewrite
//! - Compiling the ordered redirect table
//! - Router-side first-match lookup

pub mod compiler;
pub mod matcher;
pub mod splat;
pub mod table;
pub mod version;

pub use compiler::{compile, compile_rule_set};
pub use matcher::{RedirectMatch, RouteMatcher, find_redirect, route_matchers};
pub use splat::{compile_exact, validate_and_transform};
pub use table::{CompiledRedirect, RedirectStatus, RedirectTable, RouterRedirect};
pub use version::{LATEST_PLACEHOLDER, NEXT_PLACEHOLDER, resolve};
