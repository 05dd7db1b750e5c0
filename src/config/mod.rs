//! Configuration for redirect builds.
//!
//! This module handles:
//! - TOML rules file parsing (and the built-in rule set)
//! - Build settings from CLI flags, environment variables and file fallbacks

pub mod env;
pub mod parser;
pub mod types;

pub use env::{BuildMode, BuildOverrides, BuildSettings, VersionContext};
pub use parser::{BUILTIN_RULES, builtin_rules, load_rules, parse_rules_file, parse_rules_str};
pub use types::{LoadedRuleSet, RedirectRule, RuleSet, SplatRedirectRule, VersionDefaults};
