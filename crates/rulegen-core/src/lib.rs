pub mod config;
pub mod error;
pub mod format;
pub mod formats;
pub mod frontmatter;
pub mod globs;
pub mod io;
pub mod paths;
pub mod rule;
pub mod tags;
pub mod validate;

pub use error::{Result, RuleError, RuleErrorKind};
pub use format::{DescriptionPolicy, Format, Formats};
pub use rule::{Rule, RuleDocument};
