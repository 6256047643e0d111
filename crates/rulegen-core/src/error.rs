use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("rule name cannot be empty")]
    EmptyName,

    #[error("rule name must be 1-{max} characters, got {len}")]
    NameTooLong { len: usize, max: usize },

    #[error(
        "rule name '{0}' is invalid: must be lowercase alphanumeric with single hyphen separators (regex: ^[a-z0-9]+(-[a-z0-9]+)*$)"
    )]
    InvalidNameFormat(String),

    #[error("rule description cannot be empty")]
    EmptyDescription,

    #[error("rule description must be 1-{max} characters, got {len}")]
    DescriptionTooLong { len: usize, max: usize },

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("missing frontmatter in rule document: {0}")]
    MissingFrontmatter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// Discriminant of [`RuleError`], for matching on the violated rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleErrorKind {
    EmptyName,
    NameTooLong,
    InvalidNameFormat,
    EmptyDescription,
    DescriptionTooLong,
    UnknownFormat,
    MissingFrontmatter,
    Io,
    Yaml,
}

impl RuleError {
    pub fn kind(&self) -> RuleErrorKind {
        match self {
            RuleError::EmptyName => RuleErrorKind::EmptyName,
            RuleError::NameTooLong { .. } => RuleErrorKind::NameTooLong,
            RuleError::InvalidNameFormat(_) => RuleErrorKind::InvalidNameFormat,
            RuleError::EmptyDescription => RuleErrorKind::EmptyDescription,
            RuleError::DescriptionTooLong { .. } => RuleErrorKind::DescriptionTooLong,
            RuleError::UnknownFormat(_) => RuleErrorKind::UnknownFormat,
            RuleError::MissingFrontmatter(_) => RuleErrorKind::MissingFrontmatter,
            RuleError::Io(_) => RuleErrorKind::Io,
            RuleError::Yaml(_) => RuleErrorKind::Yaml,
        }
    }
}

pub type Result<T> = std::result::Result<T, RuleError>;
