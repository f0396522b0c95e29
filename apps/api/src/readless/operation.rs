//! Operation resolution — turns the caller's free-form `operation` string into a typed `Operation`.
//!
//! Resolution is total: every input maps to exactly one operation. Anything unrecognized,
//! including a `rewrite:` prefix with an unknown style, degrades to `Summarize`.

use std::fmt;

const TRANSLATE_PREFIX: &str = "translate:";
const REWRITE_PREFIX: &str = "rewrite:";

/// Style parameter accepted by `rewrite:<style>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteStyle {
    Formal,
    Simple,
}

impl RewriteStyle {
    fn parse(style: &str) -> Option<Self> {
        match style {
            "formal" => Some(RewriteStyle::Formal),
            "simple" => Some(RewriteStyle::Simple),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteStyle::Formal => "formal",
            RewriteStyle::Simple => "simple",
        }
    }
}

/// A text-transformation intent supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Operation {
    #[default]
    Summarize,
    Suggest,
    Bullets,
    Outline,
    Extractive,
    Keywords,
    Tldr,
    Title,
    Qa,
    Expand,
    Shorten,
    DetectLanguage,
    Rewrite(RewriteStyle),
    /// Target language as given by the caller (ISO code or name). May be empty.
    Translate(String),
}

impl Operation {
    /// Resolves a raw operation string. `None` means the caller omitted the field.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Operation::Summarize;
        };
        let op = raw.trim().to_lowercase();

        if let Some(target) = op.strip_prefix(TRANSLATE_PREFIX) {
            return Operation::Translate(target.trim().to_string());
        }

        if let Some(style) = op
            .strip_prefix(REWRITE_PREFIX)
            .and_then(|s| RewriteStyle::parse(s.trim()))
        {
            return Operation::Rewrite(style);
        }

        Self::fixed(&op).unwrap_or_default()
    }

    fn fixed(op: &str) -> Option<Self> {
        let operation = match op {
            "summarize" => Operation::Summarize,
            "suggest" => Operation::Suggest,
            "bullets" => Operation::Bullets,
            "outline" => Operation::Outline,
            "extractive" => Operation::Extractive,
            "keywords" => Operation::Keywords,
            "tldr" => Operation::Tldr,
            "title" => Operation::Title,
            "qa" => Operation::Qa,
            "expand" => Operation::Expand,
            "shorten" => Operation::Shorten,
            "detect-language" => Operation::DetectLanguage,
            _ => return None,
        };
        Some(operation)
    }

    /// Name of the fixed operation, or the prefix for parameterized ones.
    fn name(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Suggest => "suggest",
            Operation::Bullets => "bullets",
            Operation::Outline => "outline",
            Operation::Extractive => "extractive",
            Operation::Keywords => "keywords",
            Operation::Tldr => "tldr",
            Operation::Title => "title",
            Operation::Qa => "qa",
            Operation::Expand => "expand",
            Operation::Shorten => "shorten",
            Operation::DetectLanguage => "detect-language",
            Operation::Rewrite(_) => "rewrite",
            Operation::Translate(_) => "translate",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Rewrite(style) => write!(f, "{REWRITE_PREFIX}{}", style.as_str()),
            Operation::Translate(target) => write!(f, "{TRANSLATE_PREFIX}{target}"),
            other => f.write_str(other.name()),
        }
    }
}
