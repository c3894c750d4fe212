//! Policy for overrides that name no declared parameter

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a resolution pass does with overrides for undeclared names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownOverridePolicy {
    /// Log and skip them (default)
    #[default]
    Ignore,
    /// Fail the pass with `ParamError::UnknownOverride`
    Reject,
}

impl UnknownOverridePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnknownOverridePolicy::Ignore => "ignore",
            UnknownOverridePolicy::Reject => "reject",
        }
    }
}

impl FromStr for UnknownOverridePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ignore" => Ok(UnknownOverridePolicy::Ignore),
            "reject" => Ok(UnknownOverridePolicy::Reject),
            other => Err(format!("unknown override policy '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ignore() {
        assert_eq!(UnknownOverridePolicy::default(), UnknownOverridePolicy::Ignore);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "reject".parse::<UnknownOverridePolicy>(),
            Ok(UnknownOverridePolicy::Reject)
        );
        assert!("strict".parse::<UnknownOverridePolicy>().is_err());
    }
}
