//! Options controlling a resolution pass.

use hyperconf_domain::UnknownOverridePolicy;

/// Resolution behaviour shared by every pass of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveOptions {
    /// What to do with overrides for names the definition never declares.
    pub unknown_overrides: UnknownOverridePolicy,
}

impl ResolveOptions {
    /// Options that reject overrides for undeclared parameters.
    pub fn strict() -> Self {
        Self {
            unknown_overrides: UnknownOverridePolicy::Reject,
        }
    }

    pub fn with_unknown_overrides(mut self, policy: UnknownOverridePolicy) -> Self {
        self.unknown_overrides = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ignores_unknown_overrides() {
        let options = ResolveOptions::default();
        assert_eq!(options.unknown_overrides, UnknownOverridePolicy::Ignore);
    }

    #[test]
    fn test_strict() {
        assert_eq!(
            ResolveOptions::strict().unknown_overrides,
            UnknownOverridePolicy::Reject
        );
    }
}
