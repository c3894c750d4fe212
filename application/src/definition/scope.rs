//! Config scope: the registry for one resolution pass.
//!
//! A [`ConfigScope`] is handed explicitly to every declaration call. It
//! resolves each declaration against the pass's [`OverrideMapping`] as soon
//! as it is declared, so a type mismatch aborts the pass at the offending
//! call.

use crate::config::ResolveOptions;
use hyperconf_domain::{
    OverrideMapping, ParamError, ParamName, ParamType, ParamValue, ParameterDeclaration,
    ResolvedParam, UnknownOverridePolicy, ValueSource,
};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Declaration registry for a single resolution pass.
pub struct ConfigScope<'a> {
    overrides: &'a OverrideMapping,
    options: ResolveOptions,
    params: Vec<ResolvedParam>,
    declared: BTreeSet<ParamName>,
    failure: Option<ParamError>,
}

impl<'a> ConfigScope<'a> {
    pub fn new(overrides: &'a OverrideMapping) -> Self {
        Self::with_options(overrides, ResolveOptions::default())
    }

    pub fn with_options(overrides: &'a OverrideMapping, options: ResolveOptions) -> Self {
        Self {
            overrides,
            options,
            params: Vec::new(),
            declared: BTreeSet::new(),
            failure: None,
        }
    }

    /// Register a declaration and resolve it.
    ///
    /// Fails with [`ParamError::DuplicateName`] if the name was already
    /// declared in this pass, or [`ParamError::TypeMismatch`] if the override
    /// does not match the declared shape.
    ///
    /// The first error is kept, and [`ConfigScope::finish`] returns it even
    /// if the definition discarded it.
    pub fn declare(
        &mut self,
        declaration: &ParameterDeclaration,
    ) -> Result<ParamValue, ParamError> {
        self.resolve_declaration(declaration)
            .inspect_err(|e| self.record_failure(e))
    }

    fn record_failure(&mut self, error: &ParamError) {
        if self.failure.is_none() {
            self.failure = Some(error.clone());
        }
    }

    fn resolve_declaration(
        &mut self,
        declaration: &ParameterDeclaration,
    ) -> Result<ParamValue, ParamError> {
        let name = declaration.name();
        if self.declared.contains(name) {
            return Err(ParamError::DuplicateName(name.to_string()));
        }

        debug!(
            "Declared {} ({}) with default {}",
            name,
            declaration.shape(),
            declaration.default_value()
        );

        let (value, source) = declaration.resolve(self.overrides.get(name.as_str()))?;
        if source == ValueSource::Override {
            info!("Applied override for {}: {}", name, value);
        }

        self.declared.insert(name.clone());
        self.params.push(ResolvedParam {
            name: name.clone(),
            shape: declaration.shape(),
            value: value.clone(),
            source,
        });
        Ok(value)
    }

    /// Declare a parameter of any [`ParamType`].
    pub fn param<T: ParamType>(&mut self, name: &str, default: T) -> Result<T, ParamError> {
        let name = ParamName::new(name).inspect_err(|e| self.record_failure(e))?;
        let declaration = ParameterDeclaration::typed(name, default);
        let value = self.declare(&declaration)?;
        T::from_value(value.clone()).ok_or_else(|| {
            ParamError::type_mismatch(declaration.name().as_str(), T::SHAPE, value)
        })
    }

    /// Declare a boolean parameter.
    pub fn bool(&mut self, name: &str, default: bool) -> Result<bool, ParamError> {
        self.param(name, default)
    }

    /// Declare an ordered sequence of booleans. Pass `[]` for an empty default.
    pub fn multi_bool(
        &mut self,
        name: &str,
        default: impl IntoIterator<Item = bool>,
    ) -> Result<Vec<bool>, ParamError> {
        self.param(name, default.into_iter().collect::<Vec<_>>())
    }

    pub fn text(&mut self, name: &str, default: impl Into<String>) -> Result<String, ParamError> {
        self.param(name, default.into())
    }

    pub fn multi_text(
        &mut self,
        name: &str,
        default: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Vec<String>, ParamError> {
        self.param(name, default.into_iter().map(Into::into).collect::<Vec<_>>())
    }

    pub fn int(&mut self, name: &str, default: i64) -> Result<i64, ParamError> {
        self.param(name, default)
    }

    pub fn multi_int(
        &mut self,
        name: &str,
        default: impl IntoIterator<Item = i64>,
    ) -> Result<Vec<i64>, ParamError> {
        self.param(name, default.into_iter().collect::<Vec<_>>())
    }

    pub fn float(&mut self, name: &str, default: f64) -> Result<f64, ParamError> {
        self.param(name, default)
    }

    pub fn multi_float(
        &mut self,
        name: &str,
        default: impl IntoIterator<Item = f64>,
    ) -> Result<Vec<f64>, ParamError> {
        self.param(name, default.into_iter().collect::<Vec<_>>())
    }

    /// Parameters resolved so far, in declaration order.
    pub fn params(&self) -> &[ResolvedParam] {
        &self.params
    }

    /// End the pass and return the resolved parameters.
    ///
    /// Fails with the first declaration error of the pass. Overrides that
    /// name no declared parameter are logged and skipped, or rejected under
    /// [`UnknownOverridePolicy::Reject`].
    pub fn finish(self) -> Result<Vec<ResolvedParam>, ParamError> {
        if let Some(error) = self.failure {
            return Err(error);
        }

        let unknown: Vec<String> = self
            .overrides
            .names()
            .filter(|name| !self.declared.contains(*name))
            .map(str::to_string)
            .collect();

        if !unknown.is_empty() {
            match self.options.unknown_overrides {
                UnknownOverridePolicy::Ignore => {
                    for name in &unknown {
                        warn!("Ignoring override for undeclared parameter '{}'", name);
                    }
                }
                UnknownOverridePolicy::Reject => {
                    return Err(ParamError::UnknownOverride(unknown));
                }
            }
        }

        Ok(self.params)
    }
}
