//! Manifest: a configuration defined by data instead of code.

use super::hyperconfig::Hyperconfig;
use super::scope::ConfigScope;
use hyperconf_domain::{ParamError, ParameterDeclaration};
use std::collections::BTreeSet;

/// A named, ordered list of parameter declarations.
///
/// Infrastructure loads these from manifest files; resolving one declares
/// every entry in order against the pass's scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    name: String,
    declarations: Vec<ParameterDeclaration>,
}

impl Manifest {
    /// Fails with [`ParamError::DuplicateName`] on a repeated name.
    pub fn new(
        name: impl Into<String>,
        declarations: Vec<ParameterDeclaration>,
    ) -> Result<Self, ParamError> {
        let mut seen = BTreeSet::new();
        for declaration in &declarations {
            if !seen.insert(declaration.name().as_str()) {
                return Err(ParamError::DuplicateName(declaration.name().to_string()));
            }
        }
        Ok(Self {
            name: name.into(),
            declarations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn declarations(&self) -> &[ParameterDeclaration] {
        &self.declarations
    }

    pub fn get(&self, name: &str) -> Option<&ParameterDeclaration> {
        self.declarations
            .iter()
            .find(|d| d.name().as_str() == name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Declare every entry in order.
    pub fn define(&self, hp: &mut ConfigScope<'_>) -> Result<(), ParamError> {
        for declaration in &self.declarations {
            hp.declare(declaration)?;
        }
        Ok(())
    }

    /// Turn the manifest into a resolvable configuration.
    pub fn into_hyperconfig(
        self,
    ) -> Hyperconfig<impl Fn(&mut ConfigScope<'_>) -> Result<(), ParamError>> {
        let name = self.name.clone();
        Hyperconfig::new(name, move |hp: &mut ConfigScope<'_>| self.define(hp))
    }
}
