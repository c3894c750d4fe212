//! Configuration definitions and their resolved results.

use super::scope::ConfigScope;
use crate::config::ResolveOptions;
use hyperconf_domain::{OverrideMapping, ParamError, ResolvedParam, ResolvedSnapshot, ValueSource};
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// A configuration definition that can be resolved any number of times.
///
/// The definition is a function over an explicit [`ConfigScope`]; each call
/// to [`Hyperconfig::resolve`] runs it against a fresh scope, so passes never
/// share declaration state. The snapshot of the last successful pass is kept
/// for replay.
///
/// ```
/// use hyperconf_application::Hyperconfig;
/// use hyperconf_domain::OverrideMapping;
///
/// let config = Hyperconfig::new("training", |hp| {
///     let stream = hp.bool("stream", true)?;
///     let layer_trainable = hp.multi_bool("layer_trainable", [true, true, false])?;
///     Ok((stream, layer_trainable))
/// });
///
/// let resolved = config
///     .resolve(&OverrideMapping::new().with("stream", false))
///     .unwrap();
/// assert_eq!(resolved.output(), &(false, vec![true, true, false]));
///
/// let replayed = config
///     .resolve(&config.last_snapshot().unwrap().into_overrides())
///     .unwrap();
/// assert_eq!(replayed, resolved);
/// ```
pub struct Hyperconfig<F> {
    name: String,
    define: F,
    options: ResolveOptions,
    last_snapshot: Mutex<Option<ResolvedSnapshot>>,
}

impl<F> Hyperconfig<F> {
    pub fn new<T>(name: impl Into<String>, define: F) -> Self
    where
        F: Fn(&mut ConfigScope<'_>) -> Result<T, ParamError>,
    {
        Self {
            name: name.into(),
            define,
            options: ResolveOptions::default(),
            last_snapshot: Mutex::new(None),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Snapshot of the last successful resolution pass, if any.
    pub fn last_snapshot(&self) -> Option<ResolvedSnapshot> {
        self.last_snapshot.lock().ok().and_then(|guard| guard.clone())
    }
}

impl<F, T> Hyperconfig<F>
where
    F: Fn(&mut ConfigScope<'_>) -> Result<T, ParamError>,
{
    /// Run one resolution pass with the given overrides.
    ///
    /// Any error aborts the pass; the last snapshot is only replaced on
    /// success.
    pub fn resolve(&self, values: &OverrideMapping) -> Result<ResolvedConfig<T>, ParamError> {
        info!(
            "Resolving configuration '{}' with {} override(s)",
            self.name,
            values.len()
        );

        let mut scope = ConfigScope::with_options(values, self.options.clone());
        let output = (self.define)(&mut scope).inspect_err(|e| {
            warn!("Resolution of '{}' failed: {}", self.name, e);
        })?;
        let params = scope.finish()?;
        let snapshot: ResolvedSnapshot = params.iter().collect();

        debug!(
            "Resolved '{}': {} parameter(s)",
            self.name,
            snapshot.len()
        );

        if let Ok(mut last) = self.last_snapshot.lock() {
            *last = Some(snapshot.clone());
        }

        Ok(ResolvedConfig {
            output,
            params,
            snapshot,
        })
    }

    /// Resolve with every parameter at its default.
    pub fn resolve_defaults(&self) -> Result<ResolvedConfig<T>, ParamError> {
        self.resolve(&OverrideMapping::new())
    }
}

/// The result of one resolution pass.
#[derive(Debug, Clone)]
pub struct ResolvedConfig<T> {
    output: T,
    params: Vec<ResolvedParam>,
    snapshot: ResolvedSnapshot,
}

impl<T> ResolvedConfig<T> {
    /// Whatever the definition returned.
    pub fn output(&self) -> &T {
        &self.output
    }

    pub fn into_output(self) -> T {
        self.output
    }

    /// Resolved parameters in declaration order.
    pub fn params(&self) -> &[ResolvedParam] {
        &self.params
    }

    pub fn snapshot(&self) -> &ResolvedSnapshot {
        &self.snapshot
    }

    pub fn overridden(&self) -> impl Iterator<Item = &ResolvedParam> {
        self.params
            .iter()
            .filter(|p| p.source == ValueSource::Override)
    }

    /// Split into the parts the snapshot and presentation layers need.
    pub fn into_parts(self) -> (T, Vec<ResolvedParam>, ResolvedSnapshot) {
        (self.output, self.params, self.snapshot)
    }
}

/// Configurations are equal when they resolve to the same values.
///
/// Value sources are not compared: replaying a snapshot turns every default
/// into an override without changing what was resolved.
impl<T: PartialEq> PartialEq for ResolvedConfig<T> {
    fn eq(&self, other: &Self) -> bool {
        self.output == other.output && self.snapshot == other.snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyperconf_domain::ParamShape;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    struct Training {
        stream: bool,
        layer_trainable: Vec<bool>,
    }

    fn training() -> Hyperconfig<impl Fn(&mut ConfigScope<'_>) -> Result<Training, ParamError>> {
        Hyperconfig::new("training", |hp: &mut ConfigScope<'_>| {
            Ok(Training {
                stream: hp.bool("stream", true)?,
                layer_trainable: hp.multi_bool("layer_trainable", [true, true, false])?,
            })
        })
    }

    #[test]
    fn test_resolve_defaults() {
        let resolved = training().resolve_defaults().unwrap();
        assert_eq!(
            resolved.output(),
            &Training {
                stream: true,
                layer_trainable: vec![true, true, false],
            }
        );
        assert_eq!(resolved.overridden().count(), 0);
    }

    #[test]
    fn test_resolve_overrides() {
        let config = training();
        let resolved = config
            .resolve(
                &OverrideMapping::new()
                    .with("stream", false)
                    .with("layer_trainable", vec![false, true, true]),
            )
            .unwrap();
        assert!(!resolved.output().stream);
        assert_eq!(resolved.output().layer_trainable, vec![false, true, true]);
        assert_eq!(resolved.overridden().count(), 2);
    }

    #[test]
    fn test_type_mismatch_aborts_pass() {
        let config = training();
        let err = config
            .resolve(&OverrideMapping::new().with("stream", "true"))
            .unwrap_err();
        assert_eq!(
            err,
            ParamError::type_mismatch("stream", ParamShape::Bool, "true".into())
        );
        assert!(config.last_snapshot().is_none());

        let err = config
            .resolve(&OverrideMapping::new().with("layer_trainable", vec![1i64, 0]))
            .unwrap_err();
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_discarded_mismatch_still_fails_pass() {
        let config = Hyperconfig::new("lenient", |hp| Ok(hp.bool("stream", true).unwrap_or(true)));
        let err = config
            .resolve(&OverrideMapping::new().with("stream", "true"))
            .unwrap_err();
        assert_eq!(
            err,
            ParamError::type_mismatch("stream", ParamShape::Bool, "true".into())
        );
        assert!(config.last_snapshot().is_none());
    }

    #[test]
    fn test_failed_pass_keeps_previous_snapshot() {
        let config = training();
        config
            .resolve(&OverrideMapping::new().with("stream", false))
            .unwrap();
        let before = config.last_snapshot().unwrap();

        assert!(
            config
                .resolve(&OverrideMapping::new().with("stream", 0i64))
                .is_err()
        );
        assert_eq!(config.last_snapshot(), Some(before));
    }

    #[test]
    fn test_snapshot_replay_reproduces_configuration() {
        let config = training();
        let first = config
            .resolve(&OverrideMapping::new().with("layer_trainable", vec![false]))
            .unwrap();

        let snapshot = config.last_snapshot().unwrap();
        assert_eq!(&snapshot, first.snapshot());

        let replayed = config.resolve(&snapshot.into_overrides()).unwrap();
        assert_eq!(replayed, first);
        assert_eq!(replayed.overridden().count(), 2);
    }

    #[test]
    fn test_snapshot_replay_through_json() {
        let config = training();
        let first = config
            .resolve(&OverrideMapping::new().with("stream", false))
            .unwrap();

        let json = serde_json::to_string(&config.last_snapshot().unwrap()).unwrap();
        let values: OverrideMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(config.resolve(&values).unwrap(), first);
    }

    #[test]
    fn test_strict_options() {
        let config = training().with_options(ResolveOptions::strict());
        let err = config
            .resolve(&OverrideMapping::new().with("streaming", false))
            .unwrap_err();
        assert_eq!(err, ParamError::UnknownOverride(vec!["streaming".to_string()]));
    }

    #[test]
    fn test_passes_on_separate_threads() {
        let config = Arc::new(training());
        let handles: Vec<_> = [true, false]
            .into_iter()
            .map(|stream| {
                let config = Arc::clone(&config);
                std::thread::spawn(move || {
                    config
                        .resolve(&OverrideMapping::new().with("stream", stream))
                        .unwrap()
                        .into_output()
                        .stream
                })
            })
            .collect();
        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false]);
    }
}
