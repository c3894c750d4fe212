//! Call-site naming for declarations.

/// Declare a parameter named after the binding it is assigned to.
///
/// `declare!(hp, bool stream = true);` expands to
/// `let stream = hp.bool("stream", true)?;`. Any [`ConfigScope`] method
/// taking `(name, default)` can be used, and several declarations may be
/// separated by `;`.
///
/// [`ConfigScope`]: crate::ConfigScope
///
/// ```
/// use hyperconf_application::{declare, Hyperconfig};
///
/// let config = Hyperconfig::new("training", |hp| {
///     declare!(hp, bool stream = true; multi_bool layer_trainable = [true, false]);
///     Ok((stream, layer_trainable))
/// });
/// let resolved = config.resolve_defaults().unwrap();
/// assert_eq!(resolved.output(), &(true, vec![true, false]));
/// assert!(resolved.snapshot().get("layer_trainable").is_some());
/// ```
#[macro_export]
macro_rules! declare {
    ($scope:expr, $($method:ident $name:ident = $default:expr);+ $(;)?) => {
        $(
            let $name = $scope.$method(stringify!($name), $default)?;
        )+
    };
}
