//! Resolution inputs and outputs: overrides in, snapshots out.

pub mod overrides;
pub mod resolved;
pub mod snapshot;

pub use overrides::OverrideMapping;
pub use resolved::{ResolvedParam, ValueSource};
pub use snapshot::ResolvedSnapshot;
