//! Parameter declarations and the values they carry.

pub mod declaration;
pub mod kind;
pub mod name;
pub mod shape;
pub mod value;

pub use declaration::ParameterDeclaration;
pub use kind::{ParamType, ScalarParam};
pub use name::ParamName;
pub use shape::ParamShape;
pub use value::ParamValue;
