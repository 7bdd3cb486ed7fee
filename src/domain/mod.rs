//! Domain layer: the case tree and its typed attribute values
//!
//! This layer is independent of external concerns (no I/O, no config loading).

pub mod category;
pub mod convert;
pub mod model;
pub mod node_set;
pub mod value;
pub mod visitor;

pub use category::{Attribute, CategoryNode};
pub use convert::{convert, convert_mut, ConvertExt, Convertible};
pub use model::ModelTraits;
pub use node_set::{Named, NodeId, NodeSet};
pub use value::{
    AttributeValue, BoolValue, GenericValue, MatrixValue, OrdinalType, OrdinalValue, ScalarType,
    ScalarValue, StringValue, ValueKind, VectorValue, Visitable,
};
pub use visitor::AttributeVisitor;
