//! Hierarchical attribute model for simulation inputs.
//!
//! A [`ModelTraits`] root owns named cases ([`CategoryNode`]), which nest
//! arbitrarily and carry typed boundary-condition values
//! ([`AttributeValue`]). Names are unique per level and insertion is
//! idempotent: adding an existing name returns the node already there.
//!
//! ```
//! use model_traits::{AttributeValue, ModelTraits};
//!
//! let mut model = ModelTraits::new("model");
//! model.add_case("Load1").add_attribute("pressure", 101.3);
//! model.add_case("Load1");
//!
//! assert_eq!(model.num_cases(), 1);
//! let pressure = model.get_case("Load1").and_then(|c| c.get_attribute("pressure"));
//! assert!(matches!(pressure, Some(AttributeValue::Scalar(v)) if **v == 101.3));
//! ```

pub mod backends;
pub mod config;
pub mod domain;
pub mod tree_traits;
pub mod util;

pub use backends::{read_from_file, Backend, BackendKind, ImportError, ImportResult, Importer};
pub use config::Settings;
pub use domain::{
    convert, convert_mut, Attribute, AttributeValue, AttributeVisitor, BoolValue, CategoryNode,
    ConvertExt, Convertible, GenericValue, MatrixValue, ModelTraits, Named, NodeId, NodeSet,
    OrdinalType, OrdinalValue, ScalarType, ScalarValue, StringValue, ValueKind, VectorValue,
    Visitable,
};
pub use tree_traits::TreeNodeConvert;
