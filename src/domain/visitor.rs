//! Visitor over the closed set of attribute kinds.

use crate::domain::value::{
    BoolValue, MatrixValue, OrdinalValue, ScalarValue, StringValue, VectorValue,
};

/// One method per attribute kind, none of them defaulted.
///
/// Adding a kind to [`AttributeValue`](crate::domain::AttributeValue) means
/// adding a method here, which breaks every implementer until it handles
/// the new kind.
pub trait AttributeVisitor {
    fn visit_bool(&mut self, value: &mut BoolValue);
    fn visit_scalar(&mut self, value: &mut ScalarValue);
    fn visit_string(&mut self, value: &mut StringValue);
    fn visit_ordinal(&mut self, value: &mut OrdinalValue);
    fn visit_vector(&mut self, value: &mut VectorValue);
    fn visit_matrix(&mut self, value: &mut MatrixValue);
}
