//! Tests for typed attribute values and visitation

use model_traits::util::testing;
use model_traits::{
    AttributeValue, AttributeVisitor, BoolValue, MatrixValue, OrdinalValue, ScalarValue,
    StringValue, ValueKind, VectorValue, Visitable,
};
use rstest::rstest;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Records which visit method ran.
#[derive(Default)]
struct Recorder {
    calls: Vec<&'static str>,
}

impl AttributeVisitor for Recorder {
    fn visit_bool(&mut self, _: &mut BoolValue) {
        self.calls.push("bool");
    }
    fn visit_scalar(&mut self, _: &mut ScalarValue) {
        self.calls.push("scalar");
    }
    fn visit_string(&mut self, _: &mut StringValue) {
        self.calls.push("string");
    }
    fn visit_ordinal(&mut self, _: &mut OrdinalValue) {
        self.calls.push("ordinal");
    }
    fn visit_vector(&mut self, _: &mut VectorValue) {
        self.calls.push("vector");
    }
    fn visit_matrix(&mut self, _: &mut MatrixValue) {
        self.calls.push("matrix");
    }
}

/// Scales every numeric payload in place.
struct Scale(f64);

impl AttributeVisitor for Scale {
    fn visit_bool(&mut self, _: &mut BoolValue) {}
    fn visit_scalar(&mut self, value: &mut ScalarValue) {
        **value *= self.0;
    }
    fn visit_string(&mut self, _: &mut StringValue) {}
    fn visit_ordinal(&mut self, _: &mut OrdinalValue) {}
    fn visit_vector(&mut self, value: &mut VectorValue) {
        for i in 0..value.len() {
            value[i] *= self.0;
        }
    }
    fn visit_matrix(&mut self, value: &mut MatrixValue) {
        for r in 0..value.rows() {
            for c in 0..value.cols() {
                value[(r, c)] *= self.0;
            }
        }
    }
}

#[rstest]
#[case(AttributeValue::from(true), "bool", ValueKind::Bool)]
#[case(AttributeValue::from(1.5), "scalar", ValueKind::Scalar)]
#[case(AttributeValue::from("steel"), "string", ValueKind::String)]
#[case(AttributeValue::from(7_i64), "ordinal", ValueKind::Ordinal)]
#[case(AttributeValue::from(vec![1.0, 2.0]), "vector", ValueKind::Vector)]
#[case(AttributeValue::from(vec![vec![1.0]]), "matrix", ValueKind::Matrix)]
fn given_each_variant_when_accepting_visitor_then_calls_exactly_matching_method(
    #[case] mut value: AttributeValue,
    #[case] expected: &'static str,
    #[case] kind: ValueKind,
) {
    let mut recorder = Recorder::default();

    value.accept(&mut recorder);

    assert_eq!(recorder.calls, vec![expected]);
    assert_eq!(value.kind(), kind);
    assert_eq!(kind.as_str(), expected);
}

#[test]
fn given_concrete_value_when_accepting_directly_then_dispatches_on_its_type() {
    let mut recorder = Recorder::default();

    VectorValue::zeros(2).accept(&mut recorder);
    BoolValue::new(false).accept(&mut recorder);

    assert_eq!(recorder.calls, vec!["vector", "bool"]);
}

#[test]
fn given_visitor_trait_object_when_accepting_then_dispatches() {
    let mut recorder = Recorder::default();
    let visitor: &mut dyn AttributeVisitor = &mut recorder;

    AttributeValue::from(3_i64).accept(visitor);

    assert_eq!(recorder.calls, vec!["ordinal"]);
}

#[test]
fn given_mutating_visitor_when_accepting_then_payload_changes_in_place() {
    let mut scalar = AttributeValue::from(2.0);
    let mut matrix = AttributeValue::from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);

    scalar.accept(&mut Scale(10.0));
    matrix.accept(&mut Scale(10.0));

    assert_eq!(scalar, AttributeValue::from(20.0));
    assert_eq!(
        matrix,
        AttributeValue::from(vec![vec![10.0, 20.0], vec![30.0, 40.0]])
    );
}

// ============================================================
// Wrapped values
// ============================================================

#[test]
fn given_scalar_when_reading_back_then_bit_identical() {
    let v = 0.1 + 0.2;
    let scalar = ScalarValue::new(v);

    assert_eq!(scalar.to_bits(), v.to_bits());
    assert_eq!(scalar.into_inner().to_bits(), v.to_bits());
}

#[test]
fn given_wrapped_values_when_converting_back_then_exact() {
    let flag = BoolValue::from(true);
    let name = StringValue::from("steel".to_string());
    let count = OrdinalValue::from(-42_i64);

    assert!(*flag);
    assert_eq!(name.as_str(), "steel");
    assert_eq!(*count, -42);
    assert_eq!(AsRef::<i64>::as_ref(&count), &-42);
}

#[test]
fn given_wrapped_value_when_writing_through_deref_then_updates() {
    let mut name = StringValue::from("steel".to_string());

    name.push_str("-304");
    AsMut::<String>::as_mut(&mut name).push('L');

    assert_eq!(name.into_inner(), "steel-304L");
}

// ============================================================
// Vector / matrix storage
// ============================================================

#[test]
fn given_vector_when_writing_element_then_reads_back() {
    let mut v = VectorValue::zeros(3);

    v[1] = 4.5;

    assert_eq!(v[1], 4.5);
    assert_eq!(v.len(), 3);
    assert_eq!(v.as_slice(), &[0.0, 4.5, 0.0]);
}

#[test]
fn given_matrix_when_writing_element_then_reads_back_and_shape_is_kept() {
    let mut m = MatrixValue::zeros(2, 3);

    m[(1, 2)] = -1.25;

    assert_eq!(m[(1, 2)], -1.25);
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m.row(1), Some(&[0.0, 0.0, -1.25][..]));
}

#[test]
fn given_out_of_range_index_when_using_checked_access_then_none() {
    let mut v = VectorValue::new(vec![1.0]);
    let mut m = MatrixValue::new(vec![vec![1.0, 2.0]]);

    assert!(v.get(1).is_none());
    assert!(v.get_mut(5).is_none());
    assert!(m.get(0, 2).is_none());
    assert!(m.get_mut(1, 0).is_none());
    assert_eq!(m.get(0, 1), Some(&2.0));
}

#[test]
#[should_panic]
fn given_out_of_range_index_when_using_unchecked_access_then_panics() {
    let v = VectorValue::zeros(2);
    let _value: f64 = v[2];
}
