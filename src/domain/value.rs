//! Typed attribute values: a closed set of six kinds.
//!
//! [`AttributeValue`] is the sum type stored on category nodes. Code that
//! needs per-kind behaviour either matches on it directly or goes through
//! [`AttributeVisitor`](crate::domain::AttributeVisitor); both are checked
//! for exhaustiveness by the compiler.

use std::any::Any;
use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};

use itertools::Itertools;

use crate::domain::convert::Convertible;
use crate::domain::visitor::AttributeVisitor;

pub type ScalarType = f64;
pub type OrdinalType = i64;

/// Type-safe box around a single value.
///
/// Dereferences to the wrapped value, so reads and writes go straight
/// through without copying.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericValue<T> {
    data: T,
}

impl<T> GenericValue<T> {
    pub const fn new(data: T) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> T {
        self.data
    }
}

impl<T> From<T> for GenericValue<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

impl<T> Deref for GenericValue<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

impl<T> DerefMut for GenericValue<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T> AsRef<T> for GenericValue<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> AsMut<T> for GenericValue<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

impl<T: fmt::Display> fmt::Display for GenericValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.data.fmt(f)
    }
}

pub type BoolValue = GenericValue<bool>;
pub type ScalarValue = GenericValue<ScalarType>;
pub type StringValue = GenericValue<String>;
pub type OrdinalValue = GenericValue<OrdinalType>;

/// Ordered sequence of scalars.
///
/// `value[i]` does not return an error for a bad index: callers validate
/// indices first, and an out-of-range index panics. Use [`get`](Self::get)
/// for a checked read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorValue {
    data: Vec<ScalarType>,
}

impl VectorValue {
    pub fn new(data: Vec<ScalarType>) -> Self {
        Self { data }
    }

    pub fn zeros(len: usize) -> Self {
        Self::new(vec![0.0; len])
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<&ScalarType> {
        self.data.get(i)
    }

    pub fn get_mut(&mut self, i: usize) -> Option<&mut ScalarType> {
        self.data.get_mut(i)
    }

    pub fn as_slice(&self) -> &[ScalarType] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ScalarType> {
        self.data.iter()
    }

    pub fn into_inner(self) -> Vec<ScalarType> {
        self.data
    }
}

impl From<Vec<ScalarType>> for VectorValue {
    fn from(data: Vec<ScalarType>) -> Self {
        Self::new(data)
    }
}

impl Index<usize> for VectorValue {
    type Output = ScalarType;

    fn index(&self, i: usize) -> &ScalarType {
        &self.data[i]
    }
}

impl IndexMut<usize> for VectorValue {
    fn index_mut(&mut self, i: usize) -> &mut ScalarType {
        &mut self.data[i]
    }
}

impl fmt::Display for VectorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.data.iter().join(", "))
    }
}

/// Row-major matrix of scalars, indexed as `value[(row, col)]`.
///
/// Same indexing contract as [`VectorValue`]: pre-validate, or use
/// [`get`](Self::get).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixValue {
    data: Vec<Vec<ScalarType>>,
}

impl MatrixValue {
    pub fn new(data: Vec<Vec<ScalarType>>) -> Self {
        Self { data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(vec![vec![0.0; cols]; rows])
    }

    pub fn rows(&self) -> usize {
        self.data.len()
    }

    /// Column count of the first row; rows are not required to agree.
    pub fn cols(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&ScalarType> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut ScalarType> {
        self.data.get_mut(row).and_then(|r| r.get_mut(col))
    }

    pub fn row(&self, row: usize) -> Option<&[ScalarType]> {
        self.data.get(row).map(Vec::as_slice)
    }

    pub fn into_inner(self) -> Vec<Vec<ScalarType>> {
        self.data
    }
}

impl From<Vec<Vec<ScalarType>>> for MatrixValue {
    fn from(data: Vec<Vec<ScalarType>>) -> Self {
        Self::new(data)
    }
}

impl Index<(usize, usize)> for MatrixValue {
    type Output = ScalarType;

    fn index(&self, (row, col): (usize, usize)) -> &ScalarType {
        &self.data[row][col]
    }
}

impl IndexMut<(usize, usize)> for MatrixValue {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut ScalarType {
        &mut self.data[row][col]
    }
}

impl fmt::Display for MatrixValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self
            .data
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")));
        write!(f, "[{}]", rows.format(", "))
    }
}

/// Fieldless tag for each attribute kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Scalar,
    String,
    Ordinal,
    Vector,
    Matrix,
}

impl ValueKind {
    pub const ALL: [ValueKind; 6] = [
        ValueKind::Bool,
        ValueKind::Scalar,
        ValueKind::String,
        ValueKind::Ordinal,
        ValueKind::Vector,
        ValueKind::Matrix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Bool => "bool",
            ValueKind::Scalar => "scalar",
            ValueKind::String => "string",
            ValueKind::Ordinal => "ordinal",
            ValueKind::Vector => "vector",
            ValueKind::Matrix => "matrix",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One boundary-condition datum.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Bool(BoolValue),
    Scalar(ScalarValue),
    String(StringValue),
    Ordinal(OrdinalValue),
    Vector(VectorValue),
    Matrix(MatrixValue),
}

impl AttributeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            AttributeValue::Bool(_) => ValueKind::Bool,
            AttributeValue::Scalar(_) => ValueKind::Scalar,
            AttributeValue::String(_) => ValueKind::String,
            AttributeValue::Ordinal(_) => ValueKind::Ordinal,
            AttributeValue::Vector(_) => ValueKind::Vector,
            AttributeValue::Matrix(_) => ValueKind::Matrix,
        }
    }

    /// Calls the one visitor method matching the active variant.
    pub fn accept<V: AttributeVisitor + ?Sized>(&mut self, visitor: &mut V) {
        match self {
            AttributeValue::Bool(v) => v.accept(visitor),
            AttributeValue::Scalar(v) => v.accept(visitor),
            AttributeValue::String(v) => v.accept(visitor),
            AttributeValue::Ordinal(v) => v.accept(visitor),
            AttributeValue::Vector(v) => v.accept(visitor),
            AttributeValue::Matrix(v) => v.accept(visitor),
        }
    }
}

/// Conversion targets the active payload, so `as_type::<VectorValue>()`
/// succeeds only on the vector variant.
impl Convertible for AttributeValue {
    fn as_any(&self) -> &dyn Any {
        match self {
            AttributeValue::Bool(v) => v,
            AttributeValue::Scalar(v) => v,
            AttributeValue::String(v) => v,
            AttributeValue::Ordinal(v) => v,
            AttributeValue::Vector(v) => v,
            AttributeValue::Matrix(v) => v,
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        match self {
            AttributeValue::Bool(v) => v,
            AttributeValue::Scalar(v) => v,
            AttributeValue::String(v) => v,
            AttributeValue::Ordinal(v) => v,
            AttributeValue::Vector(v) => v,
            AttributeValue::Matrix(v) => v,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Bool(v) => write!(f, "{v}"),
            AttributeValue::Scalar(v) => write!(f, "{v}"),
            AttributeValue::String(v) => write!(f, "{:?}", v.as_str()),
            AttributeValue::Ordinal(v) => write!(f, "{v}"),
            AttributeValue::Vector(v) => write!(f, "{v}"),
            AttributeValue::Matrix(v) => write!(f, "{v}"),
        }
    }
}

/// Double-dispatch entry point on each concrete value type.
pub trait Visitable {
    fn accept<V: AttributeVisitor + ?Sized>(&mut self, visitor: &mut V);
}

macro_rules! impl_visitable {
    ($($ty:ty => $method:ident),+ $(,)?) => {
        $(
            impl Visitable for $ty {
                fn accept<V: AttributeVisitor + ?Sized>(&mut self, visitor: &mut V) {
                    visitor.$method(self);
                }
            }
        )+
    };
}

impl_visitable! {
    BoolValue => visit_bool,
    ScalarValue => visit_scalar,
    StringValue => visit_string,
    OrdinalValue => visit_ordinal,
    VectorValue => visit_vector,
    MatrixValue => visit_matrix,
}

impl Visitable for AttributeValue {
    fn accept<V: AttributeVisitor + ?Sized>(&mut self, visitor: &mut V) {
        AttributeValue::accept(self, visitor)
    }
}

macro_rules! impl_from_payload {
    ($($payload:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$payload> for AttributeValue {
                fn from(value: $payload) -> Self {
                    AttributeValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_payload! {
    bool => Bool,
    ScalarType => Scalar,
    String => String,
    OrdinalType => Ordinal,
    Vec<ScalarType> => Vector,
    Vec<Vec<ScalarType>> => Matrix,
    BoolValue => Bool,
    ScalarValue => Scalar,
    StringValue => String,
    OrdinalValue => Ordinal,
    VectorValue => Vector,
    MatrixValue => Matrix,
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::String(value.to_string().into())
    }
}
