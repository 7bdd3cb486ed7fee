//! Checked downcasting shared by the model, category and value types.
//!
//! A type opts in by implementing [`Convertible`]; every implementer then
//! gets [`ConvertExt::as_type`] and friends. A mismatch yields `None`.

use std::any::Any;

/// Exposes the concrete runtime type of a node for checked conversion.
pub trait Convertible {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Safe downcast of a [`Convertible`] trait object.
///
/// Returns `Some(&T)` only if the node's concrete type is `T`.
pub fn convert<T: Any>(node: &dyn Convertible) -> Option<&T> {
    node.as_any().downcast_ref::<T>()
}

/// Mutable version of [`convert`].
pub fn convert_mut<T: Any>(node: &mut dyn Convertible) -> Option<&mut T> {
    node.as_any_mut().downcast_mut::<T>()
}

/// Method-call form of [`convert`], available on every [`Convertible`].
pub trait ConvertExt: Convertible {
    fn as_type<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    fn as_type_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    fn is_type<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }
}

impl<C: Convertible + ?Sized> ConvertExt for C {}

/// Implements [`Convertible`] for types that are their own concrete type.
macro_rules! impl_convertible {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::domain::convert::Convertible for $ty {
                fn as_any(&self) -> &dyn ::std::any::Any {
                    self
                }

                fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                    self
                }
            }
        )+
    };
}

pub(crate) use impl_convertible;
