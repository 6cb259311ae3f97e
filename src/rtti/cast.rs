//! Checked narrowing of reflected objects.

use log::trace;

use super::arena::{TypeId, TypeTable};
use super::error::RttiError;

/// An object that knows its runtime descriptor.
///
/// # Safety
///
/// [`rtti`](Self::rtti) must name the descriptor of the object found at `self`'s address,
/// and that object must be laid out as the descriptor describes for as long as `self` is
/// borrowed. [`TypeTable::cast`] reinterprets `self` on the strength of this answer.
pub unsafe trait RttiObject {
    fn rtti(&self) -> TypeId;
}

/// A Rust view type bound to a descriptor symbol.
///
/// # Safety
///
/// Implementors guarantee that every object whose runtime descriptor is a kind of the
/// descriptor named [`SYMBOL`](Self::SYMBOL) begins with a valid `Self` at its address.
pub unsafe trait Reflected {
    const SYMBOL: &'static str;
}

impl TypeTable {
    /// Reinterprets `object` as `T` when its descriptor is a kind of `T`'s descriptor.
    ///
    /// The returned reference has the same address as `object`. `None` means the object is
    /// not that kind of object, or `T::SYMBOL` is not described by this table.
    pub fn cast<'object, T, U>(&self, object: &'object U) -> Option<&'object T>
    where
        T: Reflected,
        U: RttiObject + ?Sized,
    {
        let Some(target) = self.lookup_symbol(T::SYMBOL) else {
            trace!("cast target '{}' is not described by the table", T::SYMBOL);
            return None;
        };
        let actual = object.rtti();
        if !self.is_kind_of(actual, target) {
            trace!("{actual:?} is not a kind of '{}'", T::SYMBOL);
            return None;
        }
        let ptr = (object as *const U).cast::<T>();
        // SAFETY: `RttiObject` guarantees `object` is laid out as `actual` describes, the
        // check above makes `actual` a kind of `T::SYMBOL`, and `Reflected` guarantees every
        // such object begins with a valid `T`.
        Some(unsafe { &*ptr })
    }

    /// Unchecked narrowing by search. Not supported.
    ///
    /// # Panics
    ///
    /// Always.
    pub fn dynamic_cast<'object, T, U>(&self, _object: &'object U) -> Option<&'object T>
    where
        T: Reflected,
        U: RttiObject + ?Sized,
    {
        panic!("{}", RttiError::DynamicCastUnsupported)
    }
}
