//! Kind-of queries over descriptors.

use super::arena::{TypeId, TypeTable};
use super::record::TypeInfo;

impl TypeTable {
    /// Descriptors are deduplicated by the producer, so identity is handle equality.
    pub fn is_exact_kind_of(&self, ty: TypeId, other: TypeId) -> bool {
        ty == other
    }

    /// `ty` is `other`, or inherits from it: any class base (depth-first, table order)
    /// or the parent chain of a primitive. Handles this table never issued are a kind of
    /// nothing but themselves.
    pub fn is_kind_of(&self, ty: TypeId, other: TypeId) -> bool {
        if ty == other {
            return true;
        }
        let Some(record) = self.try_get(ty) else {
            return false;
        };
        match record.info() {
            TypeInfo::Class(class) => self
                .class_bases(class)
                .iter()
                .any(|entry| self.is_kind_of(entry.base, other)),
            TypeInfo::Primitive(primitive) => primitive
                .parent
                .is_some_and(|parent| self.is_kind_of(parent, other)),
            _ => false,
        }
    }
}
