//! Primitive descriptors (integers, floats, booleans, strings) and their behavioral hooks.

use super::arena::{StringId, TypeId};

/// Behavioral hooks the producer attaches to a serializable primitive.
///
/// All hooks operate on raw object storage; callers must pass pointers to live values of
/// the primitive being described. The reflection layer exposes them but never invokes them.
#[derive(Clone, Copy, Debug)]
pub struct PrimitiveHooks {
    pub deserialize_string: unsafe fn(text: &str, object: *mut u8) -> bool,
    pub serialize_string: unsafe fn(object: *const u8, out: &mut String) -> bool,
    pub assign: unsafe fn(lhs: *mut u8, rhs: *const u8),
    pub test_equality: unsafe fn(lhs: *const u8, rhs: *const u8) -> bool,
    pub construct: unsafe fn(object: *mut u8),
    pub destruct: unsafe fn(object: *mut u8),
    pub swap_endianness: unsafe fn(source: *const u8, dest: *mut u8, width: u8) -> bool,
    /// Secondary conditional assignment. Contract unknown; callable but unspecified.
    pub try_assign: unsafe fn(lhs: *mut u8, rhs: *const u8) -> bool,
    pub size_in_memory: unsafe fn(object: *const u8) -> usize,
    /// String-pair comparator. Contract unknown; callable but unspecified.
    pub compare_by_strings: unsafe fn(object: *const u8, lhs: &str, rhs: &str) -> bool,
}

#[derive(Clone, Debug)]
pub struct PrimitiveType {
    pub name_id: StringId,
    /// Single-inheritance chain followed by kind tests.
    pub parent: Option<TypeId>,
    pub hooks: Option<PrimitiveHooks>,
}

impl PrimitiveType {
    pub fn new(name_id: StringId) -> Self {
        Self {
            name_id,
            parent: None,
            hooks: None,
        }
    }

    pub fn with_parent(mut self, parent: TypeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn is_serializable(&self) -> bool {
        self.hooks.is_some()
    }
}
