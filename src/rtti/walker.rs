//! Inheritance-aware member traversal with category tracking and early exit.
//!
//! Bases are visited depth-first in inheritance-table order before a class's own members,
//! each base contributing its byte offset to the running base offset. Group markers set the
//! active category for the remaining members of the same class level and are never handed
//! to the visitor; every class level starts with the empty category.

use std::ops::ControlFlow;

use super::arena::{TypeId, TypeTable};
use super::class::MemberEntry;

/// One storage-bearing member as seen from the walk root.
#[derive(Clone, Copy, Debug)]
pub struct MemberVisit<'table> {
    pub class: TypeId,
    pub member: &'table MemberEntry,
    pub category: &'table str,
    /// Offset of the declaring class's storage within the root layout.
    pub base_offset: u32,
    /// Member is declared by the root class itself.
    pub top_level: bool,
}

impl MemberVisit<'_> {
    /// Offsets are not validated against layouts; arithmetic wraps like the producer's.
    pub fn absolute_offset(&self) -> u32 {
        self.base_offset.wrapping_add(u32::from(self.member.offset))
    }
}

pub struct InheritanceWalker<'table> {
    table: &'table TypeTable,
}

impl<'table> InheritanceWalker<'table> {
    pub fn new(table: &'table TypeTable) -> Self {
        Self { table }
    }

    /// Visits every member reachable from `root` until the visitor breaks.
    ///
    /// Non-class roots, and handles this table never issued, have no members and complete
    /// immediately.
    pub fn walk<B, F>(&self, root: TypeId, mut visitor: F) -> ControlFlow<B>
    where
        F: FnMut(MemberVisit<'table>) -> ControlFlow<B>,
    {
        self.walk_level(root, 0, true, &mut visitor)
    }

    fn walk_level<B, F>(
        &self,
        class_id: TypeId,
        base_offset: u32,
        top_level: bool,
        visitor: &mut F,
    ) -> ControlFlow<B>
    where
        F: FnMut(MemberVisit<'table>) -> ControlFlow<B>,
    {
        let table = self.table;
        let Some(class) = table.try_get(class_id).and_then(|record| record.as_class()) else {
            return ControlFlow::Continue(());
        };

        for entry in table.class_bases(class) {
            self.walk_level(entry.base, base_offset.wrapping_add(entry.offset), false, visitor)?;
        }

        let mut category = "";
        for member in table.class_members(class) {
            if member.is_group_marker() {
                category = table.resolve_string(member.name_id);
                continue;
            }
            visitor(MemberVisit {
                class: class_id,
                member,
                category,
                base_offset,
                top_level,
            })?;
        }

        ControlFlow::Continue(())
    }
}
