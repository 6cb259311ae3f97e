//! By-name member lookup, categorized enumeration and raw member reads built on the walker.

use std::ops::ControlFlow;

use log::trace;

use super::arena::{TypeId, TypeTable};
use super::class::MemberEntry;
use super::error::RttiError;
use super::walker::{InheritanceWalker, MemberVisit};

/// A member resolved against a root class, with its category and absolute offset.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedMember<'table> {
    pub member: &'table MemberEntry,
    pub category: &'table str,
    pub absolute_offset: u32,
    pub top_level: bool,
}

impl<'table> From<MemberVisit<'table>> for ResolvedMember<'table> {
    fn from(visit: MemberVisit<'table>) -> Self {
        Self {
            member: visit.member,
            category: visit.category,
            absolute_offset: visit.absolute_offset(),
            top_level: visit.top_level,
        }
    }
}

impl TypeTable {
    /// First member named `name` in walk order (bases first, earlier bases first).
    ///
    /// # Panics
    ///
    /// Panics if the first match is property-backed: such members have no storage offset
    /// and a raw read through the result would be meaningless.
    pub fn find_member(&self, class: TypeId, name: &str) -> Option<ResolvedMember<'_>> {
        let flow = InheritanceWalker::new(self).walk(class, |visit| {
            if self.resolve_string(visit.member.name_id) != name {
                return ControlFlow::Continue(());
            }
            ControlFlow::Break(visit)
        });

        let ControlFlow::Break(visit) = flow else {
            trace!("member '{name}' not found on {class:?}");
            return None;
        };
        if visit.member.is_property() {
            let err = RttiError::PropertyAccess {
                class: self.symbol_name(visit.class),
                member: name.to_owned(),
            };
            panic!("{err}");
        }
        Some(visit.into())
    }

    /// Every storage-bearing member reachable from `class`, in walk order.
    pub fn categorized_members(&self, class: TypeId) -> Vec<ResolvedMember<'_>> {
        let mut resolved = Vec::new();
        let _: ControlFlow<()> = InheritanceWalker::new(self).walk(class, |visit| {
            resolved.push(ResolvedMember::from(visit));
            ControlFlow::Continue(())
        });
        resolved
    }

    /// [`categorized_members`](Self::categorized_members) ordered by absolute offset; ties keep walk order.
    pub fn members_by_offset(&self, class: TypeId) -> Vec<ResolvedMember<'_>> {
        let mut resolved = self.categorized_members(class);
        resolved.sort_by_key(|member| member.absolute_offset);
        resolved
    }

    /// Copies the member named `name` out of the object at `object`.
    ///
    /// Returns `None` when no member of that name exists. Panics like
    /// [`find_member`](Self::find_member) for property-backed members.
    ///
    /// # Safety
    ///
    /// `object` must point to a live instance laid out as `class` describes, and `T` must
    /// match the member's declared type and size. Neither is checked.
    pub unsafe fn read_member_as<T: Copy>(
        &self,
        object: *const u8,
        class: TypeId,
        name: &str,
    ) -> Option<T> {
        let resolved = self.find_member(class, name)?;
        let field = unsafe { object.add(resolved.absolute_offset as usize) };
        Some(unsafe { field.cast::<T>().read_unaligned() })
    }
}

#[cfg(test)]
mod tests {
    //! Lookup precedence, categorization and raw reads over a multiple-inheritance layout.
    use hex_literal::hex;

    use super::*;
    use crate::rtti::builder::TypeBuilder;

    unsafe fn getter(_object: *mut u8, _value: *mut u8) {}

    struct Fixture {
        table: TypeTable,
        derived: TypeId,
        second: TypeId,
    }

    fn fixture() -> Fixture {
        let mut table = TypeTable::new();
        let mut builder = TypeBuilder::new(&mut table);
        let int32 = builder.primitive("int32").finish().expect("int32");
        let first = builder
            .class("First")
            .expect("declare")
            .member("x", int32, 0x4)
            .member("dup", int32, 0x8)
            .finish()
            .expect("first");
        let second = builder
            .class("Second")
            .expect("declare")
            .member("dup", int32, 0x0)
            .property("computed", int32, Some(getter), None)
            .finish()
            .expect("second");
        let derived = builder
            .class("Derived")
            .expect("declare")
            .base(first, 0x10)
            .base(second, 0x20)
            .member("own", int32, 0x0)
            .finish()
            .expect("derived");
        Fixture {
            table,
            derived,
            second,
        }
    }

    #[test]
    fn inherited_member_offset_includes_base_offset() {
        let f = fixture();
        let x = f.table.find_member(f.derived, "x").expect("x is inherited");
        assert_eq!(x.absolute_offset, 0x14, "0x10 base offset plus 0x4 member offset");
        assert!(!x.top_level, "inherited members are not top-level");
    }

    #[test]
    fn earlier_bases_win_duplicate_names() {
        let f = fixture();
        let dup = f.table.find_member(f.derived, "dup").expect("dup exists");
        assert_eq!(dup.absolute_offset, 0x18, "First's dup (0x10 + 0x8) shadows Second's (0x20)");
        let again = f.table.find_member(f.derived, "dup").expect("dup exists");
        assert_eq!(again.absolute_offset, dup.absolute_offset, "lookups are repeatable");
    }

    #[test]
    fn missing_members_are_absent_not_fatal() {
        let f = fixture();
        assert!(f.table.find_member(f.derived, "nope").is_none(), "absence is a normal outcome");
    }

    #[test]
    #[should_panic(expected = "property-backed")]
    fn property_backed_match_is_fatal() {
        let f = fixture();
        let _ = f.table.find_member(f.derived, "computed");
    }

    #[test]
    #[should_panic(expected = "property-backed")]
    fn raw_reads_of_property_members_are_fatal() {
        let f = fixture();
        let image = [0u8; 0x28];
        let _: Option<i32> = unsafe { f.table.read_member_as(image.as_ptr(), f.derived, "computed") };
    }

    #[test]
    fn categorized_members_include_properties_in_walk_order() {
        // enumeration is not a raw read, so property members are listed
        let f = fixture();
        let members = f.table.categorized_members(f.derived);
        let offsets: Vec<_> = members.iter().map(|m| m.absolute_offset).collect();
        assert_eq!(offsets, [0x14, 0x18, 0x20, 0x20, 0x0], "walk order with absolute offsets");
        assert!(members[3].member.is_property(), "property entry is enumerated in place");
        assert_eq!(
            f.table.categorized_members(f.second).len(),
            2,
            "a base walked as root yields only its own members"
        );
    }

    #[test]
    fn offset_ordering_is_stable() {
        let f = fixture();
        let sorted = f.table.members_by_offset(f.derived);
        let names: Vec<_> = sorted
            .iter()
            .map(|m| f.table.resolve_string(m.member.name_id))
            .collect();
        assert_eq!(names, ["own", "x", "dup", "dup", "computed"], "ties keep walk order");
    }

    #[test]
    fn raw_reads_copy_from_absolute_offsets() {
        let f = fixture();
        let mut image = [0u8; 0x28];
        image[0x14..0x18].copy_from_slice(&hex!("2a000000"));
        image[0x18..0x1c].copy_from_slice(&hex!("ffffffff"));

        let x: Option<i32> = unsafe { f.table.read_member_as(image.as_ptr(), f.derived, "x") };
        let dup: Option<i32> = unsafe { f.table.read_member_as(image.as_ptr(), f.derived, "dup") };
        let missing: Option<i32> = unsafe { f.table.read_member_as(image.as_ptr(), f.derived, "nope") };
        assert_eq!(x, Some(42), "x should decode from 0x14");
        assert_eq!(dup, Some(-1), "dup should decode from First's slot");
        assert_eq!(missing, None, "unknown members read nothing");
    }
}
