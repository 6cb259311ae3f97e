use rtti_reflect::rtti::{ResolvedMember, RuntimeTypeId, TypeKind, TypeTable};

use crate::common::world;

fn summary(table: &TypeTable, members: &[ResolvedMember<'_>]) -> Vec<(String, String, u32)> {
    members
        .iter()
        .map(|m| {
            (
                table.resolve_string(m.member.name_id).to_owned(),
                m.category.to_owned(),
                m.absolute_offset,
            )
        })
        .collect()
}

fn owned(rows: &[(&str, &str, u32)]) -> Vec<(String, String, u32)> {
    rows.iter()
        .map(|(name, category, offset)| (name.to_string(), category.to_string(), *offset))
        .collect()
}

#[test]
fn every_class_is_exactly_and_transitively_itself() {
    let w = world();
    for id in w.table.ids() {
        if w.table.get(id).kind() == TypeKind::Class {
            assert!(w.table.is_exact_kind_of(id, id), "{} must be exactly itself", w.table.symbol_name(id));
            assert!(w.table.is_kind_of(id, id), "{} must be a kind of itself", w.table.symbol_name(id));
        }
    }
}

#[test]
fn kind_of_is_false_outside_the_base_closure() {
    let w = world();
    assert!(w.table.is_kind_of(w.multi, w.second), "D inherits B2");
    assert!(!w.table.is_kind_of(w.multi, w.base), "D does not inherit Base");
    assert!(!w.table.is_kind_of(w.base, w.derived), "Base is not a Derived");
    assert!(!w.table.is_kind_of(w.unrelated, w.base), "unrelated classes do not match");
    assert!(!w.table.is_kind_of(w.boolean, w.float), "unrelated primitives do not match");
}

#[test]
fn multiple_inheritance_offsets_accumulate() {
    let w = world();
    let x = w.table.find_member(w.multi, "x").expect("x via B1");
    assert_eq!(x.absolute_offset, 0x14, "B1 at 0x10 plus x at 0x4");
}

#[test]
fn first_base_wins_duplicate_names() {
    let w = world();
    let dup = w.table.find_member(w.multi, "dup").expect("dup");
    assert_eq!(dup.absolute_offset, 0x18, "B1's dup is found before B2's");
    assert_eq!(dup.category, "Debug", "category travels with the resolved member");
    assert!(
        w.table.class_members(w.table.get(w.first).as_class().expect("B1")).len() == 3,
        "B1 holds its marker in its own table"
    );
}

#[test]
fn categories_follow_markers_within_one_level() {
    let w = world();
    let members = w.table.categorized_members(w.spatial);
    assert_eq!(
        summary(&w.table, &members),
        owned(&[
            ("position", "Transform", 0x0),
            ("rotation", "Transform", 0xC),
            ("mass", "Physics", 0x18),
        ]),
        "markers name the members that follow and never appear themselves"
    );
}

#[test]
fn derived_level_starts_with_empty_category() {
    let w = world();
    let members = w.table.categorized_members(w.multi);
    assert_eq!(
        summary(&w.table, &members),
        owned(&[
            ("x", "", 0x14),
            ("dup", "Debug", 0x18),
            ("dup", "", 0x20),
            ("own", "", 0x28),
        ]),
        "B1 ends under Debug, but neither B2 nor D inherit it"
    );
}

#[test]
fn lookups_are_pure() {
    let w = world();
    let first = summary(&w.table, &w.table.categorized_members(w.multi));
    let second = summary(&w.table, &w.table.categorized_members(w.multi));
    assert_eq!(first, second, "enumeration must be repeatable");
    let a = w.table.find_member(w.multi, "own").map(|m| m.absolute_offset);
    let b = w.table.find_member(w.multi, "own").map(|m| m.absolute_offset);
    assert_eq!(a, b, "lookup must be repeatable");
}

#[test]
fn base_and_derived_round_trip() {
    #[repr(C)]
    struct DerivedImage {
        health: i32,
        alive: bool,
    }

    let w = world();
    let members = w.table.categorized_members(w.derived);
    assert_eq!(
        summary(&w.table, &members),
        owned(&[("health", "", 0), ("alive", "", 4)]),
        "base members precede derived members"
    );

    let object = DerivedImage {
        health: 250,
        alive: true,
    };
    let base_ptr = (&object as *const DerivedImage).cast::<u8>();
    let health: Option<i32> = unsafe { w.table.read_member_as(base_ptr, w.derived, "health") };
    let alive: Option<bool> = unsafe { w.table.read_member_as(base_ptr, w.derived, "alive") };
    assert_eq!(health, Some(250), "health is read from offset 0");
    assert_eq!(alive, Some(object.alive), "alive is read from offset 4");
}

#[test]
fn runtime_ids_resolve_to_descriptors() {
    let w = world();
    assert_eq!(
        w.table.lookup_runtime_id(RuntimeTypeId(0x10)),
        Some(w.int32),
        "primary runtime id should index the descriptor"
    );
    assert_eq!(w.table.lookup_symbol("D"), Some(w.multi), "symbols index every descriptor");
}
