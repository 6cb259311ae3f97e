use rtti_reflect::rtti::{RuntimeTypeIds, TypeBuilder, TypeId, TypeTable};

/// Descriptor table shared by the integration scenarios.
pub struct World {
    pub table: TypeTable,
    pub int32: TypeId,
    pub boolean: TypeId,
    pub float: TypeId,
    pub base: TypeId,
    pub derived: TypeId,
    pub first: TypeId,
    pub second: TypeId,
    pub multi: TypeId,
    pub spatial: TypeId,
    pub unrelated: TypeId,
}

pub fn world() -> World {
    let mut table = TypeTable::new();
    let mut builder = TypeBuilder::new(&mut table);

    let int32 = builder.primitive("int32").finish().expect("int32");
    let boolean = builder.primitive("bool").finish().expect("bool");
    let float = builder.primitive("float").finish().expect("float");
    builder
        .assign_runtime_ids(int32, RuntimeTypeIds::new(0x10, 0x11))
        .expect("int32 ids");

    let base = builder
        .class("Base")
        .expect("declare Base")
        .layout(4, 4)
        .member("health", int32, 0)
        .finish()
        .expect("Base");
    let derived = builder
        .class("Derived")
        .expect("declare Derived")
        .layout(8, 4)
        .base(base, 0)
        .member("alive", boolean, 4)
        .finish()
        .expect("Derived");

    let first = builder
        .class("B1")
        .expect("declare B1")
        .member("x", int32, 0x4)
        .category("Debug")
        .member("dup", int32, 0x8)
        .finish()
        .expect("B1");
    let second = builder
        .class("B2")
        .expect("declare B2")
        .member("dup", int32, 0x0)
        .finish()
        .expect("B2");
    let multi = builder
        .class("D")
        .expect("declare D")
        .layout(0x30, 8)
        .base(first, 0x10)
        .base(second, 0x20)
        .member("own", float, 0x28)
        .finish()
        .expect("D");

    let spatial = builder
        .class("Spatial")
        .expect("declare Spatial")
        .category("Transform")
        .member("position", float, 0x0)
        .member("rotation", float, 0xC)
        .category("Physics")
        .member("mass", float, 0x18)
        .finish()
        .expect("Spatial");
    let unrelated = builder
        .class("Unrelated")
        .expect("declare Unrelated")
        .finish()
        .expect("Unrelated");

    World {
        table,
        int32,
        boolean,
        float,
        base,
        derived,
        first,
        second,
        multi,
        spatial,
        unrelated,
    }
}
