use rtti_reflect::rtti::{registry, Reflected, RttiError, RttiObject, TypeId, TypeTable};

use crate::common::world;

#[repr(C)]
struct BaseView {
    rtti: TypeId,
    health: i32,
}

#[repr(C)]
struct DerivedView {
    base: BaseView,
    alive: bool,
}

// SAFETY: views are only built over objects whose `rtti` field names their descriptor.
unsafe impl RttiObject for BaseView {
    fn rtti(&self) -> TypeId {
        self.rtti
    }
}

unsafe impl Reflected for BaseView {
    const SYMBOL: &'static str = "Base";
}

unsafe impl Reflected for DerivedView {
    const SYMBOL: &'static str = "Derived";
}

// The only test in this binary that touches the process-wide table.
#[test]
fn global_table_installs_once_and_serves_casts() {
    let w = world();
    let (base, derived, unrelated) = (w.base, w.derived, w.unrelated);

    let plain = BaseView {
        rtti: base,
        health: 5,
    };
    assert!(
        registry::cast::<BaseView, _>(&plain).is_none(),
        "nothing can be cast before installation"
    );

    let installed = registry::install(w.table).expect("first install");
    assert_eq!(installed.lookup_symbol("Derived"), Some(derived), "installed table keeps its ids");
    assert!(registry::installed().is_some(), "table should be reachable after install");

    let err = registry::install(TypeTable::new()).expect_err("second install");
    assert_eq!(err, RttiError::AlreadyInstalled, "the table is write-once");

    let object = DerivedView {
        base: BaseView {
            rtti: derived,
            health: 60,
        },
        alive: true,
    };
    let erased: &dyn RttiObject = &object.base;
    let as_base = registry::cast::<BaseView, _>(erased).expect("Derived is a Base");
    assert_eq!(as_base.health, 60, "cast keeps the address");
    assert!(std::ptr::addr_eq(as_base, &object.base), "cast must not move the pointer");

    assert!(registry::cast::<DerivedView, _>(&plain).is_none(), "a plain Base is not a Derived");

    let stranger = BaseView {
        rtti: unrelated,
        health: 0,
    };
    assert!(registry::cast::<BaseView, _>(&stranger).is_none(), "unrelated objects do not cast");
    assert!(object.alive, "derived storage is untouched");
}
