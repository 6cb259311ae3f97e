//! Symbol naming helpers shared by the builder, indices and diagnostics.

use super::arena::{TypeId, TypeTable};
use super::record::{TypeInfo, TypeKind};

impl TypeKind {
    pub fn label(self) -> &'static str {
        match self {
            TypeKind::Primitive => "primitive",
            TypeKind::Reference => "reference",
            TypeKind::Container => "container",
            TypeKind::Enum => "enum",
            TypeKind::Class => "class",
            TypeKind::EnumAlt => "enum2",
            TypeKind::Pod => "pod",
        }
    }
}

impl TypeTable {
    /// Fully qualified symbol, e.g. `Array<Ref<Entity>>`.
    pub fn symbol_name(&self, id: TypeId) -> String {
        self.symbol_for(self.get(id).info())
    }

    pub(crate) fn symbol_for(&self, info: &TypeInfo) -> String {
        match info {
            TypeInfo::Primitive(ty) => self.resolve_string(ty.name_id).to_owned(),
            TypeInfo::Enum(ty) | TypeInfo::EnumAlt(ty) => self.resolve_string(ty.name_id).to_owned(),
            TypeInfo::Class(ty) => self.resolve_string(ty.name_id).to_owned(),
            TypeInfo::Reference(ty) | TypeInfo::Container(ty) => {
                let template = match ty.data {
                    Some(data) => match self.resolve_string(data.name_id) {
                        "cptr" => "CPtr",
                        name => name,
                    },
                    None if matches!(info, TypeInfo::Reference(_)) => "Ref",
                    None => "Array",
                };
                format!("{template}<{}>", self.symbol_name(ty.inner))
            }
            TypeInfo::Pod(pod) => format!("POD({})", pod.byte_size),
        }
    }

    pub fn kind_label(&self, id: TypeId) -> &'static str {
        self.get(id).kind().label()
    }

    /// Element type of references and containers.
    pub fn contained_type(&self, id: TypeId) -> Option<TypeId> {
        self.get(id).as_container().map(|ty| ty.inner)
    }
}
