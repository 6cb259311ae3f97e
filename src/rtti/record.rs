//! Defines the canonical descriptor records stored inside the type table.

use super::class::ClassType;
use super::container::ContainerType;
use super::enumeration::EnumType;
use super::primitive::PrimitiveType;

/// 16-bit identifier assigned to a descriptor by the producing runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RuntimeTypeId(pub u16);

impl RuntimeTypeId {
    pub const INVALID: Self = Self(0xFFFF);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

impl Default for RuntimeTypeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Primary and alias runtime identifiers carried by every descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RuntimeTypeIds {
    pub primary: RuntimeTypeId,
    pub secondary: RuntimeTypeId,
}

impl RuntimeTypeIds {
    pub const fn new(primary: u16, secondary: u16) -> Self {
        Self {
            primary: RuntimeTypeId(primary),
            secondary: RuntimeTypeId(secondary),
        }
    }
}

/// Descriptor discriminant, numbered as the producer numbers it.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Primitive = 0,
    Reference = 1,
    Container = 2,
    Enum = 3,
    Class = 4,
    EnumAlt = 5,
    Pod = 6,
}

impl TypeKind {
    pub fn from_raw(raw: u8) -> Option<Self> {
        Some(match raw {
            0 => TypeKind::Primitive,
            1 => TypeKind::Reference,
            2 => TypeKind::Container,
            3 => TypeKind::Enum,
            4 => TypeKind::Class,
            5 => TypeKind::EnumAlt,
            6 => TypeKind::Pod,
            _ => return None,
        })
    }
}

/// Describes a contiguous slice of a side table owned by the type table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableSpan {
    start: u32,
    len: u32,
}

impl TableSpan {
    pub fn empty() -> Self {
        Self { start: 0, len: 0 }
    }

    pub fn new(start: usize, len: usize) -> Self {
        Self {
            start: start as u32,
            len: len as u32,
        }
    }

    pub fn start(&self) -> usize {
        self.start as usize
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn range(&self) -> std::ops::Range<usize> {
        self.start()..self.start() + self.len()
    }
}

/// Plain-data block synthesized at runtime when fields are merged; only its size is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PodType {
    pub byte_size: u32,
}

/// Kind-specific payload of a descriptor.
#[derive(Clone, Debug)]
pub enum TypeInfo {
    Primitive(PrimitiveType),
    Reference(ContainerType),
    Container(ContainerType),
    Enum(EnumType),
    Class(ClassType),
    EnumAlt(EnumType),
    Pod(PodType),
}

impl TypeInfo {
    pub fn kind(&self) -> TypeKind {
        match self {
            TypeInfo::Primitive(_) => TypeKind::Primitive,
            TypeInfo::Reference(_) => TypeKind::Reference,
            TypeInfo::Container(_) => TypeKind::Container,
            TypeInfo::Enum(_) => TypeKind::Enum,
            TypeInfo::Class(_) => TypeKind::Class,
            TypeInfo::EnumAlt(_) => TypeKind::EnumAlt,
            TypeInfo::Pod(_) => TypeKind::Pod,
        }
    }
}

/// A single type descriptor: identity plus kind payload.
#[derive(Clone, Debug)]
pub struct TypeRecord {
    pub runtime_ids: RuntimeTypeIds,
    info: TypeInfo,
}

impl TypeRecord {
    pub fn new(info: TypeInfo) -> Self {
        Self {
            runtime_ids: RuntimeTypeIds::default(),
            info,
        }
    }

    pub fn kind(&self) -> TypeKind {
        self.info.kind()
    }

    pub fn info(&self) -> &TypeInfo {
        &self.info
    }

    /// Payload access for the builder; the kind itself never changes.
    pub(crate) fn class_mut(&mut self) -> Option<&mut ClassType> {
        if let TypeInfo::Class(value) = &mut self.info {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveType> {
        if let TypeInfo::Primitive(value) = &self.info {
            Some(value)
        } else {
            None
        }
    }

    /// Covers both references and value containers.
    pub fn as_container(&self) -> Option<&ContainerType> {
        match &self.info {
            TypeInfo::Reference(value) | TypeInfo::Container(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumType> {
        match &self.info {
            TypeInfo::Enum(value) | TypeInfo::EnumAlt(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassType> {
        if let TypeInfo::Class(value) = &self.info {
            Some(value)
        } else {
            None
        }
    }

    pub fn as_pod(&self) -> Option<&PodType> {
        if let TypeInfo::Pod(value) = &self.info {
            Some(value)
        } else {
            None
        }
    }
}
