//! Enumeration descriptors and value/name queries.

use smallvec::SmallVec;

use super::arena::{StringId, TypeId, TypeTable};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumEntry {
    pub value: u32,
    pub name_id: StringId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumType {
    pub name_id: StringId,
    pub underlying_size: u8,
    pub entries: SmallVec<[EnumEntry; 8]>,
}

impl EnumType {
    pub fn new(name_id: StringId, underlying_size: u8) -> Self {
        Self {
            name_id,
            underlying_size,
            entries: SmallVec::new(),
        }
    }

    pub fn push_entry(&mut self, entry: EnumEntry) {
        self.entries.push(entry);
    }

    /// Declared member count, as carried by the shared descriptor header.
    pub fn member_count(&self) -> u16 {
        self.entries.len() as u16
    }
}

impl TypeTable {
    pub fn enum_entries(&self, id: TypeId) -> Option<&[EnumEntry]> {
        self.get(id).as_enum().map(|ty| ty.entries.as_slice())
    }

    /// First entry in table order carrying `value`.
    pub fn enum_name_of(&self, id: TypeId, value: u32) -> Option<&str> {
        self.enum_entries(id)?
            .iter()
            .find(|entry| entry.value == value)
            .map(|entry| self.resolve_string(entry.name_id))
    }

    /// First entry in table order named `name`.
    pub fn enum_value_of(&self, id: TypeId, name: &str) -> Option<u32> {
        self.enum_entries(id)?
            .iter()
            .find(|entry| self.resolve_string(entry.name_id) == name)
            .map(|entry| entry.value)
    }
}
