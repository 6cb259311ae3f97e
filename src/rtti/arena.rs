//! Stores descriptor records plus the side tables and indices used throughout the subsystem.

use std::num::NonZeroU32;

use ahash::AHashMap;

use super::class::{InheritanceEntry, MemberEntry};
use super::record::{RuntimeTypeId, TableSpan, TypeRecord};

macro_rules! table_handle {
    ($(#[$meta:meta])* $name:ident, $what:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub struct $name(NonZeroU32);

        impl $name {
            /// Handle for the zero-based slot `index`.
            pub(crate) fn from_index(index: usize) -> Self {
                let raw = u32::try_from(index)
                    .ok()
                    .and_then(|index| index.checked_add(1))
                    .and_then(NonZeroU32::new)
                    .expect(concat!($what, " index overflow"));
                Self(raw)
            }

            pub fn index(self) -> usize {
                (self.0.get() - 1) as usize
            }
        }
    };
}

table_handle!(
    /// Handle to one descriptor; doubles as the descriptor's identity.
    TypeId,
    "descriptor"
);
table_handle!(
    /// Handle to an interned name.
    StringId,
    "string"
);

/// Deduplicating name storage shared by every descriptor in a table.
#[derive(Default, Debug)]
struct StringPool {
    names: Vec<Box<str>>,
    ids: AHashMap<Box<str>, StringId>,
}

impl StringPool {
    fn intern(&mut self, name: &str) -> StringId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = StringId::from_index(self.names.len());
        let boxed: Box<str> = name.into();
        self.names.push(boxed.clone());
        self.ids.insert(boxed, id);
        id
    }

    fn resolve(&self, id: StringId) -> &str {
        &self.names[id.index()]
    }
}

/// Frozen-after-build table of type descriptors.
///
/// Mutation goes through [`TypeBuilder`](super::builder::TypeBuilder), which needs `&mut`;
/// everything else reads through `&TypeTable` and is safe to share across threads.
#[derive(Default, Debug)]
pub struct TypeTable {
    records: Vec<TypeRecord>,
    bases: Vec<InheritanceEntry>,
    members: Vec<MemberEntry>,
    strings: StringPool,
    by_symbol: AHashMap<String, TypeId>,
    by_runtime_id: AHashMap<u16, TypeId>,
}

impl TypeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this table.
    pub fn get(&self, id: TypeId) -> &TypeRecord {
        &self.records[id.index()]
    }

    /// Like [`get`](Self::get), but `None` for handles issued by another table.
    pub fn try_get(&self, id: TypeId) -> Option<&TypeRecord> {
        self.records.get(id.index())
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        (0..self.records.len()).map(TypeId::from_index)
    }

    pub fn lookup_symbol(&self, symbol: &str) -> Option<TypeId> {
        self.by_symbol.get(symbol).copied()
    }

    pub fn lookup_runtime_id(&self, id: RuntimeTypeId) -> Option<TypeId> {
        if !id.is_valid() {
            return None;
        }
        self.by_runtime_id.get(&id.0).copied()
    }

    pub fn bases(&self, span: TableSpan) -> &[InheritanceEntry] {
        &self.bases[span.range()]
    }

    pub fn members(&self, span: TableSpan) -> &[MemberEntry] {
        &self.members[span.range()]
    }

    pub fn intern_string<S: AsRef<str>>(&mut self, value: S) -> StringId {
        self.strings.intern(value.as_ref())
    }

    pub fn resolve_string(&self, id: StringId) -> &str {
        self.strings.resolve(id)
    }

    pub(crate) fn push_record(&mut self, record: TypeRecord) -> TypeId {
        self.records.push(record);
        TypeId::from_index(self.records.len() - 1)
    }

    pub(crate) fn get_mut(&mut self, id: TypeId) -> &mut TypeRecord {
        &mut self.records[id.index()]
    }

    pub(crate) fn alloc_bases<I>(&mut self, bases: I) -> TableSpan
    where
        I: IntoIterator<Item = InheritanceEntry>,
    {
        let start = self.bases.len();
        self.bases.extend(bases);
        TableSpan::new(start, self.bases.len() - start)
    }

    pub(crate) fn alloc_members<I>(&mut self, members: I) -> TableSpan
    where
        I: IntoIterator<Item = MemberEntry>,
    {
        let start = self.members.len();
        self.members.extend(members);
        TableSpan::new(start, self.members.len() - start)
    }

    pub(crate) fn index_symbol(&mut self, symbol: String, id: TypeId) {
        self.by_symbol.insert(symbol, id);
    }

    pub(crate) fn unindex_runtime_id(&mut self, runtime_id: RuntimeTypeId, id: TypeId) {
        if self.by_runtime_id.get(&runtime_id.0) == Some(&id) {
            self.by_runtime_id.remove(&runtime_id.0);
        }
    }

    /// Drops `id` if it is the newest record, along with every index entry naming it.
    pub(crate) fn discard_last(&mut self, id: TypeId) -> bool {
        if id.index() + 1 != self.records.len() {
            return false;
        }
        self.records.pop();
        self.by_symbol.retain(|_, owner| *owner != id);
        self.by_runtime_id.retain(|_, owner| *owner != id);
        true
    }

    pub(crate) fn index_runtime_id(&mut self, runtime_id: RuntimeTypeId, id: TypeId) {
        if runtime_id.is_valid() {
            self.by_runtime_id.insert(runtime_id.0, id);
        }
    }
}
