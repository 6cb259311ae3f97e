//! Producer-side construction helpers that populate a table before it is frozen and shared.

use log::debug;
use smallvec::SmallVec;

use super::arena::{StringId, TypeId, TypeTable};
use super::class::{
    ClassHooks, ClassType, InheritanceEntry, InheritedMessageEntry, MemberEntry, MemberFlags,
    MessageHandlerEntry, PropertyFn, ScriptFunctionEntry,
};
use super::container::ContainerType;
use super::enumeration::{EnumEntry, EnumType};
use super::error::{RttiError, RttiResult};
use super::primitive::{PrimitiveHooks, PrimitiveType};
use super::record::{PodType, RuntimeTypeIds, TypeInfo, TypeKind, TypeRecord};

/// Width of the per-class count fields.
const CLASS_TABLE_LIMIT: usize = u8::MAX as usize;
const ENUM_TABLE_LIMIT: usize = u16::MAX as usize;

fn check_count(owner: &str, table: &'static str, count: usize, limit: usize) -> RttiResult<()> {
    if count > limit {
        return Err(RttiError::TableOverflow {
            owner: owner.to_owned(),
            table,
            count,
            limit,
        });
    }
    Ok(())
}

pub struct TypeBuilder<'table> {
    table: &'table mut TypeTable,
}

impl<'table> TypeBuilder<'table> {
    pub fn new(table: &'table mut TypeTable) -> Self {
        Self { table }
    }

    pub fn intern<S: AsRef<str>>(&mut self, name: S) -> StringId {
        self.table.intern_string(name)
    }

    fn register(&mut self, info: TypeInfo) -> RttiResult<TypeId> {
        let symbol = self.table.symbol_for(&info);
        if self.table.lookup_symbol(&symbol).is_some() {
            return Err(RttiError::DuplicateSymbol { name: symbol });
        }
        let kind = info.kind();
        let id = self.table.push_record(TypeRecord::new(info));
        debug!("registered {} '{symbol}' as {id:?}", kind.label());
        self.table.index_symbol(symbol, id);
        Ok(id)
    }

    /// Registers `info` unless an identical symbol of the same kind exists already.
    fn register_deduplicated(&mut self, info: TypeInfo) -> RttiResult<TypeId> {
        let symbol = self.table.symbol_for(&info);
        if let Some(existing) = self.table.lookup_symbol(&symbol) {
            if self.table.get(existing).kind() == info.kind() {
                return Ok(existing);
            }
            return Err(RttiError::DuplicateSymbol { name: symbol });
        }
        self.register(info)
    }

    pub fn primitive(&mut self, name: impl AsRef<str>) -> PrimitiveBuilder<'_, 'table> {
        PrimitiveBuilder::new(self, name.as_ref())
    }

    /// Pointer-like reference such as `Ref<T>` or `StreamingRef<T>`.
    pub fn reference(&mut self, inner: TypeId, data_name: Option<&str>) -> RttiResult<TypeId> {
        let ty = self.container_type(inner, data_name);
        self.register_deduplicated(TypeInfo::Reference(ty))
    }

    /// Value container such as `Array<T>`.
    pub fn container(&mut self, inner: TypeId, data_name: Option<&str>) -> RttiResult<TypeId> {
        let ty = self.container_type(inner, data_name);
        self.register_deduplicated(TypeInfo::Container(ty))
    }

    fn container_type(&mut self, inner: TypeId, data_name: Option<&str>) -> ContainerType {
        let ty = ContainerType::new(inner);
        match data_name {
            Some(name) => ty.with_data(self.intern(name)),
            None => ty,
        }
    }

    pub fn enumeration(&mut self, name: impl AsRef<str>) -> EnumBuilder<'_, 'table> {
        EnumBuilder::new(self, name.as_ref())
    }

    /// Runtime plain-data block; identical sizes share one descriptor.
    pub fn pod(&mut self, byte_size: u32) -> RttiResult<TypeId> {
        self.register_deduplicated(TypeInfo::Pod(PodType { byte_size }))
    }

    /// Reserves an empty class so members and references may point at it before it is defined.
    pub fn declare_class(&mut self, name: impl AsRef<str>) -> RttiResult<TypeId> {
        let name_id = self.intern(name);
        self.register(TypeInfo::Class(ClassType::new(name_id)))
    }

    pub fn define_class(&mut self, id: TypeId) -> RttiResult<ClassBuilder<'_, 'table>> {
        if self.table.get(id).as_class().is_none() {
            return Err(RttiError::NotAClass {
                symbol: self.table.symbol_name(id),
            });
        }
        Ok(ClassBuilder::new(self, id, false))
    }

    /// Declares and defines in one step. A failed [`ClassBuilder::finish`] withdraws the
    /// declaration so the name can be registered again.
    pub fn class(&mut self, name: impl AsRef<str>) -> RttiResult<ClassBuilder<'_, 'table>> {
        let id = self.declare_class(name)?;
        Ok(ClassBuilder::new(self, id, true))
    }

    pub fn assign_runtime_ids(&mut self, id: TypeId, ids: RuntimeTypeIds) -> RttiResult<()> {
        if let Some(existing) = self.table.lookup_runtime_id(ids.primary) {
            if existing != id {
                return Err(RttiError::DuplicateRuntimeId {
                    id: ids.primary.0,
                    existing: self.table.symbol_name(existing),
                });
            }
        }
        let previous = std::mem::replace(&mut self.table.get_mut(id).runtime_ids, ids);
        self.table.unindex_runtime_id(previous.primary, id);
        self.table.index_runtime_id(ids.primary, id);
        Ok(())
    }
}

pub struct PrimitiveBuilder<'builder, 'table> {
    builder: &'builder mut TypeBuilder<'table>,
    name: String,
    parent: Option<TypeId>,
    hooks: Option<PrimitiveHooks>,
}

impl<'builder, 'table> PrimitiveBuilder<'builder, 'table> {
    fn new(builder: &'builder mut TypeBuilder<'table>, name: &str) -> Self {
        Self {
            builder,
            name: name.to_owned(),
            parent: None,
            hooks: None,
        }
    }

    pub fn parent(mut self, parent: TypeId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn hooks(mut self, hooks: PrimitiveHooks) -> Self {
        self.hooks = Some(hooks);
        self
    }

    pub fn finish(self) -> RttiResult<TypeId> {
        let name_id = self.builder.intern(&self.name);
        let mut primitive = PrimitiveType::new(name_id);
        primitive.parent = self.parent;
        primitive.hooks = self.hooks;
        self.builder.register(TypeInfo::Primitive(primitive))
    }
}

pub struct EnumBuilder<'builder, 'table> {
    builder: &'builder mut TypeBuilder<'table>,
    name: String,
    underlying_size: u8,
    alternate: bool,
    entries: Vec<(String, u32)>,
}

impl<'builder, 'table> EnumBuilder<'builder, 'table> {
    fn new(builder: &'builder mut TypeBuilder<'table>, name: &str) -> Self {
        Self {
            builder,
            name: name.to_owned(),
            underlying_size: 4,
            alternate: false,
            entries: Vec::new(),
        }
    }

    pub fn underlying_size(mut self, bytes: u8) -> Self {
        self.underlying_size = bytes;
        self
    }

    /// Emit the descriptor under the second enum discriminant.
    pub fn alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    pub fn entry(mut self, name: impl AsRef<str>, value: u32) -> Self {
        self.entries.push((name.as_ref().to_owned(), value));
        self
    }

    pub fn finish(self) -> RttiResult<TypeId> {
        check_count(&self.name, "enum", self.entries.len(), ENUM_TABLE_LIMIT)?;
        let name_id = self.builder.intern(&self.name);
        let mut ty = EnumType::new(name_id, self.underlying_size);
        for (name, value) in &self.entries {
            let name_id = self.builder.intern(name);
            ty.push_entry(EnumEntry { value: *value, name_id });
        }
        let info = if self.alternate {
            TypeInfo::EnumAlt(ty)
        } else {
            TypeInfo::Enum(ty)
        };
        self.builder.register(info)
    }
}

pub struct ClassBuilder<'builder, 'table> {
    builder: &'builder mut TypeBuilder<'table>,
    id: TypeId,
    reserved: bool,
    byte_size: u32,
    alignment: u16,
    flags: u16,
    hooks: ClassHooks,
    bases: SmallVec<[InheritanceEntry; 2]>,
    members: Vec<MemberEntry>,
    script_functions: SmallVec<[ScriptFunctionEntry; 2]>,
    message_handlers: SmallVec<[MessageHandlerEntry; 2]>,
    inherited_messages: SmallVec<[InheritedMessageEntry; 2]>,
}

impl<'builder, 'table> ClassBuilder<'builder, 'table> {
    fn new(builder: &'builder mut TypeBuilder<'table>, id: TypeId, reserved: bool) -> Self {
        Self {
            builder,
            id,
            reserved,
            byte_size: 0,
            alignment: 1,
            flags: 0,
            hooks: ClassHooks::default(),
            bases: SmallVec::new(),
            members: Vec::new(),
            script_functions: SmallVec::new(),
            message_handlers: SmallVec::new(),
            inherited_messages: SmallVec::new(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn layout(mut self, byte_size: u32, alignment: u16) -> Self {
        self.byte_size = byte_size;
        self.alignment = alignment;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn hooks(mut self, hooks: ClassHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Bases are searched in the order they are added here.
    pub fn base(mut self, base: TypeId, offset: u32) -> Self {
        self.bases.push(InheritanceEntry { base, offset });
        self
    }

    pub fn member(mut self, name: impl AsRef<str>, ty: TypeId, offset: u16) -> Self {
        let name_id = self.builder.intern(name);
        self.members.push(MemberEntry::field(name_id, ty, offset));
        self
    }

    pub fn save_state_member(mut self, name: impl AsRef<str>, ty: TypeId, offset: u16) -> Self {
        let name_id = self.builder.intern(name);
        let entry = MemberEntry::field(name_id, ty, offset).with_flags(MemberFlags::SAVE_STATE_ONLY);
        self.members.push(entry);
        self
    }

    pub fn property(
        mut self,
        name: impl AsRef<str>,
        ty: TypeId,
        getter: Option<PropertyFn>,
        setter: Option<PropertyFn>,
    ) -> Self {
        let name_id = self.builder.intern(name);
        let entry = MemberEntry::field(name_id, ty, 0).with_property(getter, setter);
        self.members.push(entry);
        self
    }

    /// Group marker; members that follow are reported under `name`.
    pub fn category(mut self, name: impl AsRef<str>) -> Self {
        let name_id = self.builder.intern(name);
        self.members.push(MemberEntry::group_marker(name_id));
        self
    }

    pub fn member_entry(mut self, entry: MemberEntry) -> Self {
        self.members.push(entry);
        self
    }

    pub fn script_function(
        mut self,
        name: impl AsRef<str>,
        arguments: impl AsRef<str>,
        return_type: u8,
        function: Option<unsafe fn()>,
    ) -> Self {
        let name_id = self.builder.intern(name);
        let arguments_id = self.builder.intern(arguments);
        self.script_functions.push(ScriptFunctionEntry {
            return_type,
            name_id,
            arguments_id,
            function,
        });
        self
    }

    pub fn message_handler(
        mut self,
        message: TypeId,
        callback: unsafe fn(object: *mut u8, message: *mut u8),
    ) -> Self {
        self.message_handlers.push(MessageHandlerEntry { message, callback });
        self
    }

    pub fn inherited_message(mut self, flag: bool, message: TypeId, class: TypeId) -> Self {
        self.inherited_messages.push(InheritedMessageEntry {
            flag,
            message,
            class,
        });
        self
    }

    fn validate(&self, name: &str) -> RttiResult<()> {
        let table = &*self.builder.table;
        check_count(name, "inheritance", self.bases.len(), CLASS_TABLE_LIMIT)?;
        check_count(name, "member", self.members.len(), CLASS_TABLE_LIMIT)?;
        check_count(name, "script function", self.script_functions.len(), CLASS_TABLE_LIMIT)?;
        check_count(name, "message handler", self.message_handlers.len(), CLASS_TABLE_LIMIT)?;
        check_count(name, "inherited message", self.inherited_messages.len(), CLASS_TABLE_LIMIT)?;

        for entry in &self.bases {
            match table.try_get(entry.base) {
                Some(record) if record.kind() == TypeKind::Class => {}
                Some(_) => {
                    return Err(RttiError::NotAClass {
                        symbol: table.symbol_name(entry.base),
                    });
                }
                None => {
                    return Err(RttiError::NotAClass {
                        symbol: format!("{:?}", entry.base),
                    });
                }
            }
            if entry.base == self.id || table.is_kind_of(entry.base, self.id) {
                return Err(RttiError::CyclicInheritance {
                    class: name.to_owned(),
                    base: table.symbol_name(entry.base),
                });
            }
        }
        Ok(())
    }

    pub fn finish(self) -> RttiResult<TypeId> {
        let name = self.builder.table.symbol_name(self.id);
        if let Err(err) = self.validate(&name) {
            if self.reserved && self.builder.table.discard_last(self.id) {
                debug!("withdrew declaration of '{name}': {err}");
            }
            return Err(err);
        }

        let table = &mut *self.builder.table;
        let bases = table.alloc_bases(self.bases.iter().copied());
        let members = table.alloc_members(self.members.iter().copied());
        let Some(class) = table.get_mut(self.id).class_mut() else {
            return Err(RttiError::NotAClass { symbol: name });
        };
        class.byte_size = self.byte_size;
        class.alignment = self.alignment;
        class.flags = self.flags;
        class.hooks = self.hooks;
        class.bases = bases;
        class.members = members;
        class.script_functions = self.script_functions;
        class.message_handlers = self.message_handlers;
        class.inherited_messages = self.inherited_messages;
        debug!(
            "defined class '{name}' with {} bases and {} members",
            bases.len(),
            members.len()
        );
        Ok(self.id)
    }
}
