//! Class descriptors: layout, hooks, inheritance and member tables, script and message tables.

use bitflags::bitflags;
use smallvec::SmallVec;

use super::arena::{StringId, TypeId, TypeTable};
use super::record::TableSpan;

/// Getter or setter backing a property member.
pub type PropertyFn = unsafe fn(object: *mut u8, value: *mut u8);

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MemberFlags: u8 {
        /// Entry carries no storage; its name becomes the active category.
        const GROUP_MARKER = 0b0000_0001;
        const SAVE_STATE_ONLY = 0b0000_0010;
    }
}

/// Where a base class's storage begins within the derived layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InheritanceEntry {
    pub base: TypeId,
    pub offset: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct MemberEntry {
    /// `None` for group markers.
    pub ty: Option<TypeId>,
    pub offset: u16,
    pub flags: MemberFlags,
    pub name_id: StringId,
    pub getter: Option<PropertyFn>,
    pub setter: Option<PropertyFn>,
}

impl MemberEntry {
    pub fn field(name_id: StringId, ty: TypeId, offset: u16) -> Self {
        Self {
            ty: Some(ty),
            offset,
            flags: MemberFlags::empty(),
            name_id,
            getter: None,
            setter: None,
        }
    }

    pub fn group_marker(name_id: StringId) -> Self {
        Self {
            ty: None,
            offset: 0,
            flags: MemberFlags::GROUP_MARKER,
            name_id,
            getter: None,
            setter: None,
        }
    }

    pub fn with_flags(mut self, flags: MemberFlags) -> Self {
        self.flags |= flags;
        self
    }

    pub fn with_property(mut self, getter: Option<PropertyFn>, setter: Option<PropertyFn>) -> Self {
        self.getter = getter;
        self.setter = setter;
        self
    }

    pub fn is_group_marker(&self) -> bool {
        self.flags.contains(MemberFlags::GROUP_MARKER)
    }

    pub fn is_save_state_only(&self) -> bool {
        self.flags.contains(MemberFlags::SAVE_STATE_ONLY)
    }

    pub fn is_property(&self) -> bool {
        self.getter.is_some() || self.setter.is_some()
    }
}

/// Script-exposed function; only enumerated, never invoked here.
#[derive(Clone, Copy, Debug)]
pub struct ScriptFunctionEntry {
    pub return_type: u8,
    pub name_id: StringId,
    pub arguments_id: StringId,
    pub function: Option<unsafe fn()>,
}

#[derive(Clone, Copy, Debug)]
pub struct MessageHandlerEntry {
    pub message: TypeId,
    pub callback: unsafe fn(object: *mut u8, message: *mut u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InheritedMessageEntry {
    pub flag: bool,
    pub message: TypeId,
    pub class: TypeId,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ClassHooks {
    pub construct: Option<unsafe fn(memory: *mut u8) -> *mut u8>,
    pub destruct: Option<unsafe fn(object: *mut u8)>,
    pub deserialize_string: Option<unsafe fn(object: *mut u8, text: &str) -> bool>,
    pub serialize_string: Option<unsafe fn(object: *const u8, out: &mut String) -> bool>,
}

#[derive(Clone, Debug)]
pub struct ClassType {
    pub name_id: StringId,
    pub byte_size: u32,
    pub alignment: u16,
    pub flags: u16,
    pub hooks: ClassHooks,
    pub bases: TableSpan,
    pub members: TableSpan,
    pub script_functions: SmallVec<[ScriptFunctionEntry; 2]>,
    pub message_handlers: SmallVec<[MessageHandlerEntry; 2]>,
    pub inherited_messages: SmallVec<[InheritedMessageEntry; 2]>,
}

impl ClassType {
    pub fn new(name_id: StringId) -> Self {
        Self {
            name_id,
            byte_size: 0,
            alignment: 1,
            flags: 0,
            hooks: ClassHooks::default(),
            bases: TableSpan::empty(),
            members: TableSpan::empty(),
            script_functions: SmallVec::new(),
            message_handlers: SmallVec::new(),
            inherited_messages: SmallVec::new(),
        }
    }
}

impl TypeTable {
    /// Inheritance entries of `class` in declaration order.
    pub fn class_bases(&self, class: &ClassType) -> &[InheritanceEntry] {
        self.bases(class.bases)
    }

    /// Own member table of `class`, group markers included.
    pub fn class_members(&self, class: &ClassType) -> &[MemberEntry] {
        self.members(class.members)
    }

    pub fn has_post_load_callback(&self, id: TypeId) -> bool {
        let Some(class) = self.get(id).as_class() else {
            return false;
        };
        class
            .message_handlers
            .iter()
            .any(|handler| self.symbol_name(handler.message) == "MsgReadBinary")
    }
}
