//! Entry point for the `rtti` subsystem: descriptor storage, traversal, lookup and casts.

pub mod arena;
pub mod builder;
pub mod cast;
pub mod class;
pub mod container;
pub mod enumeration;
pub mod error;
pub mod fmt;
pub mod hash;
pub mod kind;
pub mod lookup;
pub mod primitive;
pub mod record;
pub mod registry;
pub mod walker;

pub use arena::{StringId, TypeId, TypeTable};
pub use builder::{ClassBuilder, EnumBuilder, PrimitiveBuilder, TypeBuilder};
pub use cast::{Reflected, RttiObject};
pub use class::{
    ClassHooks, ClassType, InheritanceEntry, InheritedMessageEntry, MemberEntry, MemberFlags,
    MessageHandlerEntry, PropertyFn, ScriptFunctionEntry,
};
pub use container::{ContainerData, ContainerType};
pub use enumeration::{EnumEntry, EnumType};
pub use error::{RttiError, RttiResult};
pub use hash::{murmur3_x64_128, CORE_TYPE_ID_SEED};
pub use lookup::ResolvedMember;
pub use primitive::{PrimitiveHooks, PrimitiveType};
pub use record::{PodType, RuntimeTypeId, RuntimeTypeIds, TableSpan, TypeInfo, TypeKind, TypeRecord};
pub use walker::{InheritanceWalker, MemberVisit};
