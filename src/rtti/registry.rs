//! Process-wide, write-once type table.
//!
//! The producer builds a [`TypeTable`] during start-up and installs it exactly once; from
//! then on the table is only reachable through shared references.

use std::sync::OnceLock;

use log::{debug, warn};

use super::arena::TypeTable;
use super::cast::{Reflected, RttiObject};
use super::error::{RttiError, RttiResult};

static TYPE_TABLE: OnceLock<TypeTable> = OnceLock::new();

/// Freezes `table` as the process-wide descriptor table.
pub fn install(table: TypeTable) -> RttiResult<&'static TypeTable> {
    let count = table.len();
    let mut fresh = false;
    let frozen = TYPE_TABLE.get_or_init(|| {
        fresh = true;
        table
    });
    if !fresh {
        warn!("rejected second type table install ({count} descriptors)");
        return Err(RttiError::AlreadyInstalled);
    }
    debug!("installed process-wide type table with {count} descriptors");
    Ok(frozen)
}

pub fn installed() -> Option<&'static TypeTable> {
    TYPE_TABLE.get()
}

/// [`TypeTable::cast`] against the installed table; `None` before installation.
pub fn cast<'object, T, U>(object: &'object U) -> Option<&'object T>
where
    T: Reflected,
    U: RttiObject + ?Sized,
{
    installed()?.cast(object)
}

/// [`TypeTable::dynamic_cast`] against the installed table.
///
/// # Panics
///
/// Always; the operation is not supported.
pub fn dynamic_cast<'object, T, U>(_object: &'object U) -> Option<&'object T>
where
    T: Reflected,
    U: RttiObject + ?Sized,
{
    panic!("{}", RttiError::DynamicCastUnsupported)
}
