use std::{error::Error, fmt};

pub type RttiResult<T> = Result<T, RttiError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RttiError {
    DuplicateSymbol {
        name: String,
    },
    DuplicateRuntimeId {
        id: u16,
        existing: String,
    },
    TableOverflow {
        owner: String,
        table: &'static str,
        count: usize,
        limit: usize,
    },
    NotAClass {
        symbol: String,
    },
    CyclicInheritance {
        class: String,
        base: String,
    },
    AlreadyInstalled,
    PropertyAccess {
        class: String,
        member: String,
    },
    DynamicCastUnsupported,
}

impl fmt::Display for RttiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RttiError::DuplicateSymbol { name } => {
                write!(f, "symbol '{name}' is already described by the table")
            }
            RttiError::DuplicateRuntimeId { id, existing } => write!(
                f,
                "runtime type id 0x{id:04X} is already assigned to '{existing}'"
            ),
            RttiError::TableOverflow {
                owner,
                table,
                count,
                limit,
            } => write!(
                f,
                "'{owner}' declares {count} {table} entries but the count field holds at most {limit}"
            ),
            RttiError::NotAClass { symbol } => {
                write!(f, "'{symbol}' is not a class descriptor")
            }
            RttiError::CyclicInheritance { class, base } => write!(
                f,
                "inheriting '{base}' from '{class}' would make the inheritance graph cyclic"
            ),
            RttiError::AlreadyInstalled => {
                write!(f, "the process-wide type table has already been installed")
            }
            RttiError::PropertyAccess { class, member } => write!(
                f,
                "member '{member}' of '{class}' is property-backed and has no raw storage offset"
            ),
            RttiError::DynamicCastUnsupported => {
                write!(f, "dynamic_cast is not supported by this reflection layer")
            }
        }
    }
}

impl Error for RttiError {}
