//! Runtime type reflection over descriptor tables produced by an external data model.
//!
//! The [`rtti`] subsystem stores type descriptors (primitives, references, containers,
//! enums, classes and runtime plain-data blocks) in a frozen table and answers
//! inheritance-aware questions about them: kind-of tests, member enumeration with
//! categories and absolute offsets, by-name member reads and checked narrowing casts.

pub mod rtti;
