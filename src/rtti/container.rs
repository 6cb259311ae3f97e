//! Reference (`Ref<>`, `WeakPtr<>`, ...) and value container (`Array<>`) metadata.

use super::arena::{StringId, TypeId};

/// Auxiliary block naming the container template, e.g. `Array` or `StreamingRef`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainerData {
    pub name_id: StringId,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerType {
    pub inner: TypeId,
    pub data: Option<ContainerData>,
}

impl ContainerType {
    pub fn new(inner: TypeId) -> Self {
        Self { inner, data: None }
    }

    pub fn with_data(mut self, name_id: StringId) -> Self {
        self.data = Some(ContainerData { name_id });
        self
    }
}
