//! Chat identity type for core messages.

/// Chat (private, group or channel) addressed by its numeric id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chat {
    pub id: i64,
}

impl Chat {
    pub fn with_id(id: i64) -> Self {
        Self { id }
    }
}
