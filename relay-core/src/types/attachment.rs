//! File attached to an incoming message.

/// Document metadata as delivered by the transport. Bytes are fetched later through [`crate::Bot::download_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    /// Transport file id used to fetch the content.
    pub file_id: String,
    /// Original file name, when the sender's client supplied one.
    pub file_name: Option<String>,
    pub file_size: u64,
    pub mime_type: Option<String>,
}
