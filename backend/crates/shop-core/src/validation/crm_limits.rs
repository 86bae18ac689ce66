pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 4096;
pub const DEFAULT_MAX_IDENTIFIER_LENGTH: usize = 255;
pub const DEFAULT_MAX_METADATA_ENTRIES: usize = 64;

/// Size limits applied to CRM request bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrmLimits {
    /// Maximum characters in a message body
    pub max_content_length: usize,
    /// Maximum characters in ids, usernames and media URLs
    pub max_identifier_length: usize,
    pub max_metadata_entries: usize,
}

impl Default for CrmLimits {
    fn default() -> Self {
        Self {
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            max_identifier_length: DEFAULT_MAX_IDENTIFIER_LENGTH,
            max_metadata_entries: DEFAULT_MAX_METADATA_ENTRIES,
        }
    }
}
