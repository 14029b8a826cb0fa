/// Caps the number of rows returned and optionally skips a prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub limit: u64,

    /// Number of rows to skip before returning any
    pub offset: Option<u64>,
}

impl Limit {
    pub fn new(limit: u64) -> Self {
        Self {
            limit,
            offset: None,
        }
    }

    pub fn with_offset(limit: u64, offset: u64) -> Self {
        Self {
            limit,
            offset: Some(offset),
        }
    }

    pub fn offset(&self) -> u64 {
        self.offset.unwrap_or(0)
    }
}
