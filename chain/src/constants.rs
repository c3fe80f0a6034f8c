/// Current transaction format version.
pub const TRANSACTION_VERSION: u8 = 1;

/// Current block header format version.
pub const BLOCK_VERSION: u32 = 1;

/// Default allowed clock skew for `BlockHeader::valid_timestamp`, in seconds.
pub const MAX_TIME_OFFSET: u32 = 2 * 60 * 60;
