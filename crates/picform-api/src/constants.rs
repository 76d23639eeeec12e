//! Route and form constants

/// Every operation redirects back here
pub const INDEX_PATH: &str = "/";

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// Multipart field carrying the convert target
pub const FORMAT_FIELD: &str = "format";

/// Request/response header used to correlate logs
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";
