/// An error type for the stream container.
#[derive(thiserror::Error, Debug)]
pub enum StreamError {
    /// Error to manipulate the underlying file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The file does not start with the `rgbd` magic bytes.
    #[error("Invalid magic bytes: {0:?}")]
    InvalidMagic([u8; 4]),

    /// The container format version is not supported.
    #[error("Unsupported format version: {0}")]
    UnsupportedVersion(i32),

    /// The header declares a non-positive number of streams.
    #[error("Invalid stream count: {0}")]
    InvalidStreamCount(i32),

    /// A metadata record carries an unknown stream type code.
    #[error("Unknown stream type code: {0}")]
    UnknownStreamType(i32),

    /// A metadata record carries an unknown pixel format code.
    #[error("Unknown pixel format code: {0}")]
    UnknownPixelFormat(i32),

    /// A metadata record carries a negative image dimension.
    #[error("Invalid image size: {width}x{height}")]
    InvalidImageSize {
        /// Width field as read from the file.
        width: i32,
        /// Height field as read from the file.
        height: i32,
    },

    /// A writer needs at least one stream.
    #[error("Stream metadata must not be empty")]
    EmptyMetadata,

    /// A record addresses a stream the header does not declare.
    #[error("Stream id {stream_id} out of range for {stream_count} streams")]
    StreamIdOutOfRange {
        /// Stream id supplied by the caller.
        stream_id: u32,
        /// Number of streams declared at construction.
        stream_count: usize,
    },

    /// The writer was already closed.
    #[error("Stream is already closed")]
    StreamClosed,
}
