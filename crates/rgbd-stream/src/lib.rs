#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the stream container.
///
/// Defines [`StreamError`] variants for file access, header parsing,
/// and record validation failures.
pub mod error;

/// Pixel formats and stream classification.
///
/// The closed [`PixelFormat`] enum, its per-pixel byte sizing, and the
/// format to [`StreamType`] classification used for legacy files.
pub mod format;

/// Per-stream metadata and on-disk schemas.
///
/// [`StreamMetadata`] describes one stream for the lifetime of a file;
/// [`MetadataSchema`] selects between the current and the legacy (v1)
/// header encoding.
pub mod metadata;

/// Sequential reader over a recorded container file.
///
/// See [`RgbdReader`] for the header parsing and per-record decode loop.
pub mod reader;

/// Sequential writer producing a container file.
///
/// See [`RgbdWriter`] for the header and record layout.
pub mod writer;

mod wire;

pub use crate::error::StreamError;
pub use crate::format::{ImageSize, PixelFormat, StreamType};
pub use crate::metadata::{MetadataSchema, StreamMetadata};
pub use crate::reader::{Frame, RgbdReader};
pub use crate::writer::RgbdWriter;
