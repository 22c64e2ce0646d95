use std::io::{Read, Write};

use crate::error::StreamError;
use crate::format::{ImageSize, PixelFormat, StreamType};
use crate::wire;

/// On-disk metadata schema selector.
///
/// The header version field is `1` for both schemas; which metadata
/// layout follows the stream count is a property of the recorder, so the
/// reader must be told which one to expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataSchema {
    /// Current schema: stream type, pixel format, width, height.
    #[default]
    Current,
    /// Legacy (v1) schema: pixel format, width, height. The stream type
    /// is derived from the pixel format while decoding.
    Legacy,
}

/// Description of one stream, fixed for the lifetime of a file.
///
/// Written once in the header by [`crate::RgbdWriter`] and read once at
/// open time by [`crate::RgbdReader`]. The stream id is the position of
/// this entry in the metadata list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamMetadata {
    /// Semantic role of the stream.
    pub stream_type: StreamType,
    /// Raw pixel encoding of every frame in the stream.
    pub pixel_format: PixelFormat,
    /// Frame size in pixels, identical for every frame in the stream.
    pub size: ImageSize,
}

impl StreamMetadata {
    /// Create a new stream description.
    pub fn new(stream_type: StreamType, pixel_format: PixelFormat, size: ImageSize) -> Self {
        Self {
            stream_type,
            pixel_format,
            size,
        }
    }

    /// Exact payload length in bytes of every record of this stream.
    ///
    /// Record payloads are not length-prefixed on disk; the reader
    /// recomputes this value to size its scratch buffer and to know how
    /// many bytes to consume per record.
    pub fn frame_size_bytes(&self) -> usize {
        self.pixel_format.pixel_size_bytes() * self.size.width * self.size.height
    }

    pub(crate) fn decode<R: Read>(
        reader: &mut R,
        schema: MetadataSchema,
    ) -> Result<Self, StreamError> {
        // The legacy schema has no stream type field; derive it from the
        // pixel format so every decoded record is already in the current
        // in-memory shape.
        let (stream_type, pixel_format) = match schema {
            MetadataSchema::Current => {
                let stream_type = StreamType::from_wire(wire::read_i32(reader)?)?;
                let pixel_format = PixelFormat::from_wire(wire::read_i32(reader)?)?;
                (stream_type, pixel_format)
            }
            MetadataSchema::Legacy => {
                let pixel_format = PixelFormat::from_wire(wire::read_i32(reader)?)?;
                (pixel_format.stream_type(), pixel_format)
            }
        };

        let width = wire::read_i32(reader)?;
        let height = wire::read_i32(reader)?;
        if width < 0 || height < 0 {
            return Err(StreamError::InvalidImageSize { width, height });
        }

        Ok(Self {
            stream_type,
            pixel_format,
            size: ImageSize {
                width: width as usize,
                height: height as usize,
            },
        })
    }

    // Always encodes the current schema; the legacy layout is read-only.
    pub(crate) fn encode<W: Write>(&self, writer: &mut W) -> Result<(), StreamError> {
        wire::write_i32(writer, self.stream_type.to_wire())?;
        wire::write_i32(writer, self.pixel_format.to_wire())?;
        wire::write_i32(writer, self.size.width as i32)?;
        wire::write_i32(writer, self.size.height as i32)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn frame_size_bytes_is_exact() {
        let metadata = StreamMetadata::new(
            StreamType::Depth,
            PixelFormat::DepthMillimetersU16,
            [4, 3].into(),
        );
        assert_eq!(metadata.frame_size_bytes(), 2 * 4 * 3);

        let metadata = StreamMetadata::new(StreamType::Color, PixelFormat::Rgba8, [4, 3].into());
        assert_eq!(metadata.frame_size_bytes(), 4 * 4 * 3);
    }

    #[test]
    fn encode_decode_current_schema() -> Result<(), StreamError> {
        let metadata = StreamMetadata::new(
            StreamType::Infrared,
            PixelFormat::Gray16,
            [640, 480].into(),
        );

        let mut buf = Vec::new();
        metadata.encode(&mut buf)?;
        assert_eq!(buf.len(), 16);

        let decoded = StreamMetadata::decode(&mut Cursor::new(buf), MetadataSchema::Current)?;
        assert_eq!(decoded, metadata);
        Ok(())
    }

    #[test]
    fn decode_legacy_schema_derives_stream_type() -> Result<(), StreamError> {
        // pixel format 4 (depth mm u16), 320x240
        let mut buf = Vec::new();
        buf.extend_from_slice(&4i32.to_le_bytes());
        buf.extend_from_slice(&320i32.to_le_bytes());
        buf.extend_from_slice(&240i32.to_le_bytes());

        let decoded = StreamMetadata::decode(&mut Cursor::new(buf), MetadataSchema::Legacy)?;
        assert_eq!(decoded.stream_type, StreamType::Depth);
        assert_eq!(decoded.pixel_format, PixelFormat::DepthMillimetersU16);
        assert_eq!(decoded.size, ImageSize {
            width: 320,
            height: 240
        });
        Ok(())
    }

    #[test]
    fn decode_rejects_negative_dimensions() {
        let mut buf = Vec::new();
        buf.extend_from_slice(&0i32.to_le_bytes());
        buf.extend_from_slice(&0i32.to_le_bytes());
        buf.extend_from_slice(&(-1i32).to_le_bytes());
        buf.extend_from_slice(&3i32.to_le_bytes());

        let result = StreamMetadata::decode(&mut Cursor::new(buf), MetadataSchema::Current);
        assert!(matches!(
            result,
            Err(StreamError::InvalidImageSize {
                width: -1,
                height: 3
            })
        ));
    }
}
