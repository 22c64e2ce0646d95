use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::StreamError;
use crate::metadata::{MetadataSchema, StreamMetadata};
use crate::wire;

/// One decoded frame record, borrowed from the reader.
///
/// `data` points into the per-stream scratch buffer owned by the reader;
/// it is valid until the next [`RgbdReader::read`] call.
#[derive(Debug)]
pub struct Frame<'a> {
    /// Index of the stream this frame belongs to.
    pub stream_id: u32,
    /// Frame counter as recorded by the producer.
    pub frame_index: i32,
    /// Capture timestamp as recorded by the producer.
    pub timestamp: i64,
    /// Raw pixel payload, exactly `frame_size_bytes()` of the stream's
    /// metadata.
    pub data: &'a [u8],
}

/// A struct for sequentially reading a recorded RGBD container file.
///
/// The header is parsed eagerly at open time; a reader that exists is a
/// valid reader. Each [`RgbdReader::read`] call decodes one record into
/// a per-stream scratch buffer that is reused across calls, so no
/// allocation happens on the per-frame path.
pub struct RgbdReader {
    reader: BufReader<File>,
    metadata: Vec<StreamMetadata>,
    buffers: Vec<Vec<u8>>,
}

impl RgbdReader {
    /// Open a container file recorded with the current metadata schema.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StreamError> {
        Self::open_with_schema(path, MetadataSchema::Current)
    }

    /// Open a container file with an explicit metadata schema.
    ///
    /// Parses the full header before returning: magic, format version,
    /// stream count, and one metadata record per stream. Any mismatch or
    /// short read fails the open; there is no partially usable reader.
    pub fn open_with_schema(
        path: impl AsRef<Path>,
        schema: MetadataSchema,
    ) -> Result<Self, StreamError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if magic != wire::MAGIC {
            return Err(StreamError::InvalidMagic(magic));
        }

        let version = wire::read_i32(&mut reader)?;
        if version != wire::FORMAT_VERSION {
            return Err(StreamError::UnsupportedVersion(version));
        }

        let n_streams = wire::read_i32(&mut reader)?;
        if n_streams <= 0 {
            return Err(StreamError::InvalidStreamCount(n_streams));
        }

        let mut metadata = Vec::with_capacity(n_streams as usize);
        let mut buffers = Vec::with_capacity(n_streams as usize);
        for _ in 0..n_streams {
            let stream = StreamMetadata::decode(&mut reader, schema)?;
            // Size the scratch buffer from the record just decoded,
            // before the next one is read.
            buffers.push(vec![0u8; stream.frame_size_bytes()]);
            metadata.push(stream);
        }

        Ok(Self {
            reader,
            metadata,
            buffers,
        })
    }

    /// The stream descriptors declared in the file header.
    ///
    /// Legacy (v1) files are already normalized: the stream type has
    /// been derived from the pixel format during the open.
    pub fn metadata(&self) -> &[StreamMetadata] {
        &self.metadata
    }

    /// Decode the next frame record.
    ///
    /// Returns `None` at end of file, on any short read, or when the
    /// record addresses a stream the header does not declare; there is no
    /// distinct end-of-file signal. Reading is strictly sequential with
    /// no way to seek.
    ///
    /// The returned [`Frame`] borrows the addressed stream's scratch
    /// buffer, so the payload must be consumed (or copied) before the
    /// next call.
    pub fn read(&mut self) -> Option<Frame<'_>> {
        let stream_id = wire::read_u32(&mut self.reader).ok()?;
        let idx = stream_id as usize;
        if idx >= self.buffers.len() {
            return None;
        }

        let frame_index = wire::read_i32(&mut self.reader).ok()?;
        let timestamp = wire::read_i64(&mut self.reader).ok()?;
        self.reader.read_exact(&mut self.buffers[idx]).ok()?;

        Some(Frame {
            stream_id,
            frame_index,
            timestamp,
            data: &self.buffers[idx],
        })
    }
}
