use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::StreamError;
use crate::metadata::StreamMetadata;
use crate::wire;

/// A struct for writing a multiplexed RGBD recording to a file.
///
/// The stream list is fixed at construction; the header is written
/// eagerly and every subsequent [`RgbdWriter::write`] appends one frame
/// record. The writer owns the file handle and releases it on
/// [`RgbdWriter::close`] or drop.
pub struct RgbdWriter {
    writer: Option<BufWriter<File>>,
    metadata: Vec<StreamMetadata>,
}

impl RgbdWriter {
    /// Create a new RgbdWriter.
    ///
    /// Truncates any existing file at `path` and writes the full header:
    /// magic, format version, stream count, and one metadata record per
    /// stream. The stream id of each stream is its index in `metadata`.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to save the recording.
    /// * `metadata` - One descriptor per stream, must not be empty.
    pub fn create(path: impl AsRef<Path>, metadata: &[StreamMetadata]) -> Result<Self, StreamError> {
        // An empty stream list must not touch the filesystem.
        if metadata.is_empty() {
            return Err(StreamError::EmptyMetadata);
        }

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writer.write_all(&wire::MAGIC)?;
        wire::write_i32(&mut writer, wire::FORMAT_VERSION)?;
        wire::write_i32(&mut writer, metadata.len() as i32)?;
        for stream in metadata {
            stream.encode(&mut writer)?;
        }

        Ok(Self {
            writer: Some(writer),
            metadata: metadata.to_vec(),
        })
    }

    /// The stream descriptors this writer was created with.
    pub fn metadata(&self) -> &[StreamMetadata] {
        &self.metadata
    }

    /// Append one frame record.
    ///
    /// `data` must be exactly `frame_size_bytes()` of the addressed
    /// stream's metadata; a conforming reader recomputes that length from
    /// the header, so a mismatched payload desynchronizes every record
    /// that follows it.
    ///
    /// Any I/O failure should be treated as fatal for the remainder of
    /// the file: a half-written record corrupts all subsequent reads.
    pub fn write(
        &mut self,
        stream_id: u32,
        frame_index: i32,
        timestamp: i64,
        data: &[u8],
    ) -> Result<(), StreamError> {
        if stream_id as usize >= self.metadata.len() {
            return Err(StreamError::StreamIdOutOfRange {
                stream_id,
                stream_count: self.metadata.len(),
            });
        }

        let writer = self.writer.as_mut().ok_or(StreamError::StreamClosed)?;
        wire::write_u32(writer, stream_id)?;
        wire::write_i32(writer, frame_index)?;
        wire::write_i64(writer, timestamp)?;
        writer.write_all(data)?;
        Ok(())
    }

    /// Flush and release the file handle.
    ///
    /// Closing an already closed writer is a no-op and returns `Ok`.
    pub fn close(&mut self) -> Result<(), StreamError> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }
}

impl Drop for RgbdWriter {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            log::error!("Failed to close RGBD writer: {}", e);
        }
    }
}
