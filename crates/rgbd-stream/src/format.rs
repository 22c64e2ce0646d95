use crate::error::StreamError;

/// Image size in pixels
///
/// A struct to represent the size of one stream's frames in pixels.
///
/// # Examples
///
/// ```
/// use rgbd_stream::ImageSize;
///
/// let image_size = ImageSize {
///   width: 640,
///   height: 480,
/// };
///
/// assert_eq!(image_size.width, 640);
/// assert_eq!(image_size.height, 480);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Semantic role of one stream within a container file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
    /// Color camera feed (RGB/BGR, with or without alpha).
    Color,
    /// Depth camera feed.
    Depth,
    /// Infrared camera feed.
    Infrared,
}

impl StreamType {
    pub(crate) fn to_wire(self) -> i32 {
        match self {
            StreamType::Color => 0,
            StreamType::Depth => 1,
            StreamType::Infrared => 2,
        }
    }

    pub(crate) fn from_wire(code: i32) -> Result<Self, StreamError> {
        match code {
            0 => Ok(StreamType::Color),
            1 => Ok(StreamType::Depth),
            2 => Ok(StreamType::Infrared),
            _ => Err(StreamError::UnknownStreamType(code)),
        }
    }
}

/// Raw pixel encoding of one stream's frames.
///
/// The set is closed: every variant has an exact byte size per pixel and
/// a [`StreamType`] classification, both of which the reader relies on
/// to size and validate record payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// 8-bit RGBA.
    Rgba8,
    /// 8-bit RGB.
    Rgb8,
    /// 8-bit BGRA.
    Bgra8,
    /// 8-bit BGR.
    Bgr8,
    /// 16-bit depth in millimeters.
    DepthMillimetersU16,
    /// 32-bit float depth in meters.
    DepthMetersF32,
    /// 8-bit single channel (infrared intensity).
    Gray8,
    /// 16-bit single channel (infrared intensity).
    Gray16,
}

impl PixelFormat {
    /// Total bytes per pixel for this format.
    ///
    /// Buffer allocation and record payload sizing both depend on this
    /// mapping being exact.
    pub const fn pixel_size_bytes(&self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
            PixelFormat::Bgra8 => 4,
            PixelFormat::Bgr8 => 3,
            PixelFormat::DepthMillimetersU16 => 2,
            PixelFormat::DepthMetersF32 => 4,
            PixelFormat::Gray8 => 1,
            PixelFormat::Gray16 => 2,
        }
    }

    /// The stream type implied by this format.
    ///
    /// Legacy (v1) headers do not store a stream type, so readers derive
    /// it from the pixel format through this classification.
    pub const fn stream_type(&self) -> StreamType {
        match self {
            PixelFormat::Rgba8
            | PixelFormat::Rgb8
            | PixelFormat::Bgra8
            | PixelFormat::Bgr8 => StreamType::Color,
            PixelFormat::DepthMillimetersU16 | PixelFormat::DepthMetersF32 => StreamType::Depth,
            PixelFormat::Gray8 | PixelFormat::Gray16 => StreamType::Infrared,
        }
    }

    pub(crate) fn to_wire(self) -> i32 {
        match self {
            PixelFormat::Rgba8 => 0,
            PixelFormat::Rgb8 => 1,
            PixelFormat::Bgra8 => 2,
            PixelFormat::Bgr8 => 3,
            PixelFormat::DepthMillimetersU16 => 4,
            PixelFormat::DepthMetersF32 => 5,
            PixelFormat::Gray8 => 6,
            PixelFormat::Gray16 => 7,
        }
    }

    pub(crate) fn from_wire(code: i32) -> Result<Self, StreamError> {
        match code {
            0 => Ok(PixelFormat::Rgba8),
            1 => Ok(PixelFormat::Rgb8),
            2 => Ok(PixelFormat::Bgra8),
            3 => Ok(PixelFormat::Bgr8),
            4 => Ok(PixelFormat::DepthMillimetersU16),
            5 => Ok(PixelFormat::DepthMetersF32),
            6 => Ok(PixelFormat::Gray8),
            7 => Ok(PixelFormat::Gray16),
            _ => Err(StreamError::UnknownPixelFormat(code)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_FORMATS: [PixelFormat; 8] = [
        PixelFormat::Rgba8,
        PixelFormat::Rgb8,
        PixelFormat::Bgra8,
        PixelFormat::Bgr8,
        PixelFormat::DepthMillimetersU16,
        PixelFormat::DepthMetersF32,
        PixelFormat::Gray8,
        PixelFormat::Gray16,
    ];

    #[test]
    fn pixel_size_bytes_per_format() {
        assert_eq!(PixelFormat::Rgba8.pixel_size_bytes(), 4);
        assert_eq!(PixelFormat::Rgb8.pixel_size_bytes(), 3);
        assert_eq!(PixelFormat::Bgra8.pixel_size_bytes(), 4);
        assert_eq!(PixelFormat::Bgr8.pixel_size_bytes(), 3);
        assert_eq!(PixelFormat::DepthMillimetersU16.pixel_size_bytes(), 2);
        assert_eq!(PixelFormat::DepthMetersF32.pixel_size_bytes(), 4);
        assert_eq!(PixelFormat::Gray8.pixel_size_bytes(), 1);
        assert_eq!(PixelFormat::Gray16.pixel_size_bytes(), 2);
    }

    #[test]
    fn stream_type_per_format() {
        assert_eq!(PixelFormat::Rgba8.stream_type(), StreamType::Color);
        assert_eq!(PixelFormat::Rgb8.stream_type(), StreamType::Color);
        assert_eq!(PixelFormat::Bgra8.stream_type(), StreamType::Color);
        assert_eq!(PixelFormat::Bgr8.stream_type(), StreamType::Color);
        assert_eq!(
            PixelFormat::DepthMillimetersU16.stream_type(),
            StreamType::Depth
        );
        assert_eq!(PixelFormat::DepthMetersF32.stream_type(), StreamType::Depth);
        assert_eq!(PixelFormat::Gray8.stream_type(), StreamType::Infrared);
        assert_eq!(PixelFormat::Gray16.stream_type(), StreamType::Infrared);
    }

    #[test]
    fn pixel_format_wire_codes_round_trip() -> Result<(), StreamError> {
        for format in ALL_FORMATS {
            assert_eq!(PixelFormat::from_wire(format.to_wire())?, format);
        }
        Ok(())
    }

    #[test]
    fn stream_type_wire_codes_round_trip() -> Result<(), StreamError> {
        for stream_type in [StreamType::Color, StreamType::Depth, StreamType::Infrared] {
            assert_eq!(StreamType::from_wire(stream_type.to_wire())?, stream_type);
        }
        Ok(())
    }

    #[test]
    fn unknown_wire_codes_are_rejected() {
        assert!(matches!(
            PixelFormat::from_wire(42),
            Err(StreamError::UnknownPixelFormat(42))
        ));
        assert!(matches!(
            StreamType::from_wire(-1),
            Err(StreamError::UnknownStreamType(-1))
        ));
    }
}
