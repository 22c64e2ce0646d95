use std::path::PathBuf;

use argh::FromArgs;
use rgbd_stream::{MetadataSchema, RgbdReader, RgbdWriter};

#[derive(FromArgs)]
/// Copy every record of an RGBD container file into a fresh file,
/// rewriting legacy metadata into the current schema along the way.
struct Args {
    /// path to the source .rgbd file
    #[argh(positional)]
    src: PathBuf,

    /// path to the destination .rgbd file
    #[argh(positional)]
    dst: PathBuf,

    /// parse the source header with the legacy (v1) metadata schema
    #[argh(switch)]
    legacy: bool,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let schema = if args.legacy {
        MetadataSchema::Legacy
    } else {
        MetadataSchema::Current
    };

    let mut reader = match RgbdReader::open_with_schema(&args.src, schema) {
        Ok(reader) => reader,
        Err(e) => {
            log::error!("Error reading input {}: {}", args.src.display(), e);
            std::process::exit(2);
        }
    };

    let mut writer = match RgbdWriter::create(&args.dst, reader.metadata()) {
        Ok(writer) => writer,
        Err(e) => {
            log::error!("Error writing output {}: {}", args.dst.display(), e);
            std::process::exit(2);
        }
    };

    // A None read is the loop's termination condition: end of file and a
    // malformed record look the same to a sequential reader.
    let mut frames = 0u64;
    while let Some(frame) = reader.read() {
        if let Err(e) = writer.write(frame.stream_id, frame.frame_index, frame.timestamp, frame.data)
        {
            log::error!("Error writing frame {}: {}", frames, e);
            std::process::exit(2);
        }
        frames += 1;
    }

    if let Err(e) = writer.close() {
        log::error!("Error closing output {}: {}", args.dst.display(), e);
        std::process::exit(2);
    }

    log::info!(
        "Copied {} frames from {} to {}",
        frames,
        args.src.display(),
        args.dst.display()
    );
}
