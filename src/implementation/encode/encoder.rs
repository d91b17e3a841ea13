//! Encoding of series into the sample file layouts read by [`crate::implementation::decode`].

use crate::headers::point::Point;
use crate::headers::sample_file_header::SampleFileHeader;
use crate::utilities::serialize::little_endian_writer::LittleEndianWriter;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Encodes per-sample bin indices, with `nbins` in the header.
///
/// # Panics
///
/// If `nbins` or any index exceeds [i32::MAX]; the format stores signed 32-bit values.
pub fn encode_sample_indices(nbins: u32, indices: &[u32]) -> Vec<u8> {
    let mut writer =
        LittleEndianWriter::with_capacity(SampleFileHeader::SIZE_BYTES + indices.len() * 4);
    writer.write(to_i32(nbins));
    for &index in indices {
        writer.write(to_i32(index));
    }
    writer.into_inner()
}

/// Encodes pre-aggregated per-bin counts, with the number of bins in the header.
///
/// # Panics
///
/// If the number of bins or any count exceeds [i32::MAX].
pub fn encode_bin_counts(counts: &[u32]) -> Vec<u8> {
    let mut writer =
        LittleEndianWriter::with_capacity(SampleFileHeader::SIZE_BYTES + counts.len() * 4);
    writer.write(to_i32(counts.len() as u32));
    for &count in counts {
        writer.write(to_i32(count));
    }
    writer.into_inner()
}

/// Encodes `(x, y)` pairs, with the number of points in the header.
///
/// # Panics
///
/// If more than [i32::MAX] points are given.
pub fn encode_point_pairs(points: &[Point]) -> Vec<u8> {
    let mut writer = LittleEndianWriter::with_capacity(
        SampleFileHeader::SIZE_BYTES + points.len() * Point::SIZE_BYTES,
    );
    let count = u32::try_from(points.len()).unwrap_or(u32::MAX);
    writer.write(to_i32(count));
    for point in points {
        writer.write(point.x);
        writer.write(point.y);
    }
    writer.into_inner()
}

/// Writes encoded bytes to `path`, replacing any existing file.
pub fn write_sample_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.flush()
}

#[inline(always)]
fn to_i32(value: u32) -> i32 {
    assert!(
        value <= i32::MAX as u32,
        "value {value} does not fit the signed 32-bit record format"
    );
    value as i32
}
