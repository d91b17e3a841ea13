//! Decoding of sample files into in-memory series.
//!
//! All multi-byte values are little-endian. Files carry no byte order marker,
//! so files written in big-endian order are not supported.

use super::decoded_series::*;
use crate::api::enums::RecordLayout;
use crate::api::errors::FormatError;
use crate::headers::point::Point;
use crate::headers::sample_file_header::SampleFileHeader;
use crate::utilities::serialize::little_endian_reader::{LittleEndianReader, ReadAsLittleEndian};

type Result<T> = core::result::Result<T, FormatError>;

/// Decodes `bytes` according to the caller-selected `layout`.
///
/// # Arguments
/// * `bytes` - The whole sample file, header included.
/// * `layout` - The record layout of the body.
///
/// # Returns
/// * `Ok(DecodedSeries)` - Records in file order.
/// * `Err(FormatError)` - If the bytes do not match the layout.
pub fn decode(bytes: &[u8], layout: RecordLayout) -> Result<DecodedSeries> {
    match layout {
        RecordLayout::SampleIndex => decode_sample_indices(bytes).map(DecodedSeries::Histogram),
        RecordLayout::BinCount => decode_bin_counts(bytes).map(DecodedSeries::Histogram),
        RecordLayout::PointPair => decode_point_pairs(bytes).map(DecodedSeries::Points),
    }
}

/// Decodes a file of per-sample bin indices.
///
/// The header holds `nbins`; the number of samples is implied by the file length,
/// `(len - 4) / 4`. Every index must be in `[0, nbins)`.
pub fn decode_sample_indices(bytes: &[u8]) -> Result<HistogramSeries> {
    let mut reader = LittleEndianReader::new(bytes);
    let header = SampleFileHeader::read(&mut reader)?;
    let nbins = header.count();

    let record_size = RecordLayout::SampleIndex.record_size();
    let body_len = reader.remaining();
    if body_len % record_size != 0 {
        return Err(FormatError::PartialRecord {
            body_len,
            record_size,
        });
    }

    let num_samples = body_len / record_size;
    let mut indices = Vec::with_capacity(num_samples);
    for position in 0..num_samples {
        let index = read_record::<i32>(&mut reader, num_samples, record_size)?;
        if index < 0 || index as u32 >= nbins {
            return Err(FormatError::IndexOutOfRange {
                position,
                index,
                nbins,
            });
        }
        indices.push(index as u32);
    }

    Ok(HistogramSeries::SampleIndices { nbins, indices })
}

/// Decodes a file of pre-aggregated per-bin counts.
///
/// The header holds `nbins`, followed by exactly `nbins` non-negative counts.
pub fn decode_bin_counts(bytes: &[u8]) -> Result<HistogramSeries> {
    let mut reader = LittleEndianReader::new(bytes);
    let header = SampleFileHeader::read(&mut reader)?;
    let declared = header.count() as usize;
    let record_size = RecordLayout::BinCount.record_size();
    check_body_length(&reader, declared, record_size)?;

    let mut counts = Vec::with_capacity(declared);
    for bin in 0..declared {
        let count = read_record::<i32>(&mut reader, declared, record_size)?;
        if count < 0 {
            return Err(FormatError::NegativeBinCount { bin, count });
        }
        counts.push(count as u32);
    }

    Ok(HistogramSeries::BinCounts(counts))
}

/// Decodes a file of `(x, y)` double-precision pairs.
///
/// The header holds the number of points, followed by exactly that many
/// 16-byte records. Non-finite coordinates are rejected.
pub fn decode_point_pairs(bytes: &[u8]) -> Result<PointSeries> {
    let mut reader = LittleEndianReader::new(bytes);
    let header = SampleFileHeader::read(&mut reader)?;
    let declared = header.count() as usize;
    let record_size = RecordLayout::PointPair.record_size();
    check_body_length(&reader, declared, record_size)?;

    let mut points = Vec::with_capacity(declared);
    for position in 0..declared {
        let x = read_record::<f64>(&mut reader, declared, record_size)?;
        let y = read_record::<f64>(&mut reader, declared, record_size)?;
        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(FormatError::NonFinitePoint { position, x, y });
        }
        points.push(point);
    }

    Ok(PointSeries(points))
}

/// Verifies the body holds exactly `declared` records of `record_size` bytes.
fn check_body_length(
    reader: &LittleEndianReader,
    declared: usize,
    record_size: usize,
) -> Result<()> {
    let actual_bytes = reader.remaining();
    let expected_bytes = declared.saturating_mul(record_size);

    if actual_bytes < expected_bytes {
        return Err(FormatError::Truncated {
            declared,
            expected_bytes,
            actual_bytes,
        });
    }

    if actual_bytes > expected_bytes {
        return Err(FormatError::TrailingBytes {
            declared,
            expected_bytes,
            actual_bytes,
        });
    }

    Ok(())
}

/// Reads one value, mapping a short read to [FormatError::Truncated].
///
/// Body lengths are validated up front, so this only fails on a logic error.
#[inline(always)]
fn read_record<T: ReadAsLittleEndian>(
    reader: &mut LittleEndianReader,
    declared: usize,
    record_size: usize,
) -> Result<T> {
    let actual_bytes = reader.remaining();
    reader.read().ok_or(FormatError::Truncated {
        declared,
        expected_bytes: declared.saturating_mul(record_size),
        actual_bytes,
    })
}
