use crate::api::errors::FormatError;
use crate::utilities::serialize::little_endian_reader::LittleEndianReader;

/// The fixed header at the start of every sample file.
///
/// A single little-endian `i32` holding the record count. For histogram layouts
/// this is the number of bins; for the point-pair layout it is the number of points.
/// There is no magic number or version field.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SampleFileHeader {
    count: u32,
}

impl SampleFileHeader {
    /// Size of header in bytes.
    pub const SIZE_BYTES: usize = 4;

    /// Creates a header declaring `count` records (or bins).
    pub fn new(count: u32) -> Self {
        Self { count }
    }

    /// The declared count, `N`.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Parses the header from the start of a reader, advancing past it.
    ///
    /// # Errors
    ///
    /// * [FormatError::MissingHeader] if fewer than 4 bytes are available.
    /// * [FormatError::NegativeCount] if the declared count is negative.
    pub fn read(reader: &mut LittleEndianReader) -> Result<Self, FormatError> {
        let available = reader.remaining();
        let raw: i32 = reader
            .read()
            .ok_or(FormatError::MissingHeader(available))?;

        if raw < 0 {
            return Err(FormatError::NegativeCount(raw));
        }

        Ok(Self { count: raw as u32 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero(0)]
    #[case::small(3)]
    #[case::max(i32::MAX)]
    fn reads_non_negative_count(#[case] count: i32) {
        let bytes = count.to_le_bytes();
        let mut reader = LittleEndianReader::new(&bytes);
        let header = SampleFileHeader::read(&mut reader).unwrap();
        assert_eq!(header.count(), count as u32);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn rejects_negative_count() {
        let bytes = (-2i32).to_le_bytes();
        let mut reader = LittleEndianReader::new(&bytes);
        assert_eq!(
            SampleFileHeader::read(&mut reader),
            Err(FormatError::NegativeCount(-2))
        );
    }

    #[rstest]
    #[case::empty(&[])]
    #[case::three_bytes(&[1, 0, 0])]
    fn rejects_short_input(#[case] bytes: &[u8]) {
        let mut reader = LittleEndianReader::new(bytes);
        assert_eq!(
            SampleFileHeader::read(&mut reader),
            Err(FormatError::MissingHeader(bytes.len()))
        );
    }
}
