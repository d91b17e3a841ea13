use core::mem::size_of;

/// A trait for types that can be read in little-endian format.
///
/// Types implementing this trait can be read from a [LittleEndianReader]
/// at the current position.
pub trait ReadAsLittleEndian: Sized {
    /// Number of bytes consumed by a single value.
    const SIZE_BYTES: usize;

    /// Decodes the value from exactly [`Self::SIZE_BYTES`] little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

/// A bounds-checked cursor for reading little-endian values from a byte slice.
///
/// Unlike a raw pointer reader, every read checks the remaining length and
/// returns [None] instead of reading past the end of the buffer.
#[derive(Debug, Clone)]
pub struct LittleEndianReader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> LittleEndianReader<'a> {
    /// Creates a new [LittleEndianReader] positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        LittleEndianReader { data, position: 0 }
    }

    /// Reads a value from the current position and advances the cursor.
    ///
    /// # Returns
    ///
    /// The value, or [None] if fewer than `T::SIZE_BYTES` bytes remain.
    /// The cursor is not advanced on failure.
    #[inline(always)]
    pub fn read<T: ReadAsLittleEndian>(&mut self) -> Option<T> {
        let end = self.position.checked_add(T::SIZE_BYTES)?;
        let bytes = self.data.get(self.position..end)?;
        self.position = end;
        Some(T::from_le_slice(bytes))
    }

    /// Number of bytes consumed so far.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of bytes left to read.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }
}

// Implement ReadAsLittleEndian for various integer and floating point types
macro_rules! impl_read_little_endian {
    ($($t:ty),*) => {
        $(
            impl ReadAsLittleEndian for $t {
                const SIZE_BYTES: usize = size_of::<$t>();

                #[inline(always)]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    <$t>::from_le_bytes(raw)
                }
            }
        )*
    };
}

impl_read_little_endian!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mixed_values_in_order() {
        let mut data = Vec::new();
        data.extend_from_slice(&(-7i32).to_le_bytes());
        data.extend_from_slice(&1.5f64.to_le_bytes());
        data.extend_from_slice(&0xDEADBEEFu32.to_le_bytes());

        let mut reader = LittleEndianReader::new(&data);
        assert_eq!(reader.read::<i32>(), Some(-7));
        assert_eq!(reader.read::<f64>(), Some(1.5));
        assert_eq!(reader.read::<u32>(), Some(0xDEADBEEF));
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.position(), 16);
    }

    #[test]
    fn short_read_does_not_advance() {
        let data = [1u8, 2, 3];
        let mut reader = LittleEndianReader::new(&data);
        assert_eq!(reader.read::<i32>(), None);
        assert_eq!(reader.position(), 0);
        assert_eq!(reader.read::<u16>(), Some(0x0201));
        assert_eq!(reader.remaining(), 1);
    }
}
