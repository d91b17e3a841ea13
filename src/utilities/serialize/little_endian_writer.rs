/// A trait for types that can be written in little-endian format.
///
/// Types implementing this trait can be appended to a [LittleEndianWriter].
pub trait WriteAsLittleEndian {
    /// Appends the value in little-endian format to the end of the writer's buffer.
    fn write_le(self, writer: &mut LittleEndianWriter);
}

/// A utility for writing data in little-endian format into a growable buffer.
#[derive(Debug, Default)]
pub struct LittleEndianWriter {
    buffer: Vec<u8>,
}

impl LittleEndianWriter {
    /// Creates a new [LittleEndianWriter] with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        LittleEndianWriter {
            buffer: Vec::with_capacity(capacity),
        }
    }

    /// Writes a value at the current end of the buffer.
    #[inline(always)]
    pub fn write<T: WriteAsLittleEndian>(&mut self, value: T) {
        value.write_le(self);
    }

    /// Consumes the writer, returning the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

macro_rules! impl_write_little_endian {
    ($($t:ty),*) => {
        $(
            impl WriteAsLittleEndian for $t {
                #[inline(always)]
                fn write_le(self, writer: &mut LittleEndianWriter) {
                    writer.buffer.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

impl_write_little_endian!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_little_endian_bytes() {
        let mut writer = LittleEndianWriter::with_capacity(12);
        writer.write(1i32);
        writer.write(-1.0f64);
        let bytes = writer.into_inner();

        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..12], &(-1.0f64).to_le_bytes());
    }
}
