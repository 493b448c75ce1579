use encoding_rs::WINDOWS_1252;

use crate::error::{Error, Result};

/// Upper bound for narrow strings read through the chunked path
pub const MAX_TEXT_LEN: usize = 512;

/// Chunk size for string reads. Chunks are aligned to this size so a read
/// never straddles a page boundary.
const TEXT_CHUNK: u64 = 64;

/// Read access to the game's address space.
///
/// Only `base_address` and `read_bytes` are required. The typed helpers decode
/// little-endian values on top of them; readers with a cheaper native path may
/// override them.
pub trait ReadMemory {
    /// Load address of the game module
    fn base_address(&self) -> u64;

    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    /// Read a pointer-sized value (the game is 64-bit only)
    fn read_u64(&self, address: u64) -> Result<u64> {
        let bytes = self.read_bytes(address, 8)?;
        Ok(u64::from_le_bytes(to_array(address, &bytes)?))
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        let bytes = self.read_bytes(address, 4)?;
        Ok(f32::from_le_bytes(to_array(address, &bytes)?))
    }

    /// Read three consecutive floats (an `NiPoint3`)
    fn read_f32x3(&self, address: u64) -> Result<[f32; 3]> {
        let bytes = self.read_bytes(address, 12)?;
        if bytes.len() < 12 {
            return Err(Error::read_failed(address, format!("short read: {} bytes", bytes.len())));
        }
        let mut out = [0.0f32; 3];
        for (value, chunk) in out.iter_mut().zip(bytes.chunks_exact(4)) {
            *value = f32::from_le_bytes(to_array(address, chunk)?);
        }
        Ok(out)
    }

    /// Read a NUL-terminated narrow string.
    ///
    /// Reads at most `MAX_TEXT_LEN` bytes. A string without a terminator in
    /// that window is returned truncated.
    fn read_c_string(&self, address: u64) -> Result<String> {
        let mut data = Vec::new();
        let mut cursor = address;

        while data.len() < MAX_TEXT_LEN {
            let size = ((TEXT_CHUNK - cursor % TEXT_CHUNK) as usize).min(MAX_TEXT_LEN - data.len());

            let chunk = match self.read_bytes(cursor, size) {
                Ok(chunk) => chunk,
                // Partially mapped chunk: fall back to single bytes
                Err(e) => read_until_fault(self, cursor, size).ok_or(e)?,
            };

            if let Some(end) = memchr::memchr(0, &chunk) {
                data.extend_from_slice(&chunk[..end]);
                return Ok(decode_text(&data));
            }

            let complete = chunk.len() == size;
            data.extend_from_slice(&chunk);
            if !complete {
                return Err(Error::read_failed(
                    cursor.saturating_add(chunk.len() as u64),
                    "string is not terminated before unreadable memory",
                ));
            }
            cursor = cursor
                .checked_add(size as u64)
                .ok_or_else(|| Error::read_failed(cursor, "string runs past the end of the address space"))?;
        }

        Ok(decode_text(&data))
    }
}

/// Decode game text (Windows-1252) into UTF-8
pub fn decode_text(bytes: &[u8]) -> String {
    let len = memchr::memchr(0, bytes).unwrap_or(bytes.len());
    let (decoded, _) = WINDOWS_1252.decode_without_bom_handling(&bytes[..len]);
    decoded.into_owned()
}

fn to_array<const N: usize>(address: u64, bytes: &[u8]) -> Result<[u8; N]> {
    bytes
        .get(..N)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| Error::read_failed(address, format!("short read: {} bytes", bytes.len())))
}

/// Byte-by-byte read that stops at the first unreadable byte or terminator.
/// Returns `None` when not even the first byte is readable.
fn read_until_fault<R: ReadMemory + ?Sized>(reader: &R, address: u64, size: usize) -> Option<Vec<u8>> {
    let mut out = Vec::with_capacity(size);
    for i in 0..size as u64 {
        let Some(byte_address) = address.checked_add(i) else {
            break;
        };
        match reader.read_bytes(byte_address, 1) {
            Ok(byte) if !byte.is_empty() => {
                out.push(byte[0]);
                if byte[0] == 0 {
                    break;
                }
            }
            _ => break,
        }
    }
    if out.is_empty() { None } else { Some(out) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MockMemoryBuilder;

    #[test]
    fn test_read_typed_values() {
        let reader = MockMemoryBuilder::new()
            .write_u64(0x1000, 0xDEAD_BEEF_0000_0001)
            .write_f32(0x1020, 0.45)
            .build();

        assert_eq!(reader.read_u64(0x1000).unwrap(), 0xDEAD_BEEF_0000_0001);
        assert_eq!(reader.read_f32(0x1020).unwrap(), 0.45);
    }

    #[test]
    fn test_read_f32x3() {
        let reader = MockMemoryBuilder::new()
            .write_f32(0x2000, 1.5)
            .write_f32(0x2004, -2.0)
            .write_f32(0x2008, 4096.0)
            .build();

        assert_eq!(reader.read_f32x3(0x2000).unwrap(), [1.5, -2.0, 4096.0]);
    }

    #[test]
    fn test_read_unmapped_fails() {
        let reader = MockMemoryBuilder::new().build();
        assert!(reader.read_u64(0x1234).is_err());
        assert!(reader.read_f32(0x1234).is_err());
    }

    #[test]
    fn test_read_c_string_crossing_chunks() {
        // Starts 10 bytes before a chunk boundary
        let text = "Tamriel, the continent of Nirn";
        let reader = MockMemoryBuilder::new().write_c_string(0x3036, text).build();
        assert_eq!(reader.read_c_string(0x3036).unwrap(), text);
    }

    #[test]
    fn test_read_c_string_empty() {
        let reader = MockMemoryBuilder::new().write_c_string(0x4000, "").build();
        assert_eq!(reader.read_c_string(0x4000).unwrap(), "");
    }

    #[test]
    fn test_read_c_string_windows_1252() {
        let reader = MockMemoryBuilder::new()
            .write_bytes(0x5000, &[b'D', 0xFC, b'n', b'e', 0])
            .build();
        assert_eq!(reader.read_c_string(0x5000).unwrap(), "Düne");
    }

    #[test]
    fn test_read_c_string_unterminated_before_fault() {
        let reader = MockMemoryBuilder::new().write_bytes(0x6000, b"Whiterun").build();
        assert!(reader.read_c_string(0x6000).is_err());
    }

    #[test]
    fn test_read_c_string_is_capped() {
        let long = "a".repeat(MAX_TEXT_LEN + 100);
        let reader = MockMemoryBuilder::new().write_c_string(0x7000, &long).build();
        let text = reader.read_c_string(0x7000).unwrap();
        assert_eq!(text.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_reads_at_top_of_address_space() {
        let reader = MockMemoryBuilder::new().build();
        assert!(reader.read_c_string(0xFFFF_FFFF_FFFF_FFF0).is_err());
        assert!(reader.read_c_string(u64::MAX).is_err());
        assert!(reader.read_f32x3(0xFFFF_FFFF_FFFF_FFFC).is_err());
        assert!(reader.read_u64(u64::MAX - 3).is_err());
    }

    #[test]
    fn test_read_c_string_ending_at_top_of_address_space() {
        let reader = MockMemoryBuilder::new()
            .write_bytes(0xFFFF_FFFF_FFFF_FFF8, b"Skyrim\0")
            .build();
        assert_eq!(reader.read_c_string(0xFFFF_FFFF_FFFF_FFF8).unwrap(), "Skyrim");

        // Unterminated up to the last byte
        let reader = MockMemoryBuilder::new()
            .write_bytes(0xFFFF_FFFF_FFFF_FFFC, b"Nirn")
            .build();
        assert!(reader.read_c_string(0xFFFF_FFFF_FFFF_FFFC).is_err());
    }

    #[test]
    fn test_decode_text_stops_at_nul() {
        assert_eq!(decode_text(b"Riverwood\0garbage"), "Riverwood");
        assert_eq!(decode_text(b""), "");
    }
}
