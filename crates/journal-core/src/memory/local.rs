//! Reader over the host process's own address space.
//!
//! This is what the journal uses when it runs inside the game. Reads are
//! plain pointer loads: a null address is reported as an error, but a
//! non-null address that is not mapped faults the process. Chains guard
//! against the null case only.

use std::ffi::CStr;

use crate::error::{Error, Result};
use crate::memory::ReadMemory;
use crate::memory::reader::decode_text;

/// In-process memory reader
#[derive(Debug, Clone, Copy)]
pub struct LocalMemory {
    base_address: u64,
}

impl LocalMemory {
    /// Create a reader rooted at `base_address`.
    ///
    /// # Safety
    ///
    /// Every non-null address later passed to the reader (directly or through
    /// an address chain) must point into readable memory of this process.
    pub unsafe fn new(base_address: u64) -> Result<Self> {
        if base_address == 0 {
            return Err(Error::NullBaseAddress);
        }
        Ok(Self { base_address })
    }
}

impl ReadMemory for LocalMemory {
    fn base_address(&self) -> u64 {
        self.base_address
    }

    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        if address == 0 {
            return Err(Error::read_failed(address, "null address"));
        }
        let mut out = vec![0u8; size];
        // SAFETY: `new` requires callers to only hand us mapped addresses.
        unsafe {
            std::ptr::copy_nonoverlapping(address as usize as *const u8, out.as_mut_ptr(), size);
        }
        Ok(out)
    }

    fn read_u64(&self, address: u64) -> Result<u64> {
        if address == 0 {
            return Err(Error::read_failed(address, "null address"));
        }
        // SAFETY: see `read_bytes`.
        Ok(unsafe { std::ptr::read_unaligned(address as usize as *const u64) })
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        if address == 0 {
            return Err(Error::read_failed(address, "null address"));
        }
        // SAFETY: see `read_bytes`.
        Ok(unsafe { std::ptr::read_unaligned(address as usize as *const f32) })
    }

    /// In-process strings are read up to their terminator with no length bound
    fn read_c_string(&self, address: u64) -> Result<String> {
        if address == 0 {
            return Err(Error::read_failed(address, "null address"));
        }
        // SAFETY: see `read_bytes`; the game keeps its fixed strings terminated.
        let text = unsafe { CStr::from_ptr(address as usize as *const std::ffi::c_char) };
        Ok(decode_text(text.to_bytes()))
    }
}

/// Load address of the executable this code runs in
#[cfg(target_os = "windows")]
pub fn current_module_base() -> Result<u64> {
    use windows::Win32::System::LibraryLoader::GetModuleHandleW;
    use windows::core::PCWSTR;

    // SAFETY: a null module name asks for the calling process's executable.
    let module = unsafe { GetModuleHandleW(PCWSTR::null()) }
        .map_err(|e| Error::ProcessNotFound(format!("GetModuleHandleW failed: {e}")))?;
    let base = module.0 as u64;
    if base == 0 {
        return Err(Error::NullBaseAddress);
    }
    Ok(base)
}

/// Load address of the executable this code runs in
#[cfg(not(target_os = "windows"))]
pub fn current_module_base() -> Result<u64> {
    Err(Error::ProcessNotFound(
        "module base lookup is only supported on Windows".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_base_rejected() {
        let result = unsafe { LocalMemory::new(0) };
        assert!(matches!(result, Err(Error::NullBaseAddress)));
    }

    #[test]
    fn test_reads_own_memory() {
        let values: [f32; 3] = [1.0, -2.5, 8192.0];
        let pointer: u64 = values.as_ptr() as usize as u64;
        let slot = &pointer as *const u64 as usize as u64;
        let text = b"Solitude\0";

        let reader = unsafe { LocalMemory::new(slot) }.unwrap();
        assert_eq!(reader.read_u64(slot).unwrap(), pointer);
        assert_eq!(reader.read_f32(pointer + 4).unwrap(), -2.5);
        assert_eq!(reader.read_f32x3(pointer).unwrap(), values);
        assert_eq!(
            reader.read_c_string(text.as_ptr() as usize as u64).unwrap(),
            "Solitude"
        );
    }

    #[test]
    fn test_null_reads_are_errors() {
        let reader = unsafe { LocalMemory::new(0x1000) }.unwrap();
        assert!(reader.read_u64(0).is_err());
        assert!(reader.read_f32(0).is_err());
        assert!(reader.read_c_string(0).is_err());
    }
}
