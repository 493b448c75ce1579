//! Out-of-process access to a running game through the Win32 debug APIs.

use std::ffi::c_void;

use tracing::debug;
use windows::Win32::Foundation::{CloseHandle, HANDLE};
use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;
use windows::Win32::System::Diagnostics::ToolHelp::{
    CreateToolhelp32Snapshot, MODULEENTRY32W, Module32FirstW, PROCESSENTRY32W, Process32FirstW,
    Process32NextW, TH32CS_SNAPMODULE, TH32CS_SNAPMODULE32, TH32CS_SNAPPROCESS,
};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};

use crate::error::{Error, Result};
use crate::memory::ReadMemory;

/// Executable name of Skyrim Special Edition
pub const GAME_EXECUTABLE: &str = "SkyrimSE.exe";

/// An open handle to the game process
#[derive(Debug)]
pub struct ProcessHandle {
    pub pid: u32,
    pub base_address: u64,
    pub module_size: u32,
    handle: HANDLE,
}

impl ProcessHandle {
    /// Find the game by executable name and open it for reading
    pub fn find_and_open() -> Result<Self> {
        let pid = find_process_id(GAME_EXECUTABLE)?;
        Self::open(pid)
    }

    /// Open a process by id
    pub fn open(pid: u32) -> Result<Self> {
        // SAFETY: plain handle acquisition; closed in Drop.
        let handle = unsafe { OpenProcess(PROCESS_VM_READ | PROCESS_QUERY_INFORMATION, false, pid) }
            .map_err(|e| Error::ProcessOpenFailed(format!("pid {pid}: {e}")))?;

        let (base_address, module_size) = match main_module(pid) {
            Ok(module) => module,
            Err(e) => {
                // SAFETY: handle was returned by OpenProcess above.
                let _ = unsafe { CloseHandle(handle) };
                return Err(e);
            }
        };
        debug!(
            "Opened pid {} (base: {:#x}, size: {:#x})",
            pid, base_address, module_size
        );

        Ok(Self {
            pid,
            base_address,
            module_size,
            handle,
        })
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle is owned by this struct and closed once.
        let _ = unsafe { CloseHandle(self.handle) };
    }
}

/// `ReadMemory` over an open `ProcessHandle`
pub struct MemoryReader<'a> {
    process: &'a ProcessHandle,
}

impl<'a> MemoryReader<'a> {
    pub fn new(process: &'a ProcessHandle) -> Self {
        Self { process }
    }
}

impl ReadMemory for MemoryReader<'_> {
    fn base_address(&self) -> u64 {
        self.process.base_address
    }

    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; size];
        let mut read = 0usize;
        // SAFETY: the buffer outlives the call and is exactly `size` bytes.
        unsafe {
            ReadProcessMemory(
                self.process.handle,
                address as usize as *const c_void,
                buffer.as_mut_ptr() as *mut c_void,
                size,
                Some(&mut read),
            )
        }
        .map_err(|e| Error::read_failed(address, e.to_string()))?;

        buffer.truncate(read);
        Ok(buffer)
    }
}

fn wide_to_string(wide: &[u16]) -> String {
    let len = wide.iter().position(|&c| c == 0).unwrap_or(wide.len());
    String::from_utf16_lossy(&wide[..len])
}

fn find_process_id(executable: &str) -> Result<u32> {
    // SAFETY: snapshot handle is closed before returning.
    let snapshot = unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0) }
        .map_err(|e| Error::ProcessNotFound(format!("process snapshot failed: {e}")))?;

    let mut entry = PROCESSENTRY32W {
        dwSize: std::mem::size_of::<PROCESSENTRY32W>() as u32,
        ..Default::default()
    };

    let mut found = None;
    // SAFETY: `entry` is a properly sized PROCESSENTRY32W.
    let mut ok = unsafe { Process32FirstW(snapshot, &mut entry) }.is_ok();
    while ok {
        if wide_to_string(&entry.szExeFile).eq_ignore_ascii_case(executable) {
            found = Some(entry.th32ProcessID);
            break;
        }
        // SAFETY: as above.
        ok = unsafe { Process32NextW(snapshot, &mut entry) }.is_ok();
    }

    // SAFETY: snapshot was created above.
    let _ = unsafe { CloseHandle(snapshot) };
    found.ok_or_else(|| Error::ProcessNotFound(executable.to_string()))
}

fn main_module(pid: u32) -> Result<(u64, u32)> {
    // SAFETY: snapshot handle is closed before returning.
    let snapshot =
        unsafe { CreateToolhelp32Snapshot(TH32CS_SNAPMODULE | TH32CS_SNAPMODULE32, pid) }
            .map_err(|e| Error::ProcessOpenFailed(format!("module snapshot failed: {e}")))?;

    let mut entry = MODULEENTRY32W {
        dwSize: std::mem::size_of::<MODULEENTRY32W>() as u32,
        ..Default::default()
    };

    // The first module of a snapshot is the executable itself
    // SAFETY: `entry` is a properly sized MODULEENTRY32W.
    let result = unsafe { Module32FirstW(snapshot, &mut entry) }
        .map(|_| (entry.modBaseAddr as u64, entry.modBaseSize))
        .map_err(|e| Error::ProcessOpenFailed(format!("no main module: {e}")));

    // SAFETY: snapshot was created above.
    let _ = unsafe { CloseHandle(snapshot) };
    result
}
