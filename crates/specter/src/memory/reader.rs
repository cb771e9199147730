//! Byte-level access to a foreign address space.

use crate::error::{Error, Result};

#[cfg(target_os = "windows")]
use super::process::ProcessHandle;

fn short_read(address: u64, wanted: usize, got: usize) -> Error {
    Error::MemoryReadFailed {
        address,
        message: format!("short read: {got} of {wanted} bytes"),
    }
}

/// Read access to the target's memory.
///
/// Every typed helper is a little-endian view over `read_bytes`. A failed
/// read always surfaces as `Error::MemoryReadFailed`; implementations must
/// return an error for any invalid address rather than panic or fault.
pub trait ReadMemory {
    /// Read `size` bytes starting at `address`.
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>>;

    fn read_u32(&self, address: u64) -> Result<u32> {
        let bytes = self.read_bytes(address, 4)?;
        let array: [u8; 4] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| short_read(address, 4, b.len()))?;
        Ok(u32::from_le_bytes(array))
    }

    fn read_i32(&self, address: u64) -> Result<i32> {
        let bytes = self.read_bytes(address, 4)?;
        let array: [u8; 4] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| short_read(address, 4, b.len()))?;
        Ok(i32::from_le_bytes(array))
    }

    fn read_f32(&self, address: u64) -> Result<f32> {
        let bytes = self.read_bytes(address, 4)?;
        let array: [u8; 4] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| short_read(address, 4, b.len()))?;
        Ok(f32::from_le_bytes(array))
    }

    fn read_u64(&self, address: u64) -> Result<u64> {
        let bytes = self.read_bytes(address, 8)?;
        let array: [u8; 8] = bytes
            .try_into()
            .map_err(|b: Vec<u8>| short_read(address, 8, b.len()))?;
        Ok(u64::from_le_bytes(array))
    }

    /// Read a pointer-sized slot value. The supported memory layouts
    /// describe 32-bit targets, so slots hold 4 bytes and are widened.
    fn read_addr(&self, address: u64) -> Result<u64> {
        Ok(u64::from(self.read_u32(address)?))
    }

    /// Read `N` consecutive little-endian floats.
    fn read_f32_array<const N: usize>(&self, address: u64) -> Result<[f32; N]> {
        let bytes = self.read_bytes(address, 4 * N)?;
        let mut values = [0.0f32; N];
        for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(4)) {
            *value = f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(values)
    }
}

/// Reader over a live process opened with [`ProcessHandle`].
///
/// Every range is checked for committed, readable pages before the actual
/// read, so wild addresses degrade to an error instead of a fault.
#[cfg(target_os = "windows")]
pub struct MemoryReader<'a> {
    process: &'a ProcessHandle,
}

#[cfg(target_os = "windows")]
impl<'a> MemoryReader<'a> {
    pub fn new(process: &'a ProcessHandle) -> Self {
        Self { process }
    }

    fn is_readable(&self, address: u64, size: usize) -> bool {
        use windows::Win32::System::Memory::{
            MEM_COMMIT, MEMORY_BASIC_INFORMATION, PAGE_GUARD, PAGE_NOACCESS, VirtualQueryEx,
        };

        let mut info = MEMORY_BASIC_INFORMATION::default();
        // SAFETY: the query writes at most one MEMORY_BASIC_INFORMATION
        // into the buffer we provide.
        let written = unsafe {
            VirtualQueryEx(
                self.process.raw_handle(),
                Some(address as *const core::ffi::c_void),
                &mut info,
                size_of::<MEMORY_BASIC_INFORMATION>(),
            )
        };
        if written == 0 {
            return false;
        }
        if info.State != MEM_COMMIT {
            return false;
        }
        if info.Protect.contains(PAGE_NOACCESS) || info.Protect.contains(PAGE_GUARD) {
            return false;
        }

        let region_end = info.BaseAddress as u64 + info.RegionSize as u64;
        address
            .checked_add(size as u64)
            .is_some_and(|end| end <= region_end)
    }
}

#[cfg(target_os = "windows")]
impl ReadMemory for MemoryReader<'_> {
    fn read_bytes(&self, address: u64, size: usize) -> Result<Vec<u8>> {
        use windows::Win32::System::Diagnostics::Debug::ReadProcessMemory;

        if address == 0 {
            return Err(Error::MemoryReadFailed {
                address,
                message: "null address".to_string(),
            });
        }
        if !self.is_readable(address, size) {
            return Err(Error::MemoryReadFailed {
                address,
                message: format!("range of {size} bytes is not readable"),
            });
        }

        let mut buffer = vec![0u8; size];
        let mut bytes_read = 0usize;
        // SAFETY: the buffer is sized for the request and the range was
        // verified readable; the call writes at most `size` bytes.
        unsafe {
            ReadProcessMemory(
                self.process.raw_handle(),
                address as *const core::ffi::c_void,
                buffer.as_mut_ptr().cast(),
                size,
                Some(&mut bytes_read),
            )
        }
        .map_err(|e| Error::MemoryReadFailed {
            address,
            message: e.to_string(),
        })?;

        if bytes_read != size {
            return Err(short_read(address, size, bytes_read));
        }
        Ok(buffer)
    }
}
