//! Target process attachment via its window title.

use tracing::{debug, info};
use windows::Win32::Foundation::{CloseHandle, HANDLE, HWND};
use windows::Win32::System::Threading::{
    OpenProcess, PROCESS_QUERY_INFORMATION, PROCESS_VM_READ,
};
use windows::Win32::UI::WindowsAndMessaging::{FindWindowA, GetWindowThreadProcessId};
use windows::core::PCSTR;

use crate::error::{Error, Result};

/// An open read-only handle to the target process.
///
/// The handle is closed on drop; the window handle is kept so an overlay
/// sink can paint onto the same window the process was located through.
pub struct ProcessHandle {
    handle: HANDLE,
    window: HWND,
    pid: u32,
}

impl ProcessHandle {
    /// Find the target window by exact title and open its owning process
    /// for memory reads.
    pub fn find_and_open(window_title: &str) -> Result<Self> {
        let title = std::ffi::CString::new(window_title)
            .map_err(|_| Error::WindowNotFound(window_title.to_string()))?;

        // SAFETY: `title` is NUL-terminated and outlives the call.
        let window = unsafe { FindWindowA(PCSTR::null(), PCSTR(title.as_ptr().cast())) }
            .map_err(|_| Error::WindowNotFound(window_title.to_string()))?;

        let mut pid = 0u32;
        // SAFETY: `window` is a live window handle returned above.
        unsafe { GetWindowThreadProcessId(window, Some(&mut pid)) };
        if pid == 0 {
            return Err(Error::WindowNotFound(window_title.to_string()));
        }

        // SAFETY: read-only process open; the handle is closed in Drop.
        let handle =
            unsafe { OpenProcess(PROCESS_VM_READ | PROCESS_QUERY_INFORMATION, false, pid) }
                .map_err(|e| Error::ProcessOpenFailed {
                    pid,
                    message: e.to_string(),
                })?;

        info!(pid, "Attached to target process");
        Ok(Self {
            handle,
            window,
            pid,
        })
    }

    pub fn raw_handle(&self) -> HANDLE {
        self.handle
    }

    pub fn window(&self) -> HWND {
        self.window
    }

    pub fn pid(&self) -> u32 {
        self.pid
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // SAFETY: the handle was opened by us and is closed exactly once.
        if unsafe { CloseHandle(self.handle) }.is_err() {
            debug!(pid = self.pid, "Failed to close process handle");
        }
    }
}
