//! Operating system abstraction layer (macOS).
//!
//! Randomness is provided by `arc4random_buf`, which is backed by the
//! kernel entropy source and documented never to fail; the `Result` is
//! kept so all platform shims share one contract.

use {crate::Result, libc::arc4random_buf};

/// Fills a buffer with cryptographically secure random bytes from the OS.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    unsafe {
        arc4random_buf(buf.as_mut_ptr() as *mut libc::c_void, buf.len());
    }
    Ok(())
}
