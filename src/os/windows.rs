//! Operating system abstraction layer (Windows).
//!
//! Forwards to the CNG system-preferred random number generator.

use {
    crate::{Error, Result},
    windows_sys::Win32::Security::Cryptography::{
        BCRYPT_USE_SYSTEM_PREFERRED_RNG, BCryptGenRandom,
    },
};

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// A non-zero NTSTATUS from `BCryptGenRandom` surfaces as [`Error::Rng`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let status = unsafe {
        BCryptGenRandom(
            std::ptr::null_mut(),
            buf.as_mut_ptr(),
            buf.len() as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status != 0 {
        return Err(Error::Rng);
    }

    Ok(())
}
