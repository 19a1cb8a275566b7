//! Operating system abstraction layer (Linux).
//!
//! Exposes the kernel entropy pool through the `getrandom` system call.
//! `getrandom` may block briefly while the pool initialises at early boot
//! and may return short reads or `EINTR`/`EAGAIN` under signal pressure;
//! the shim absorbs both behind a bounded retry loop.

use {
    crate::{Error, Result},
    libc::{EAGAIN, EINTR, c_void, getrandom},
};

/// Largest single request handed to the kernel. Reads beyond this size are
/// split so a short read never loses alignment with the retry accounting.
const CHUNK_SIZE: usize = 256;

/// Consecutive failed attempts tolerated before giving up.
const RETRY_BUDGET: u32 = 32;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads are handled transparently. Interruptions (`EINTR`) and
/// transient unavailability (`EAGAIN`) are retried up to [`RETRY_BUDGET`]
/// consecutive times; any other failure, or an exhausted budget, surfaces
/// as [`Error::Rng`].
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<()> {
    let mut filled = 0;
    let mut retries = 0;

    while filled < buf.len() {
        let want = CHUNK_SIZE.min(buf.len() - filled);
        let ret = unsafe { getrandom(buf[filled..].as_mut_ptr() as *mut c_void, want, 0) };

        if ret < 0 {
            let errno = std::io::Error::last_os_error().raw_os_error();
            if errno == Some(EINTR) || errno == Some(EAGAIN) {
                retries += 1;
                if retries > RETRY_BUDGET {
                    return Err(Error::Rng);
                }
                continue;
            }
            return Err(Error::Rng);
        }

        filled += ret as usize;
        retries = 0;
    }

    Ok(())
}
