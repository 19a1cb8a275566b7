//! Operating system abstraction layer.
//!
//! Selects the platform-specific entropy shim at compile time. Each shim
//! exposes the same contract: fill a buffer with cryptographically secure
//! random bytes, blocking briefly as needed, and fail with
//! [`Error::Rng`](crate::Error::Rng) once a finite retry budget is spent.

#[cfg(target_os = "linux")]
pub(crate) mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::*;

#[cfg(target_os = "macos")]
pub(crate) mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::*;

#[cfg(target_os = "windows")]
pub(crate) mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::*;
