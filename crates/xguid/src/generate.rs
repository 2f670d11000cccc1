//! Fresh guid generation
//!
//! Generation is a thin seam over a platform backend: the backend hands
//! back 16 raw bytes, the seam wraps them in a `Guid`. There is no retry
//! and no validation of backend output; a backend that returns all zeroes
//! produces a guid that downstream validity checks report as invalid, the
//! same as a parse failure.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::Guid;

/// A platform source of raw 128-bit identifiers.
///
/// Implementations are infallible by contract: each call returns exactly
/// 16 fresh bytes. Collision probability across calls must be negligible.
/// The default backend is [`OsSource`]; a managed-runtime backend lives in
/// the FFI crate and plugs in through the same trait.
pub trait GuidSource {
    fn raw_guid(&mut self) -> [u8; 16];
}

/// The OS entropy backend.
///
/// `OsRng` fronts the operating system's native random facility on every
/// supported platform, so this single backend covers the libuuid-style,
/// Apple, and Windows sources alike.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsSource;

impl GuidSource for OsSource {
    fn raw_guid(&mut self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        OsRng.fill_bytes(&mut bytes);
        bytes
    }
}

/// Generate a fresh guid from the OS entropy backend.
#[inline]
pub fn new_guid() -> Guid {
    new_guid_from(&mut OsSource)
}

/// Generate a fresh guid from an explicit backend.
pub fn new_guid_from(source: &mut impl GuidSource) -> Guid {
    Guid::new(source.raw_guid())
}
