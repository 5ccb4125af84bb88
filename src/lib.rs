//! Behavioral golden model for two forward-error-correction codecs used in
//! hardware verification: a `P`-parameterized extended Hamming SECDED code
//! and the extended `[24,12,8]` binary Golay code.
//!
//! Both codecs are pure, synchronous, and stateless beyond their
//! construction-time constants; see [`codec::Codec`] for the uniform
//! surface a verification harness drives them through.

pub mod bits;
pub mod codec;
pub mod golay;
pub mod hamming;
