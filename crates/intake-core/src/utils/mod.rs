//!
//! Utility helpers shared across layers: document codecs, digests, and
//! wall-clock time. Each submodule is a small focused toolkit used by the
//! storage and access layers.
//!

pub mod codec;
pub mod digest;
pub mod time;
