// src/stream/mod.rs

//! Incremental decoding of an unframed JSON object stream.

pub mod decoder;

pub use decoder::StreamDecoder;
