//! Uplink/downlink payload codec for a LoRaWAN pulse and climate sensor.
//!
//! # Crate Structure
//!
//! - [`payload`] — Tag-prefixed uplink decoding, downlink encoding/decoding and
//!   point extraction
//!
//! The `lwcodec` binary (behind the `cli` feature) runs each operation from
//! the command line.

/// Re-export payload codec types.
pub mod payload {
    pub use lwcodec_payload::*;
}
