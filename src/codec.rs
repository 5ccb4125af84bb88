//! Uniform `encode`/`decode` surface shared by [`crate::hamming::HammingCodec`]
//! and [`crate::golay::GolayCodec`], so a test harness can drive either one
//! with the same call shape.

use crate::golay::GolayCodec;
use crate::hamming::HammingCodec;

/// A forward-error-correction codec exposing `encode`/`decode` plus the pair
/// of correction/detection flags every codec in this crate reports.
///
/// Hamming reports `(sec, ded)`; Golay reports `(tec, qed)` — different
/// names for the same shape: the first flag means "recovered", the second
/// means "corrupted beyond recovery, but we noticed".
pub trait Codec {
    /// The plain (unencoded) message type.
    type Data;
    /// The encoded, channel-facing representation.
    type Encoded;

    /// Encodes `data` into its protected representation.
    fn encode(&self, data: Self::Data) -> Self::Encoded;

    /// Decodes `encoded`, returning `(data, corrected, detected)`.
    fn decode(&self, encoded: Self::Encoded) -> (Self::Data, bool, bool);
}

impl Codec for HammingCodec {
    type Data = Vec<bool>;
    type Encoded = Vec<bool>;

    fn encode(&self, data: Vec<bool>) -> Vec<bool> {
        HammingCodec::encode(self, &data)
    }

    fn decode(&self, encoded: Vec<bool>) -> (Vec<bool>, bool, bool) {
        HammingCodec::decode(self, &encoded)
    }
}

/// A full Golay frame as the façade sees it: the systematic `data`, its
/// `check` word, and the overall `parity` bit — everything the channel can
/// corrupt, bundled together so `decode` is a function of the frame alone.
pub type GolayFrame = (u16, u16, bool);

impl Codec for GolayCodec {
    type Data = u16;
    type Encoded = GolayFrame;

    fn encode(&self, data: u16) -> GolayFrame {
        let (check, parity) = GolayCodec::encode(self, data);
        (data, check, parity)
    }

    fn decode(&self, encoded: GolayFrame) -> (u16, bool, bool) {
        let (data, check, parity) = encoded;
        GolayCodec::decode(self, data, check, parity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_round_trip_through_facade() {
        let codec = HammingCodec::new(11);
        let data = vec![true, false, true, true, false, false, true, false, true, true, false];
        let encoded = Codec::encode(&codec, data.clone());
        let (decoded, sec, ded) = Codec::decode(&codec, encoded);
        assert_eq!(decoded, data);
        assert!(!sec);
        assert!(!ded);
    }

    #[test]
    fn golay_round_trip_through_facade() {
        let codec = GolayCodec::new();
        let encoded = Codec::encode(&codec, 0xABC);
        let (decoded, tec, qed) = Codec::decode(&codec, encoded);
        assert_eq!(decoded, 0xABC);
        assert!(!tec);
        assert!(!qed);
    }
}
