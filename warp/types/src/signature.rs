use crate::ContractError;

/// An Ethereum-style recoverable secp256k1 signature.
///
/// `v` is the recovery ID offset by 27, i.e. either 27 or 28.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoverableSignature {
    pub v: u8,
    pub r: [u8; 32],
    pub s: [u8; 32],
}

impl RecoverableSignature {
    pub const LENGTH: usize = 65;

    /// Parse from the packed `v ‖ r ‖ s` layout used in signature blobs.
    pub fn from_packed(bytes: &[u8; Self::LENGTH]) -> Self {
        let mut r = [0; 32];
        let mut s = [0; 32];
        r.copy_from_slice(&bytes[1..33]);
        s.copy_from_slice(&bytes[33..]);

        Self { v: bytes[0], r, s }
    }

    pub fn to_packed(&self) -> [u8; Self::LENGTH] {
        let mut bytes = [0; Self::LENGTH];
        bytes[0] = self.v;
        bytes[1..33].copy_from_slice(&self.r);
        bytes[33..].copy_from_slice(&self.s);
        bytes
    }

    /// The `r ‖ s` part.
    pub fn rs(&self) -> [u8; 64] {
        let mut bytes = [0; 64];
        bytes[..32].copy_from_slice(&self.r);
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }

    /// The recovery ID, 0 or 1.
    pub fn recovery_id(&self) -> Result<u8, ContractError> {
        match self.v {
            27 | 28 => Ok(self.v - 27),
            v => Err(ContractError::MalformedSignature {
                reason: format!("invalid recovery byte {v}; must be 27 or 28"),
            }),
        }
    }
}

/// Split a blob of concatenated `v ‖ r ‖ s` triples into signatures, keeping
/// their order.
pub fn decode_signatures(blob: &[u8]) -> Result<Vec<RecoverableSignature>, ContractError> {
    if blob.len() % RecoverableSignature::LENGTH != 0 {
        return Err(ContractError::MalformedSignature {
            reason: format!(
                "blob length {} is not a multiple of {}",
                blob.len(),
                RecoverableSignature::LENGTH
            ),
        });
    }

    blob.chunks_exact(RecoverableSignature::LENGTH)
        .map(|chunk| {
            chunk
                .try_into()
                .map(RecoverableSignature::from_packed)
                .map_err(|err| ContractError::MalformedSignature {
                    reason: format!("failed to read signature: {err}"),
                })
        })
        .collect()
}

/// Concatenate signatures into a blob, in the given order.
pub fn encode_signatures<'a, I>(signatures: I) -> Vec<u8>
where
    I: IntoIterator<Item = &'a RecoverableSignature>,
{
    signatures
        .into_iter()
        .flat_map(|signature| signature.to_packed())
        .collect()
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, crate::ResultExt, test_case::test_case};

    fn mock_signature(v: u8, fill: u8) -> RecoverableSignature {
        RecoverableSignature {
            v,
            r: [fill; 32],
            s: [fill.wrapping_add(1); 32],
        }
    }

    #[test]
    fn decoding_preserves_order() {
        let signatures = [mock_signature(27, 3), mock_signature(28, 1)];
        let blob = encode_signatures(&signatures);

        assert_eq!(blob.len(), 130);
        assert_eq!(blob[0], 27);
        assert_eq!(blob[65], 28);
        decode_signatures(&blob).should_succeed_and_equal(signatures.to_vec());
    }

    #[test_case(0; "empty")]
    #[test_case(65; "one")]
    #[test_case(195; "three")]
    fn decoding_whole_triples(len: usize) {
        decode_signatures(&vec![27; len])
            .should_succeed_and(|signatures| signatures.len() == len / 65);
    }

    #[test_case(64; "short")]
    #[test_case(66; "long")]
    fn rejecting_partial_triples(len: usize) {
        decode_signatures(&vec![27; len]).should_fail_with_error("!sig");
    }

    #[test_case(27 => Some(0))]
    #[test_case(28 => Some(1))]
    #[test_case(0 => None)]
    #[test_case(29 => None)]
    fn recovery_ids(v: u8) -> Option<u8> {
        mock_signature(v, 0).recovery_id().ok()
    }
}
