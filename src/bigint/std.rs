use num_bigint::BigUint;

use crate::bigint::UBigInt;

impl UBigInt {
    /// Interpret `bytes` as an unsigned little-endian integer of any length.
    pub fn from_le_bytes(bytes: &[u8]) -> Self {
        let limbs = bytes
            .chunks(4)
            .map(|chunk| {
                let mut word = [0u8; 4];
                word[..chunk.len()].copy_from_slice(chunk);
                u32::from_le_bytes(word)
            })
            .collect();
        Self::from_limbs(limbs)
    }

    /// Little-endian bytes, zero-padded to at least `width`. A value wider
    /// than `width` keeps all of its significant bytes.
    pub fn to_le_bytes(&self, width: usize) -> Vec<u8> {
        let mut bytes: Vec<u8> = self.limbs.iter().flat_map(|l| l.to_le_bytes()).collect();
        bytes.resize(width.max(self.bits().div_ceil(8) as usize), 0);
        bytes
    }

    /// Minimal big-endian hex without prefix; `"0"` for zero.
    pub fn to_hex(&self) -> String {
        match self.limbs.split_last() {
            None => "0".to_string(),
            Some((top, rest)) => {
                let mut s = format!("{:x}", top);
                for limb in rest.iter().rev() {
                    s.push_str(&hex::encode(limb.to_be_bytes()));
                }
                s
            }
        }
    }
}

impl From<BigUint> for UBigInt {
    fn from(n: BigUint) -> Self { Self::from_limbs(n.to_u32_digits()) }
}

impl From<&BigUint> for UBigInt {
    fn from(n: &BigUint) -> Self { Self::from_limbs(n.to_u32_digits()) }
}

impl From<&UBigInt> for BigUint {
    fn from(n: &UBigInt) -> Self { BigUint::from_slice(n.limbs()) }
}

impl From<UBigInt> for BigUint {
    fn from(n: UBigInt) -> Self { BigUint::new(n.limbs) }
}
