use core::cmp::Ordering;

use crate::bigint::UBigInt;

impl Ord for UBigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        // normalized, so a longer limb vector is a larger number
        self.limbs
            .len()
            .cmp(&other.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(other.limbs.iter().rev()))
    }
}

impl PartialOrd for UBigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}
