//! Integers tagged with a modulus.
//!
//! "mod" means two different things here. Field reduction by the modulus `M`
//! keeps every value in `[0, M)` and happens inside `add`, `sub`, `mul` and
//! construction. The remainder of `rem` is taken by the divisor's value, never
//! by `M`, and `div` is the integer quotient of the two magnitudes rather than
//! multiplication by an inverse.

use core::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use tracing::{debug, trace};

use crate::bigint::UBigInt;
use crate::error::{ModIntError, Result};
use crate::modulus::{register, Modulus, ModulusName};

/// A canonical residue `0 <= value < modulus`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ModInt {
    value: UBigInt,
    modulus: &'static Modulus,
}

impl ModInt {
    /// Interpret `bytes` as an unsigned little-endian integer of any width and
    /// reduce it into `[0, modulus)`.
    pub fn from_le_bytes(bytes: &[u8], modulus: &'static Modulus) -> Self {
        Self::from_ubigint(UBigInt::from_le_bytes(bytes), modulus)
    }

    /// Like [`ModInt::from_le_bytes`], but the buffer must be exactly
    /// `modulus.byte_len()` bytes long.
    pub fn from_le_bytes_exact(bytes: &[u8], modulus: &'static Modulus) -> Result<Self> {
        if bytes.len() != modulus.byte_len() {
            return Err(ModIntError::MalformedInput(format!(
                "{} expects {} bytes, got {}",
                modulus.name(),
                modulus.byte_len(),
                bytes.len()
            )));
        }
        Ok(Self::from_le_bytes(bytes, modulus))
    }

    pub fn from_ubigint(value: UBigInt, modulus: &'static Modulus) -> Self {
        if value < *modulus.value() {
            return Self { value, modulus };
        }
        trace!(modulus = %modulus.name(), bits = value.bits(), "reducing non-canonical input");
        Self { value: reduce(&value, modulus), modulus }
    }

    pub fn from_u64(v: u64, modulus: &'static Modulus) -> Self {
        Self::from_ubigint(UBigInt::from(v), modulus)
    }

    pub fn zero(modulus: &'static Modulus) -> Self { Self { value: UBigInt::zero(), modulus } }

    pub fn one(modulus: &'static Modulus) -> Self { Self::from_ubigint(UBigInt::one(), modulus) }

    /// Little-endian bytes, always `modulus().byte_len()` long.
    pub fn to_le_bytes(&self) -> Vec<u8> { self.value.to_le_bytes(self.modulus.byte_len()) }

    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = self.to_le_bytes();
        bytes.reverse();
        bytes
    }

    pub fn value(&self) -> &UBigInt { &self.value }

    pub fn modulus(&self) -> &'static Modulus { self.modulus }

    pub fn is_zero(&self) -> bool { self.value.is_zero() }

    fn check_modulus(&self, other: &Self) -> Result<()> {
        if self.modulus.value() != other.modulus.value() {
            debug!(
                lhs = %self.modulus.name(),
                rhs = %other.modulus.name(),
                "rejecting operands with different moduli"
            );
            return Err(ModIntError::ModulusMismatch {
                lhs: self.modulus.name(),
                rhs: other.modulus.name(),
            });
        }
        Ok(())
    }

    fn with_value(&self, value: UBigInt) -> Self { Self { value, modulus: self.modulus } }

    /// `(a + b) mod M`
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(self.add_canonical(&other.value))
    }

    /// `(a - b + M) mod M`
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(self.sub_canonical(&other.value))
    }

    /// `(a * b) mod M`
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        Ok(self.mul_canonical(&other.value))
    }

    /// `floor(a / b)` of the magnitudes.
    pub fn try_div(&self, other: &Self) -> Result<Self> {
        self.check_modulus(other)?;
        match self.value.div_rem(&other.value) {
            // a < M, so the quotient is canonical
            Some((q, _)) => Ok(self.with_value(q)),
            None => {
                debug!(modulus = %self.modulus.name(), "rejecting division by zero");
                Err(ModIntError::DivisionByZero)
            }
        }
    }

    /// `a - (a / b) * b`, the remainder of dividing the magnitudes.
    pub fn try_rem(&self, other: &Self) -> Result<Self> {
        let q = self.try_div(other)?;
        let qb = q.try_mul(other)?;
        self.try_sub(&qb)
    }

    /// Additive inverse, `(M - a) mod M`. Backs unary `-`.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        self.with_value(self.modulus.value().clone()).sub_canonical(&self.value)
    }

    /// `a^e mod M` by square-and-multiply.
    pub fn pow(&self, exponent: &UBigInt) -> Self {
        let mut acc = Self::one(self.modulus);
        for bit in exponent.to_be_bits() {
            acc = acc.square_canonical();
            if bit {
                acc = acc.mul_canonical(&self.value);
            }
        }
        acc
    }

    // The helpers below assume `other` is already reduced by `self.modulus`.

    fn add_canonical(&self, other: &UBigInt) -> Self {
        let mut sum = self.value.add(other);
        // a + b < 2M, one subtraction is enough
        if sum >= *self.modulus.value() {
            sum.sub_assign_unchecked(self.modulus.value());
        }
        self.with_value(sum)
    }

    fn sub_canonical(&self, other: &UBigInt) -> Self {
        if let Some(diff) = self.value.checked_sub(other) {
            return self.with_value(diff);
        }
        // a < b: M - b + a, with M - b > 0
        let mut wrapped = self.modulus.value().clone();
        wrapped.sub_assign_unchecked(other);
        self.with_value(wrapped.add(&self.value))
    }

    fn mul_canonical(&self, other: &UBigInt) -> Self {
        let product = self.value.mul(other);
        self.with_value(reduce(&product, self.modulus))
    }

    fn square_canonical(&self) -> Self { self.with_value(reduce(&self.value.square(), self.modulus)) }
}

fn reduce(value: &UBigInt, modulus: &Modulus) -> UBigInt {
    match value.rem(modulus.value()) {
        Some(r) => r,
        // `Modulus::new` rejects zero
        None => unreachable!("{} modulus is zero", modulus.name()),
    }
}

impl fmt::Debug for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModInt({:#x}, {})", self, self.modulus.name())
    }
}

impl fmt::LowerHex for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.value.to_hex())
    }
}

impl fmt::Display for ModInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{:#x}", self) }
}

/// Serialized form: the modulus name plus the fixed-width little-endian value
/// in hex.
#[derive(Serialize, Deserialize)]
struct ModIntRepr {
    modulus: ModulusName,
    le_bytes: String,
}

impl Serialize for ModInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        ModIntRepr { modulus: self.modulus.name(), le_bytes: hex::encode(self.to_le_bytes()) }
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ModInt {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let repr = ModIntRepr::deserialize(deserializer)?;
        let modulus = register(repr.modulus);
        let bytes = hex::decode(&repr.le_bytes).map_err(de::Error::custom)?;
        // serialized values are canonical, anything else would not round trip
        if UBigInt::from_le_bytes(&bytes) >= *modulus.value() {
            return Err(de::Error::custom(ModIntError::MalformedInput(format!(
                "{} value is not below the modulus",
                modulus.name()
            ))));
        }
        ModInt::from_le_bytes_exact(&bytes, modulus).map_err(de::Error::custom)
    }
}
