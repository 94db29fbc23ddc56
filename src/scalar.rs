//! fixed width arithmetic on 256 bit scalars modulo the secp256k1
//! group order
//!
//! child key derivation only needs three operations on the private
//! scalars: compare against the group order, test for zero and add
//! two scalars modulo the order. They are implemented here on big
//! endian 32 byte buffers so the derivation path stays free of any
//! intermediate allocation.

/// the order `n` of the secp256k1 group, big endian
pub const GROUP_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xfe, 0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36,
    0x41, 0x41,
];

pub const SCALAR_SIZE: usize = 32;

/// a 256 bit unsigned integer in big endian representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scalar([u8; SCALAR_SIZE]);

impl Scalar {
    pub fn from_bytes(bytes: [u8; SCALAR_SIZE]) -> Self {
        Scalar(bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> Self {
        assert!(bytes.len() == SCALAR_SIZE);
        let mut buf = [0u8; SCALAR_SIZE];
        buf[..].clone_from_slice(bytes);
        Scalar(buf)
    }

    pub fn to_bytes(&self) -> [u8; SCALAR_SIZE] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// strict comparison against the group order
    pub fn is_below_order(&self) -> bool {
        lt(&self.0, &GROUP_ORDER)
    }

    /// `(self + other) mod n`, both operands must be below the order
    pub fn add_mod_order(&self, other: &Scalar) -> Scalar {
        debug_assert!(self.is_below_order() && other.is_below_order());
        let (carry, mut sum) = add(&self.0, &other.0);
        // the sum of two scalars below n is below 2n, a single
        // subtraction reduces it
        if carry || !lt(&sum, &GROUP_ORDER) {
            sub_assign(&mut sum, &GROUP_ORDER);
        }
        Scalar(sum)
    }
}

fn lt(x: &[u8; SCALAR_SIZE], y: &[u8; SCALAR_SIZE]) -> bool {
    for i in 0..SCALAR_SIZE {
        if x[i] < y[i] {
            return true;
        }
        if x[i] > y[i] {
            return false;
        }
    }
    false
}

fn add(x: &[u8; SCALAR_SIZE], y: &[u8; SCALAR_SIZE]) -> (bool, [u8; SCALAR_SIZE]) {
    let mut out = [0u8; SCALAR_SIZE];
    let mut carry = 0u16;
    for i in (0..SCALAR_SIZE).rev() {
        let r = x[i] as u16 + y[i] as u16 + carry;
        out[i] = r as u8;
        carry = r >> 8;
    }
    (carry != 0, out)
}

fn sub_assign(x: &mut [u8; SCALAR_SIZE], y: &[u8; SCALAR_SIZE]) {
    let mut borrow = 0i16;
    for i in (0..SCALAR_SIZE).rev() {
        let r = x[i] as i16 - y[i] as i16 - borrow;
        if r < 0 {
            x[i] = (r + 256) as u8;
            borrow = 1;
        } else {
            x[i] = r as u8;
            borrow = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_minus(d: u8) -> Scalar {
        let mut bytes = GROUP_ORDER;
        bytes[31] -= d;
        Scalar::from_bytes(bytes)
    }

    fn small(v: u8) -> Scalar {
        let mut bytes = [0u8; SCALAR_SIZE];
        bytes[31] = v;
        Scalar::from_bytes(bytes)
    }

    #[test]
    fn zero() {
        assert!(small(0).is_zero());
        assert!(!small(1).is_zero());
        assert!(small(0).is_below_order());
    }

    #[test]
    fn below_order() {
        assert!(order_minus(1).is_below_order());
        assert!(!Scalar::from_bytes(GROUP_ORDER).is_below_order());
        assert!(!Scalar::from_bytes([0xff; SCALAR_SIZE]).is_below_order());
    }

    #[test]
    fn add_small() {
        assert_eq!(small(2).add_mod_order(&small(3)), small(5));
    }

    #[test]
    fn add_wraps_to_zero() {
        let sum = order_minus(1).add_mod_order(&small(1));
        assert!(sum.is_zero());
    }

    #[test]
    fn add_with_carry() {
        // (n - 1) + (n - 1) = 2n - 2, the addition carries out of
        // the 256 bits before the reduction
        let sum = order_minus(1).add_mod_order(&order_minus(1));
        assert_eq!(sum, order_minus(2));
    }

    #[test]
    fn add_just_below_order() {
        let sum = order_minus(2).add_mod_order(&small(1));
        assert_eq!(sum, order_minus(1));
        assert!(sum.is_below_order());
    }
}
