//! zeroing of sensitive memory

/// set all the bytes of the given slice to zero
///
/// used by the `Drop` implementation of the types holding key
/// material so the secrets do not outlive their owner.
pub fn zero(to_zero: &mut [u8]) {
    // the unsafety of this call is bounded by the existence of the
    // slice and its actual size.
    unsafe { ::std::ptr::write_bytes(to_zero.as_mut_ptr(), 0, to_zero.len()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_all_bytes() {
        let mut buf = [0xffu8; 67];
        zero(&mut buf);
        assert!(buf.iter().all(|b| *b == 0));
    }
}
