use rand::Rng;

const ID_ALPHABET: &[u8] = b"1234567890abcdefghijklmnopqrstuvwxyz";

/// Length of bundle and build ids.
pub const SHORT_ID_LEN: usize = 10;

/// Short, human-friendly id drawn from `[0-9a-z]`.
///
/// Unique enough to tell requests apart within one process; not a global key.
pub fn short_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..SHORT_ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}
