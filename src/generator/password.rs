use rand::Rng;

/// ASCII letters, digits and punctuation.
pub const PASSWORD_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                       abcdefghijklmnopqrstuvwxyz\
                                       0123456789\
                                       !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generates a random password of `length` characters.
///
/// Each character is drawn uniformly, with replacement, from
/// [`PASSWORD_ALPHABET`].
pub fn generate_password<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..PASSWORD_ALPHABET.len());
            PASSWORD_ALPHABET[idx] as char
        })
        .collect()
}
