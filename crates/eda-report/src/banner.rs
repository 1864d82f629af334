use rand::Rng;

const BANNER_PREFIX: &str = "pRiVeT)";
const BANNER_SUFFIX: &str = "!";
const BANNER_ALPHABET: [char; 2] = [')', '0'];
const BANNER_LENGTH: usize = 9;

/// Greeting line printed before the report, with a random tail.
pub fn banner<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut line = String::with_capacity(BANNER_PREFIX.len() + BANNER_LENGTH + 1);
    line.push_str(BANNER_PREFIX);
    for _ in 0..BANNER_LENGTH {
        line.push(BANNER_ALPHABET[rng.random_range(0..BANNER_ALPHABET.len())]);
    }
    line.push_str(BANNER_SUFFIX);
    line
}
