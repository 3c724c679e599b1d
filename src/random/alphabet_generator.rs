use super::RandomSource;
use std::{error, fmt};

pub const QRCODE_ALPHANUMERIC: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$', '%', '*', '+', '-', '.', '/', ':',
];

pub const QRCODE_ALPHANUMERIC_NO_SPACE: &[char] = &[
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q',
    'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '$', '%', '*', '+', '-', '.', '/', ':',
];

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    NotEnoughCandidates { candidates: usize, size: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotEnoughCandidates { candidates, size } => {
                write!(f, "Cannot pick {} symbols out of {} candidates", size, candidates)
            }
        }
    }
}

/// Shuffles `items` in place with the sequence seeded by `seed`.
pub fn shuffle<T>(seed: i64, rounds: usize, items: &mut [T]) {
    let mut random = RandomSource::new(seed);
    for _ in 0..rounds {
        for position in 0..items.len() {
            let other = random.next_int() as usize % items.len();
            items.swap(position, other);
        }
    }
}

pub fn generate_random(seed: i64, rounds: usize, candidates: &[char], size: usize) -> Result<Vec<char>, Error> {
    if candidates.len() < size {
        return Err(Error::NotEnoughCandidates {
            candidates: candidates.len(),
            size,
        });
    }
    let mut symbols = candidates.to_vec();
    shuffle(seed, rounds, &mut symbols);
    symbols.truncate(size);
    Ok(symbols)
}
