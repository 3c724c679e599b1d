const M: i64 = 0x7FFF_FFFF;
const A: i64 = 1_103_515_245;
const C: i64 = 12_345;

/// Linear congruential generator with the glibc parameters.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RandomSource {
    state: i64,
}

impl RandomSource {
    pub const fn new(seed: i64) -> Self {
        Self { state: seed & M }
    }

    pub fn next_int(&mut self) -> u32 {
        self.state = (self.state * A + C) & M;
        self.state as u32
    }
}
