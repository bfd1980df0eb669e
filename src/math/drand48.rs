use rand::{Error, RngCore, SeedableRng};

const MULTIPLIER: u64 = 0x5_DEEC_E66D;
const INCREMENT: u64 = 0xB;
const MASK: u64 = (1 << 48) - 1;
const SEED_LOW: u64 = 0x330E;

/// 48-bit linear congruential generator with `srand48`/`drand48` semantics.
///
/// `next_u64` places the 48-bit state in the high bits, so the `Standard`
/// `f64` distribution (`rng.gen::<f64>()`) returns exactly `state / 2^48`,
/// the same value `drand48()` would.
///
/// ```
/// use bacon_nn::Drand48;
/// use rand::{Rng, SeedableRng};
///
/// let mut rng = Drand48::seed_from_u64(1);
/// let first: f64 = rng.gen();
/// assert!((first - 0.041630344771878214).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drand48 {
    state: u64,
}

impl Drand48 {
    fn step(&mut self) -> u64 {
        self.state = MULTIPLIER.wrapping_mul(self.state).wrapping_add(INCREMENT) & MASK;
        self.state
    }
}

impl RngCore for Drand48 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.step() << 16
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Drand48 {
    /// Raw 48-bit state, little-endian.
    type Seed = [u8; 6];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut bytes = [0u8; 8];
        bytes[..6].copy_from_slice(&seed);
        Drand48 { state: u64::from_le_bytes(bytes) }
    }

    /// Mirrors `srand48`: only the low 32 bits of `seed` are used.
    fn seed_from_u64(seed: u64) -> Self {
        Drand48 { state: ((seed & 0xFFFF_FFFF) << 16) | SEED_LOW }
    }
}
