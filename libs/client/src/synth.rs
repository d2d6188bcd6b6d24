use queue_api::{Reading, now_ms, utc_stamp_from_ms};

// ═══════════════════════════════════════════════════════════════
//  Synthetic readings
// ═══════════════════════════════════════════════════════════════

/// Temperature range of the simulated sensors, degrees Celsius.
const TEMP_MIN: f64 = 10.0;
const TEMP_MAX: f64 = 25.0;

/// Buoy ids are drawn from [BUOY_MIN, BUOY_MAX] inclusive.
const BUOY_MIN: u64 = 100;
const BUOY_MAX: u64 = 200;

/// Generate one reading, stamped with the current wall clock.
///
/// Draws are independent and identically distributed across calls;
/// all generator state lives in `rng`, so there is no I/O here beyond
/// reading the clock.
pub fn reading(rng: &mut Rng) -> Reading {
    let temperature = TEMP_MIN + rng.next_f64() * (TEMP_MAX - TEMP_MIN);
    let buoy = BUOY_MIN + rng.next_intn((BUOY_MAX - BUOY_MIN + 1) as usize) as u64;
    Reading {
        temperature,
        location: format!("Buoy{buoy}"),
        timestamp: utc_stamp_from_ms(now_ms()),
    }
}

// ═══════════════════════════════════════════════════════════════
//  RNG (xorshift64)
// ═══════════════════════════════════════════════════════════════

pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: i64) -> Self {
        let state = if seed == 0 {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64
                | 1 // ensure non-zero
        } else {
            seed as u64
        };
        Self { state }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns f64 in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / ((1u64 << 53) as f64)
    }

    pub fn next_intn(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}
