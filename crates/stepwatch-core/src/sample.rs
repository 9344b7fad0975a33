//! Raw accelerometer samples and magnitude computation.

/// One tick of signed raw accelerometer counts.
///
/// Ephemeral: a sample is owned by the tick that reads it and is reduced to a
/// scalar magnitude immediately. The three axes need not be sampled
/// atomically with respect to each other; per-axis skew within a tick is
/// acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawSample {
    pub x: i16,
    pub y: i16,
    pub z: i16,
}

impl RawSample {
    pub fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    /// Euclidean norm of the sample in g-units.
    ///
    /// Each axis is widened to `i64` before squaring: the worst-case sum
    /// `3 * 32768²` overflows `i32`, and an overflow here would put a
    /// negative value under the square root. `counts_per_g` is the
    /// accelerometer scale (LSB per g). Pure function, no error path.
    pub fn magnitude_g(&self, counts_per_g: f32) -> f32 {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        let z = i64::from(self.z);
        let sum_sq = x * x + y * y + z * z;
        (sum_sq as f32).sqrt() / counts_per_g
    }
}
