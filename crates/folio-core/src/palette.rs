use crate::constants::PALETTE_PERIOD_SEC;
use crate::theme::ACCENTS;

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Per-channel linear interpolation, rounded to the nearest integer.
#[inline]
pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let ch = |i: usize| lerp(a[i] as f32, b[i] as f32, t).round().clamp(0.0, 255.0) as u8;
    [ch(0), ch(1), ch(2)]
}

/// Walks the accent palette pairwise, spending one period blending each
/// entry into the next.
#[derive(Clone, Debug)]
pub struct PaletteCycle {
    colors: Vec<[u8; 3]>,
    index: usize,
    phase: f32,
    period: f32,
}

impl Default for PaletteCycle {
    fn default() -> Self {
        Self::new(ACCENTS.iter().map(|a| a.rgb).collect(), PALETTE_PERIOD_SEC)
    }
}

impl PaletteCycle {
    pub fn new(colors: Vec<[u8; 3]>, period: f32) -> Self {
        Self {
            colors,
            index: 0,
            phase: 0.0,
            period: period.max(f32::EPSILON),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Advance by `dt` seconds. Once the phase passes the period it resets to
    /// zero and the pair index moves on.
    pub fn advance(&mut self, dt: f32) {
        if self.colors.is_empty() {
            return;
        }
        self.phase += dt;
        if self.phase > self.period {
            self.phase = 0.0;
            self.index = (self.index + 1) % self.colors.len();
        }
    }

    pub fn color(&self) -> [u8; 3] {
        match self.colors.len() {
            0 => [255, 255, 255],
            n => {
                let a = self.colors[self.index];
                let b = self.colors[(self.index + 1) % n];
                lerp_rgb(a, b, self.phase / self.period)
            }
        }
    }
}
