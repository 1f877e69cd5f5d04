//! Shared bucket layout for one metric's histogram.

/// Candidate mantissas for a nice bucket width, scaled by powers of ten.
const NICE_STEPS: [f64; 3] = [1.0, 2.0, 5.0];

pub(crate) const MAX_BUCKETS: usize = 16;

/// Bucket layout shared by every series of one metric: anchored at zero,
/// fixed width, covering the largest sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketGrid {
    width: f64,
    count: usize,
}

impl BucketGrid {
    /// Choose the smallest nice width (1, 2, or 5 times a power of ten)
    /// that covers `max_value` in at most [`MAX_BUCKETS`] buckets.
    #[must_use]
    pub(crate) fn covering(max_value: f64) -> Self {
        if !max_value.is_finite() || max_value <= 0.0 {
            return Self {
                width: 1.0,
                count: 1,
            };
        }
        let mut scale = 1.0_f64;
        loop {
            for step in NICE_STEPS {
                let width = step * scale;
                let count = ((max_value / width).floor() as usize).saturating_add(1);
                if count <= MAX_BUCKETS {
                    return Self { width, count };
                }
            }
            scale *= 10.0;
        }
    }

    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Lower edge of bucket `index`.
    #[must_use]
    pub fn lower_edge(&self, index: usize) -> f64 {
        self.width * index as f64
    }

    /// Upper edge of the last bucket; the natural tight X range end.
    #[must_use]
    pub fn upper_edge(&self) -> f64 {
        self.width * self.count as f64
    }

    /// Frequency counts for one series over this grid.
    #[must_use]
    pub(crate) fn counts(&self, samples: &[f64]) -> Vec<u64> {
        let mut counts = vec![0_u64; self.count];
        let last = self.count.saturating_sub(1);
        for sample in samples {
            let index = ((sample / self.width).floor() as usize).min(last);
            if let Some(slot) = counts.get_mut(index) {
                *slot = slot.saturating_add(1);
            }
        }
        counts
    }
}
