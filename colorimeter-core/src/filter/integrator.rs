//! Moving-average integrator
//!
//! Fixed-capacity circular buffer. The reported value is always the mean
//! over all `N` slots, including slots that have never been written (which
//! hold zero). Until `N` samples have been pushed the average is therefore
//! biased low; this matches the behavior the device has always shown.

/// Circular moving-average buffer of `N` samples
#[derive(Debug, Clone)]
pub struct Integrator<const N: usize> {
    window: [f32; N],
    cursor: usize,
    pushed: usize,
}

impl<const N: usize> Default for Integrator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Integrator<N> {
    /// Create a zero-filled integrator
    pub const fn new() -> Self {
        assert!(N > 0, "integrator capacity must be non-zero");
        Self {
            window: [0.0; N],
            cursor: 0,
            pushed: 0,
        }
    }

    /// Overwrite the slot under the cursor and advance it
    pub fn push(&mut self, value: f32) {
        self.window[self.cursor] = value;
        self.cursor = (self.cursor + 1) % N;
        self.pushed = self.pushed.saturating_add(1);
    }

    /// Mean over the whole window
    pub fn value(&self) -> f32 {
        self.window.iter().sum::<f32>() / N as f32
    }

    /// Whether every slot has been written at least once
    pub fn is_full(&self) -> bool {
        self.pushed >= N
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_full_window() {
        let mut integrator = Integrator::<3>::new();
        integrator.push(10.0);
        integrator.push(20.0);
        integrator.push(30.0);
        assert_eq!(integrator.value(), 20.0);
        assert!(integrator.is_full());
    }

    #[test]
    fn test_fourth_push_overwrites_oldest() {
        let mut integrator = Integrator::<3>::new();
        for v in [10.0, 20.0, 30.0, 40.0] {
            integrator.push(v);
        }
        assert_eq!(integrator.value(), 30.0);
    }

    #[test]
    fn test_partial_window_biased_low() {
        let mut integrator = Integrator::<4>::new();
        integrator.push(8.0);
        assert_eq!(integrator.value(), 2.0);
        assert!(!integrator.is_full());
    }
}
