//! Bounded golden-section search for the minimum of a unimodal function.

/// (√5 − 1) / 2
pub const PHI: f64 = 0.618_033_988_749_894_9;

/// Each step keeps a fraction `PHI` of the window, so this is far more than
/// any finite tolerance needs. It only bounds the loop for a zero tolerance.
const MAX_ITERATIONS: usize = 256;

/// Best probe found by [`golden_section_min`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimum {
    pub argument: f64,
    pub value: f64,
}

/// Minimize `f` over `[lower, upper]`.
///
/// Two interior probes split the window in golden ratio; the side beyond the
/// larger probe is discarded and one probe is reused, so each step costs a
/// single evaluation. Stops once the window is no wider than `tolerance` and
/// returns the better of the two final probes. The result is approximate:
/// the true minimum lies somewhere in the final window.
pub fn golden_section_min<F>(mut lower: f64, mut upper: f64, tolerance: f64, mut f: F) -> Minimum
where
    F: FnMut(f64) -> f64,
{
    let mut x1 = PHI * lower + (1.0 - PHI) * upper;
    let mut f1 = f(x1);
    let mut x2 = (1.0 - PHI) * lower + PHI * upper;
    let mut f2 = f(x2);

    let mut iterations = 0;
    while (upper - lower).abs() > tolerance && iterations < MAX_ITERATIONS {
        if f1 < f2 {
            upper = x2;
            x2 = x1;
            f2 = f1;
            x1 = PHI * lower + (1.0 - PHI) * upper;
            f1 = f(x1);
        } else {
            lower = x1;
            x1 = x2;
            f1 = f2;
            x2 = (1.0 - PHI) * lower + PHI * upper;
            f2 = f(x2);
        }
        iterations += 1;
    }

    if f1 <= f2 {
        Minimum { argument: x1, value: f1 }
    } else {
        Minimum { argument: x2, value: f2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phi_is_the_golden_ratio_conjugate() {
        assert!((PHI - 0.5 * (5.0f64.sqrt() - 1.0)).abs() < 1e-15);
    }

    #[test]
    fn finds_parabola_minimum() {
        let min = golden_section_min(-10.0, 10.0, 1e-6, |x| (x - 3.0) * (x - 3.0) + 1.0);
        assert!((min.argument - 3.0).abs() < 1e-5);
        assert!((min.value - 1.0).abs() < 1e-9);
    }

    #[test]
    fn minimum_at_window_edge() {
        let min = golden_section_min(0.0, 1.0, 1e-4, |x| x);
        assert!(min.argument < 1e-3);
    }

    #[test]
    fn coarse_tolerance_uses_few_evaluations() {
        let mut calls = 0;
        let range = 45f64.to_radians();
        let _ = golden_section_min(-range, range, 2f64.to_radians(), |x| {
            calls += 1;
            x.abs()
        });
        // Window shrinks from 90 degrees to 2 in 8 steps, plus the two initial probes
        assert_eq!(calls, 10);
    }

    #[test]
    fn zero_tolerance_terminates() {
        let min = golden_section_min(-1.0, 1.0, 0.0, |x| x * x);
        assert!(min.value < 1e-12);
    }
}
