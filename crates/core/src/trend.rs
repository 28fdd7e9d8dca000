/// Ordinary least-squares line fitted over a series of values.
///
/// The x axis is the implicit sample index `0..n`, matching the order the
/// readings were buffered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    /// Fit a line over `values` at x positions `0..n`.
    ///
    /// Returns `None` for fewer than two points — callers draw no line.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }

        let n_f = n as f64;
        let mean_x = (n_f - 1.0) / 2.0;
        let mean_y = values.iter().sum::<f64>() / n_f;

        let mut covariance = 0.0;
        let mut variance = 0.0;
        for (i, y) in values.iter().enumerate() {
            let dx = i as f64 - mean_x;
            covariance += dx * (y - mean_y);
            variance += dx * dx;
        }

        // With distinct integer x positions and n >= 2, variance is never 0.
        let slope = covariance / variance;
        Some(Self {
            slope,
            intercept: mean_y - slope * mean_x,
        })
    }

    /// Fitted value at position `x`.
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn too_few_points_yield_no_line() {
        assert!(TrendLine::fit(&[]).is_none());
        assert!(TrendLine::fit(&[-17.0]).is_none());
    }

    #[test]
    fn recovers_a_perfect_line() {
        // y = 2x + 1 over x = 0..5
        let values = [1.0, 3.0, 5.0, 7.0, 9.0];
        let line = TrendLine::fit(&values).unwrap();

        assert!(close(line.slope, 2.0));
        assert!(close(line.intercept, 1.0));
        assert!(close(line.value_at(3.0), 7.0));
    }

    #[test]
    fn flat_series_has_zero_slope() {
        let line = TrendLine::fit(&[-17.0, -17.0, -17.0]).unwrap();

        assert!(close(line.slope, 0.0));
        assert!(close(line.intercept, -17.0));
    }
}
