//! Small numeric helpers shared by the generator and the analytics engine.
//!
//! Undefined statistics (empty input, zero variance) come back as `None`
//! rather than NaN so callers can match on them and serializers emit null.

/// Round half-to-even at the given number of decimals, on the scaled value.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

pub fn round_opt(value: Option<f64>, decimals: i32) -> Option<f64> {
    value.map(|v| round_to(v, decimals))
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0f64, 0usize), |(s, c), v| (s + v, c + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Pearson correlation of two equal-length samples.
/// None when fewer than two pairs, lengths differ, or either side is constant.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let mean_x = mean(xs.iter().copied())?;
    let mean_y = mean(ys.iter().copied())?;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    Some(r.clamp(-1.0, 1.0))
}
