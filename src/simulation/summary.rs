/// Count, mean, and population variance of a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
}

impl FromIterator<f64> for Summary {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let xs = iter.into_iter().collect::<Vec<f64>>();
        if xs.is_empty() {
            return Self::default();
        }
        let count = xs.len();
        let mean = xs.iter().sum::<f64>() / count as f64;
        let variance = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count as f64;
        Self {
            count,
            mean,
            variance,
        }
    }
}
