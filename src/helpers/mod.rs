
/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F)
    where
        F: Float + AbsDiffEq<Epsilon = F>,
    {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    /// This function draws a dataset that is linearly separable by
    /// construction. Samples are standard normal draws labeled in {0, 1} by
    /// the side of a fixed hyperplane through the origin; draws closer than
    /// `MARGIN` to the hyperplane are rejected. The margin bounds the number
    /// of updates a perceptron needs before converging on the dataset.
    pub fn generate_separable_data(
        n_samples: usize,
        n_features: usize,
    ) -> (Array2<f64>, Array1<f64>) {
        const MARGIN: f64 = 0.5;

        let mut rng = StdRng::seed_from_u64(42);
        let normal = Normal::new(0., 1.).unwrap();

        let true_w: Vec<f64> = (0..n_features).map(|_| normal.sample(&mut rng)).collect();

        let mut data_x: Vec<f64> = Vec::with_capacity(n_samples * n_features);
        let mut data_y: Vec<f64> = Vec::with_capacity(n_samples);
        while data_y.len() < n_samples {
            let x: Vec<f64> = (0..n_features).map(|_| normal.sample(&mut rng)).collect();
            let score: f64 = x.iter().zip(true_w.iter()).map(|(xi, wi)| xi * wi).sum();
            if score.abs() < MARGIN {
                continue;
            }
            data_x.extend_from_slice(&x);
            data_y.push(if score >= 0. { 1. } else { 0. });
        }

        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let y = Array1::from_shape_vec(n_samples, data_y).unwrap();
        (X, y)
    }
}
