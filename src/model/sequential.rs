use ndarray::Array2;

use super::{ActFn, Dense, Model};
use crate::{
    error::{ArtifactErr, Result},
    features::{FeatureVector, FEATURE_COUNT},
};

/// A sequential network: information flows through its dense layers in order.
///
/// The architecture is checked once when building it, so a forward pass can't fail.
#[derive(Debug, Clone)]
pub struct Sequential {
    layers: Vec<Dense>,
}

impl Sequential {
    /// Creates a new `Sequential`.
    ///
    /// # Arguments
    /// * `layers` - The layers the sequential is composed of.
    ///
    /// # Returns
    /// A new `Sequential` instance or an error if the layers don't chain from the feature
    /// vector into a single sigmoid output.
    pub fn new<I>(layers: I) -> Result<Self>
    where
        I: IntoIterator<Item = Dense>,
    {
        let layers: Vec<Dense> = layers.into_iter().collect();

        let (Some(first), Some(last)) = (layers.first(), layers.last()) else {
            return Err(ArtifactErr::InvalidArchitecture(
                "model must have at least one layer".into(),
            ));
        };

        if first.dim().0 != FEATURE_COUNT {
            return Err(ArtifactErr::SizeMismatch {
                what: "model inputs".into(),
                got: first.dim().0,
                expected: FEATURE_COUNT,
            });
        }

        for (i, pair) in layers.windows(2).enumerate() {
            let (out, inp) = (pair[0].dim().1, pair[1].dim().0);
            if out != inp {
                return Err(ArtifactErr::InvalidArchitecture(format!(
                    "layer {i} has {out} outputs but layer {} takes {inp} inputs",
                    i + 1
                )));
            }
        }

        if last.dim().1 != 1 || last.act_fn() != Some(ActFn::Sigmoid) {
            return Err(ArtifactErr::InvalidArchitecture(
                "the last layer must have a single sigmoid output".into(),
            ));
        }

        Ok(Self { layers })
    }

    /// Returns the amount of parameters in the model.
    pub fn size(&self) -> usize {
        self.layers
            .iter()
            .map(|l| {
                let (n, m) = l.dim();
                (n + 1) * m
            })
            .sum()
    }

    pub fn layers(&self) -> &[Dense] {
        &self.layers
    }
}

impl Model for Sequential {
    fn infer(&self, x: &FeatureVector) -> f32 {
        let mut a = Array2::from_shape_fn((1, FEATURE_COUNT), |(_, j)| x[j]);

        for layer in &self.layers {
            a = layer.forward(a.view());
        }

        a[[0, 0]]
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{array, Array1, Array2};

    use super::*;

    fn output(weights: Array2<f32>, bias: f32) -> Dense {
        Dense::new(weights, array![bias], Some(ActFn::Sigmoid)).unwrap()
    }

    #[test]
    fn single_layer_logistic_regression() {
        let model = Sequential::new([output(Array2::zeros((4, 1)), 0.0)]).unwrap();
        assert_eq!(model.infer(&[60.0, 38.0, 1.1, 136.0]), 0.5);
    }

    #[test]
    fn hidden_layer_feeds_output() {
        let hidden = Dense::new(
            array![[1.0, 0.0], [0.0, 1.0], [0.0, 0.0], [0.0, 0.0]],
            array![0.0, 0.0],
            Some(ActFn::Relu),
        )
        .unwrap();
        let model = Sequential::new([hidden, output(array![[1.0], [-1.0]], 0.0)]).unwrap();

        // relu(2) - relu(-5) = 2
        let p = model.infer(&[2.0, -5.0, 9.0, 9.0]);
        assert!((p - ActFn::Sigmoid.f(2.0)).abs() < 1e-6);
        assert_eq!(model.size(), 4 * 2 + 2 + 2 + 1);
    }

    #[test]
    fn rejects_empty_model() {
        let err = Sequential::new(Vec::new()).unwrap_err();
        assert!(matches!(err, ArtifactErr::InvalidArchitecture(_)));
    }

    #[test]
    fn rejects_wrong_input_width() {
        let err = Sequential::new([output(Array2::zeros((3, 1)), 0.0)]).unwrap_err();
        assert!(matches!(
            err,
            ArtifactErr::SizeMismatch {
                got: 3,
                expected: 4,
                ..
            }
        ));
    }

    #[test]
    fn rejects_broken_chain() {
        let hidden = Dense::new(Array2::zeros((4, 3)), Array1::zeros(3), None).unwrap();
        let err = Sequential::new([hidden, output(Array2::zeros((2, 1)), 0.0)]).unwrap_err();
        assert!(matches!(err, ArtifactErr::InvalidArchitecture(_)));
    }

    #[test]
    fn rejects_non_probability_output() {
        let linear = Dense::new(Array2::zeros((4, 1)), Array1::zeros(1), None).unwrap();
        let err = Sequential::new([linear]).unwrap_err();
        assert!(matches!(err, ArtifactErr::InvalidArchitecture(_)));
    }
}
