use ndarray::{linalg, prelude::*};

use super::ActFn;
use crate::error::{ArtifactErr, Result};

/// A fully connected layer computing `act(x·W + b)`.
#[derive(Debug, Clone)]
pub struct Dense {
    dim: (usize, usize),
    weights: Array2<f32>,
    biases: Array1<f32>,
    act_fn: Option<ActFn>,
}

impl Dense {
    /// Creates a new `Dense` layer.
    ///
    /// # Arguments
    /// * `weights` - The `(n, m)` weight matrix, `n` inputs by `m` outputs.
    /// * `biases` - The `m` biases.
    /// * `act_fn` - The activation, `None` for a linear layer.
    ///
    /// # Returns
    /// A new `Dense` instance or an error if the biases don't match the weights.
    pub fn new(weights: Array2<f32>, biases: Array1<f32>, act_fn: Option<ActFn>) -> Result<Self> {
        let dim = weights.dim();
        if biases.len() != dim.1 {
            return Err(ArtifactErr::SizeMismatch {
                what: "dense biases".into(),
                got: biases.len(),
                expected: dim.1,
            });
        }

        Ok(Self {
            dim,
            weights,
            biases,
            act_fn,
        })
    }

    /// Returns the `(inputs, outputs)` dimension of this layer.
    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn act_fn(&self) -> Option<ActFn> {
        self.act_fn
    }

    /// Makes a forward pass through the layer.
    ///
    /// # Arguments
    /// * `x` - A `(rows, n)` batch of inputs.
    ///
    /// # Returns
    /// The `(rows, m)` activations.
    pub fn forward(&self, x: ArrayView2<f32>) -> Array2<f32> {
        let mut z = Array2::zeros((x.nrows(), self.dim.1));
        linalg::general_mat_mul(1.0, &x, &self.weights, 0.0, &mut z);
        z += &self.biases;

        if let Some(act_fn) = self.act_fn {
            z.mapv_inplace(|z| act_fn.f(z));
        }

        z
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn linear_forward_is_affine() {
        let w = array![[1.0, 2.0], [3.0, 4.0]];
        let b = array![0.5, -0.5];
        let layer = Dense::new(w, b, None).unwrap();

        let y = layer.forward(array![[1.0, 1.0]].view());
        assert_eq!(y, array![[4.5, 5.5]]);
    }

    #[test]
    fn activation_is_applied_element_wise() {
        let w = array![[1.0, -1.0]];
        let b = array![0.0, 0.0];
        let layer = Dense::new(w, b, Some(ActFn::Relu)).unwrap();

        let y = layer.forward(array![[2.0], [-3.0]].view());
        assert_eq!(y, array![[2.0, 0.0], [0.0, 3.0]]);
    }

    #[test]
    fn rejects_mismatched_biases() {
        let err = Dense::new(Array2::zeros((4, 3)), Array1::zeros(2), None).unwrap_err();
        assert!(matches!(
            err,
            ArtifactErr::SizeMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }
}
