mod activation;
mod dense;
mod loader;
mod sequential;

pub use activation::ActFn;
pub use dense::Dense;
pub use loader::{load_sequential, tensor_names};
pub use sequential::Sequential;

use crate::features::FeatureVector;

/// A pre-trained binary classifier over the scaled feature vector.
pub trait Model {
    /// Runs inference on a scaled feature vector.
    ///
    /// # Returns
    /// The probability, in `[0, 1]`, of the positive class.
    fn infer(&self, x: &FeatureVector) -> f32;
}
