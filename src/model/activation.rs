use serde::Deserialize;

/// The element-wise activation applied after a dense layer's affine transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFn {
    Sigmoid,
    Relu,
    Tanh,
}
use ActFn::*;

impl ActFn {
    pub fn f(&self, z: f32) -> f32 {
        match self {
            Sigmoid => 1. / (1. + (-z).exp()),
            Relu => z.max(0.),
            Tanh => z.tanh(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_is_centered_at_one_half() {
        assert_eq!(Sigmoid.f(0.), 0.5);
        assert!(Sigmoid.f(10.) > 0.99);
        assert!(Sigmoid.f(-10.) < 0.01);
    }

    #[test]
    fn relu_clips_negatives() {
        assert_eq!(Relu.f(-3.), 0.);
        assert_eq!(Relu.f(2.5), 2.5);
    }

    #[test]
    fn parses_snake_case_names() {
        let act: ActFn = serde_json::from_str("\"relu\"").unwrap();
        assert_eq!(act, Relu);
    }
}
