use std::{
    fs,
    path::{Path, PathBuf},
};

use ndarray::{Array1, Array2};
use safetensors::{Dtype, SafeTensors};
use serde::Deserialize;

use super::{ActFn, Dense, Sequential};
use crate::error::{ArtifactErr, Result};

/// A dense layer as described in the model manifest.
#[derive(Debug, Clone, Deserialize)]
struct LayerManifest {
    n: usize,
    m: usize,
    #[serde(default)]
    act_fn: Option<ActFn>,
}

/// The model manifest: the architecture plus the safetensors file holding its weights.
#[derive(Debug, Clone, Deserialize)]
struct ModelManifest {
    weights: PathBuf,
    layers: Vec<LayerManifest>,
}

/// Returns the tensor names holding the weights and biases of the `i`-th layer.
pub fn tensor_names(i: usize) -> (String, String) {
    (format!("dense_{i}.weight"), format!("dense_{i}.bias"))
}

/// Loads a [`Sequential`] model from its JSON manifest.
///
/// The manifest's `weights` path is resolved relative to the manifest's directory.
///
/// # Arguments
/// * `path` - The manifest path.
///
/// # Returns
/// The ready to use model or an error describing what's wrong with the artifacts.
pub fn load_sequential<P: AsRef<Path>>(path: P) -> Result<Sequential> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ArtifactErr::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: ModelManifest =
        serde_json::from_str(&content).map_err(|source| ArtifactErr::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let weights_path = match path.parent() {
        Some(dir) => dir.join(&manifest.weights),
        None => manifest.weights.clone(),
    };

    let bytes = fs::read(&weights_path).map_err(|source| ArtifactErr::Io {
        path: weights_path.clone(),
        source,
    })?;

    let tensors = SafeTensors::deserialize(&bytes).map_err(|source| ArtifactErr::Tensors {
        path: weights_path.clone(),
        source,
    })?;

    let layers = manifest
        .layers
        .iter()
        .enumerate()
        .map(|(i, l)| build_layer(&tensors, &weights_path, i, l))
        .collect::<Result<Vec<_>>>()?;

    let model = Sequential::new(layers)?;
    log::debug!(
        "loaded model from {} ({} layers, {} params)",
        path.display(),
        model.layers().len(),
        model.size()
    );

    Ok(model)
}

fn build_layer(
    tensors: &SafeTensors<'_>,
    path: &Path,
    i: usize,
    layer: &LayerManifest,
) -> Result<Dense> {
    let (w_name, b_name) = tensor_names(i);

    let w = read_f32(tensors, path, &w_name, &[layer.n, layer.m])?;
    let b = read_f32(tensors, path, &b_name, &[layer.m])?;

    let weights = Array2::from_shape_vec((layer.n, layer.m), w)
        .map_err(|e| ArtifactErr::InvalidArchitecture(format!("{w_name}: {e}")))?;

    Dense::new(weights, Array1::from(b), layer.act_fn)
}

fn read_f32(tensors: &SafeTensors<'_>, path: &Path, name: &str, shape: &[usize]) -> Result<Vec<f32>> {
    let view = tensors.tensor(name).map_err(|source| ArtifactErr::Tensors {
        path: path.to_path_buf(),
        source,
    })?;

    if view.dtype() != Dtype::F32 {
        return Err(ArtifactErr::UnsupportedDtype {
            tensor: name.to_string(),
            dtype: format!("{:?}", view.dtype()),
        });
    }

    if view.shape() != shape {
        return Err(ArtifactErr::InvalidArchitecture(format!(
            "tensor '{name}' has shape {:?}, expected {shape:?}",
            view.shape()
        )));
    }

    Ok(view
        .data()
        .chunks_exact(4)
        .map(bytemuck::pod_read_unaligned::<f32>)
        .collect())
}
