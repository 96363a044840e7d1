#[cfg(feature = "onnx")]
mod onnx;

#[cfg(feature = "onnx")]
pub use onnx::{OnnxBackend, OnnxSession, ndarray_to_tensor, tensor_to_ndarray};
