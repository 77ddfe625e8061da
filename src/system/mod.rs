//! Hardware sizing
//!
//! The GPU memory estimator and the GPU tier table it reports against.

pub mod gpu;
pub mod memory;

pub use gpu::{recommend_gpu, GpuClass};
pub use memory::{
    estimate, estimate_for_label, CalculatorInput, InputError, MemoryEstimate, Precision,
};
