//! GPU memory estimator
//!
//! Closed-form approximation of the memory a model needs:
//!
//! ```text
//! M = P * 4 * B / (32 / Q) * O
//! ```
//!
//! with `P` the parameter count in billions, `B` the base unit (1 byte), `Q`
//! the precision in bits and `O` the overhead factor. The figure is labelled
//! "GB" but no byte-to-gigabyte division is applied to it.

use crate::system::gpu::{recommend_gpu, GpuClass};
use serde::Serialize;
use thiserror::Error;

const BYTES_PER_FP32_PARAM: f64 = 4.0;
const BASE_UNIT_BYTES: f64 = 1.0;
const FULL_PRECISION_BITS: f64 = 32.0;

pub const DEFAULT_PARAMETERS_B: f64 = 7.0;
pub const DEFAULT_OVERHEAD: f64 = 1.2;

/// Numeric width used to store model weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Fp32,
    #[default]
    Fp16,
    Int8,
    Int4,
}

impl Precision {
    pub const ALL: [Precision; 4] = [
        Precision::Fp32,
        Precision::Fp16,
        Precision::Int8,
        Precision::Int4,
    ];

    pub fn bits(&self) -> f64 {
        match self {
            Precision::Fp32 => 32.0,
            Precision::Fp16 => 16.0,
            Precision::Int8 => 8.0,
            Precision::Int4 => 4.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Precision::Fp32 => "FP32",
            Precision::Fp16 => "FP16",
            Precision::Int8 => "INT8",
            Precision::Int4 => "INT4",
        }
    }

    /// Exact label lookup ("FP32", "FP16", "INT8", "INT4").
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.label() == label)
    }

    /// Label lookup that falls back to FP16 for anything unrecognized.
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_else(|| {
            tracing::debug!("Unrecognized precision '{}', using FP16", label);
            Precision::Fp16
        })
    }
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw required-memory figure. Total over every input; no validation.
pub fn estimate(parameters_b: f64, precision: Precision, overhead: f64) -> f64 {
    parameters_b * BYTES_PER_FP32_PARAM * BASE_UNIT_BYTES / (FULL_PRECISION_BITS / precision.bits())
        * overhead
}

/// [`estimate`] with a precision label, unknown labels meaning FP16.
pub fn estimate_for_label(parameters_b: f64, precision: &str, overhead: f64) -> f64 {
    estimate(parameters_b, Precision::from_label(precision), overhead)
}

/// Rejected calculator input.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Parameter count must be a positive number, got {0}")]
    InvalidParameters(f64),
    #[error("Overhead factor must be a positive number, got {0}")]
    InvalidOverhead(f64),
}

/// Validated calculator input held by the current session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculatorInput {
    parameters_b: f64,
    precision: Precision,
    overhead: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            parameters_b: DEFAULT_PARAMETERS_B,
            precision: Precision::Fp16,
            overhead: DEFAULT_OVERHEAD,
        }
    }
}

impl CalculatorInput {
    /// Build an input, rejecting non-finite or non-positive numbers.
    pub fn new(parameters_b: f64, precision: Precision, overhead: f64) -> Result<Self, InputError> {
        if !parameters_b.is_finite() || parameters_b <= 0.0 {
            return Err(InputError::InvalidParameters(parameters_b));
        }
        if !overhead.is_finite() || overhead <= 0.0 {
            return Err(InputError::InvalidOverhead(overhead));
        }
        Ok(Self {
            parameters_b,
            precision,
            overhead,
        })
    }

    pub fn parameters_b(&self) -> f64 {
        self.parameters_b
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn overhead(&self) -> f64 {
        self.overhead
    }

    pub fn estimate(&self) -> MemoryEstimate {
        MemoryEstimate::from_required(estimate(self.parameters_b, self.precision, self.overhead))
    }
}

/// Calculator output: the required figure and the matching GPU tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MemoryEstimate {
    pub required: f64,
    pub gpu: GpuClass,
}

impl MemoryEstimate {
    pub fn from_required(required: f64) -> Self {
        Self {
            required,
            gpu: recommend_gpu(required),
        }
    }

    /// Required memory rounded to a whole number, e.g. "17".
    pub fn display_value(&self) -> String {
        format!("{:.0}", self.required)
    }

    pub fn gpu_label(&self) -> &'static str {
        self.gpu.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fp16_reference_value() {
        let m = estimate(7.0, Precision::Fp16, 1.2);
        assert_eq!(m, 7.0 * 4.0 * 1.0 / (32.0 / 16.0) * 1.2);
        assert!((m - 16.8).abs() < 1e-9);
        assert_eq!(MemoryEstimate::from_required(m).display_value(), "17");
    }

    #[test]
    fn test_unknown_precision_falls_back_to_fp16() {
        assert_eq!(
            estimate_for_label(7.0, "BOGUS", 1.2),
            estimate_for_label(7.0, "FP16", 1.2)
        );
        assert_eq!(Precision::from_label(""), Precision::Fp16);
        assert_eq!(Precision::from_label("fp32"), Precision::Fp16);
    }

    #[test]
    fn test_precision_scaling() {
        assert!((estimate(70.0, Precision::Fp32, 1.0) - 280.0).abs() < 1e-9);
        assert!((estimate(70.0, Precision::Int8, 1.0) - 70.0).abs() < 1e-9);
        assert!((estimate(7.0, Precision::Int4, 1.2) - 4.2).abs() < 1e-9);
    }

    #[test]
    fn test_precision_labels_round_trip() {
        for p in Precision::ALL {
            assert_eq!(Precision::parse(p.label()), Some(p));
        }
        assert_eq!(Precision::Int8.bits(), 8.0);
    }

    #[test]
    fn test_calculator_input_validation() {
        assert!(CalculatorInput::new(7.0, Precision::Fp16, 1.1).is_ok());
        assert_eq!(
            CalculatorInput::new(-1.0, Precision::Fp16, 1.2),
            Err(InputError::InvalidParameters(-1.0))
        );
        assert_eq!(
            CalculatorInput::new(7.0, Precision::Fp16, 0.0),
            Err(InputError::InvalidOverhead(0.0))
        );
        assert!(CalculatorInput::new(f64::NAN, Precision::Fp16, 1.2).is_err());
        assert!(CalculatorInput::new(7.0, Precision::Fp16, f64::INFINITY).is_err());
    }

    #[test]
    fn test_estimate_recommends_gpu() {
        let input = CalculatorInput::default();
        let result = input.estimate();
        assert_eq!(result.display_value(), "17");
        assert_eq!(result.gpu, GpuClass::Single24Gb);

        let big = CalculatorInput::new(70.0, Precision::Fp32, 1.2).unwrap().estimate();
        assert_eq!(big.display_value(), "336");
        assert_eq!(big.gpu_label(), "multiple GPUs needed");
    }

    #[test]
    fn test_overhead_accepts_any_positive_value() {
        let input = CalculatorInput::new(10.0, Precision::Int8, 3.0).unwrap();
        assert!((input.estimate().required - 30.0).abs() < 1e-9);
    }
}
