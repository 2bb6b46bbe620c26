//! Job cost estimation
//!
//! A rough cost heuristic for running a circuit: every shot on every qubit
//! is assumed to take a millisecond, and hardware backends bill per minute.
//! Free backends (the simulator by default) always cost nothing.

use serde::Serialize;
use thiserror::Error;

use crate::fmt::to_fixed;

/// Default hardware rate in currency units per minute
pub const DEFAULT_RATE_PER_MINUTE: f64 = 1.60;

/// Backend identifier that is never billed by default
pub const SIMULATOR_BACKEND: &str = "simulator";

/// Heuristic duration of one shot on one qubit, in seconds
const SECONDS_PER_SHOT_QUBIT: f64 = 0.001;

/// Errors raised for unusable estimator inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// A count argument was negative
    #[error("invalid {name}: {value} (must be zero or greater)")]
    InvalidArgument {
        /// Argument name (`shots` or `qubits`)
        name: &'static str,
        /// Rejected value
        value: i64,
    },
}

/// Billing parameters for cost estimates
#[derive(Debug, Clone, PartialEq)]
pub struct CostModel {
    /// Hardware rate in currency units per minute
    pub rate_per_minute: f64,
    /// Backends billed at zero
    pub free_backends: Vec<String>,
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            rate_per_minute: DEFAULT_RATE_PER_MINUTE,
            free_backends: vec![SIMULATOR_BACKEND.to_string()],
        }
    }
}

/// A computed estimate with its intermediate values
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostEstimate {
    /// Number of shots
    pub shots: i64,
    /// Number of qubits
    pub qubits: i64,
    /// Backend identifier
    pub backend: String,
    /// Estimated run time in seconds
    pub duration_secs: f64,
    /// Rate applied, per second
    pub rate_per_second: f64,
    /// Cost with exactly two decimals
    pub cost: String,
}

impl CostModel {
    /// Whether `backend` is billed at zero
    pub fn is_free(&self, backend: &str) -> bool {
        self.free_backends.iter().any(|b| b == backend)
    }

    /// Per-second rate for `backend`
    pub fn rate_per_second(&self, backend: &str) -> f64 {
        if self.is_free(backend) {
            0.0
        } else {
            self.rate_per_minute / 60.0
        }
    }

    /// Estimate the cost of running `shots` shots on `qubits` qubits.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::InvalidArgument`] if `shots` or `qubits` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use qdoc_kit::cost::CostModel;
    ///
    /// let estimate = CostModel::default().estimate(1000, 5, "ibm_hardware")?;
    /// assert_eq!(estimate.duration_secs, 5.0);
    /// assert_eq!(estimate.cost, "0.13");
    /// # Ok::<(), qdoc_kit::cost::CostError>(())
    /// ```
    pub fn estimate(
        &self,
        shots: i64,
        qubits: i64,
        backend: &str,
    ) -> Result<CostEstimate, CostError> {
        if shots < 0 {
            return Err(CostError::InvalidArgument {
                name: "shots",
                value: shots,
            });
        }
        if qubits < 0 {
            return Err(CostError::InvalidArgument {
                name: "qubits",
                value: qubits,
            });
        }

        let duration_secs = shots as f64 * qubits as f64 * SECONDS_PER_SHOT_QUBIT;
        let rate_per_second = self.rate_per_second(backend);
        let cost = to_fixed(duration_secs * rate_per_second, 2);
        log::debug!(
            "cost estimate: {} shots x {} qubits on {} -> {}",
            shots,
            qubits,
            backend,
            cost
        );

        Ok(CostEstimate {
            shots,
            qubits,
            backend: backend.to_string(),
            duration_secs,
            rate_per_second,
            cost,
        })
    }
}

/// Estimate a job's cost with the default billing model.
///
/// # Examples
///
/// ```
/// use qdoc_kit::cost::estimate_cost;
///
/// assert_eq!(estimate_cost(1000, 5, "simulator").unwrap(), "0.00");
/// assert_eq!(estimate_cost(1000, 5, "ibm_hardware").unwrap(), "0.13");
/// assert!(estimate_cost(-1, 5, "ibm_hardware").is_err());
/// ```
pub fn estimate_cost(shots: i64, qubits: i64, backend: &str) -> Result<String, CostError> {
    CostModel::default()
        .estimate(shots, qubits, backend)
        .map(|estimate| estimate.cost)
}
