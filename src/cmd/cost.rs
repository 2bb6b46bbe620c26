//! Cost command implementation
//!
//! Handles the `qdoc cost` command which estimates what a job would cost on a
//! backend, using the rate from `.qdoc.toml` when present

use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::config::ConfigLoader;
use crate::cost::{CostEstimate, CostModel};
use crate::error::QdocError;
use crate::fmt::MONEY;

/// Estimate and print the cost of a job
///
/// # Examples
///
/// ```no_run
/// use qdoc_kit::cmd::cost::cmd_cost;
///
/// cmd_cost(1000, 5, "ibm_hardware", false)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn cmd_cost(shots: i64, qubits: i64, backend: &str, json: bool) -> Result<()> {
    let config = ConfigLoader::load(Path::new("."))?;
    let model = config.cost.to_model();
    let estimate = estimate_with(&model, shots, qubits, backend)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&estimate).context("Failed to serialize estimate")?
        );
    } else {
        print_estimate(&estimate, model.is_free(backend));
    }
    Ok(())
}

fn estimate_with(model: &CostModel, shots: i64, qubits: i64, backend: &str) -> Result<CostEstimate> {
    Ok(model
        .estimate(shots, qubits, backend)
        .map_err(QdocError::from)?)
}

fn print_estimate(estimate: &CostEstimate, free: bool) {
    println!(
        "{} Estimated cost on {}: {}",
        MONEY,
        style(&estimate.backend).cyan(),
        style(&estimate.cost).green().bold()
    );
    println!(
        "   {} {} shots x {} qubits ~ {:.3}s",
        style("→").dim(),
        estimate.shots,
        estimate.qubits,
        estimate.duration_secs
    );
    if free {
        println!("   {} {} backend is not billed", style("→").dim(), estimate.backend);
    } else {
        println!(
            "   {} billed at {:.2}/min",
            style("→").dim(),
            estimate.rate_per_second * 60.0
        );
    }
}
