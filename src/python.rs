//! Python bindings.

use crate::config::{Rule, RuleConfig};
use crate::counters::RuleCounters;
use crate::dictionary::ReplacementDictionary;
use crate::pipeline::Pipeline;
use pyo3::prelude::*;
use std::collections::HashMap;
use std::path::Path;

fn build_pipeline(config_path: Option<&str>, dict_path: Option<&str>) -> Pipeline {
    let config = config_path
        .map(|p| RuleConfig::load_or_default(Path::new(p)))
        .unwrap_or_default();
    let dictionary = dict_path
        .map(|p| ReplacementDictionary::load_or_empty(Path::new(p)))
        .unwrap_or_default();
    Pipeline::new(config, dictionary)
}

fn counts_to_map(counters: &RuleCounters) -> HashMap<String, u64> {
    counters
        .nonzero()
        .map(|(counter, n)| (counter.label().to_string(), n))
        .collect()
}

/// Fix a text, one paragraph per line.
/// Returns: (fixed_text, {label: count}) for non-zero counters
#[pyfunction]
#[pyo3(signature = (text, config_path=None, dict_path=None))]
fn fix_text(
    text: String,
    config_path: Option<String>,
    dict_path: Option<String>,
) -> PyResult<(String, HashMap<String, u64>)> {
    let pipeline = build_pipeline(config_path.as_deref(), dict_path.as_deref());
    let (fixed, counters) = pipeline.apply_text(&text);
    Ok((fixed, counts_to_map(&counters)))
}

/// Fix a single file, reading and writing entirely in Rust
/// Returns: (was_modified, correction_count, bytes_read)
#[pyfunction]
#[pyo3(signature = (input_path, output_path, config_path=None, dict_path=None))]
fn fix_file_to_file(
    input_path: String,
    output_path: String,
    config_path: Option<String>,
    dict_path: Option<String>,
) -> PyResult<(bool, u64, u64)> {
    use std::fs;

    let content = fs::read_to_string(&input_path).map_err(|e| {
        pyo3::exceptions::PyIOError::new_err(format!("Failed to read {}: {}", input_path, e))
    })?;
    let bytes_read = content.len() as u64;

    let pipeline = build_pipeline(config_path.as_deref(), dict_path.as_deref());
    let (fixed, counters) = pipeline.apply_text(&content);
    let was_modified = fixed != content;

    let out_path = Path::new(&output_path);
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            pyo3::exceptions::PyIOError::new_err(format!("Failed to create directory: {}", e))
        })?;
    }
    fs::write(out_path, &fixed).map_err(|e| {
        pyo3::exceptions::PyIOError::new_err(format!("Failed to write {}: {}", output_path, e))
    })?;

    Ok((was_modified, counters.total(), bytes_read))
}

/// Default enabled state of every rule, keyed by configuration key.
#[pyfunction]
fn default_config() -> HashMap<String, bool> {
    let config = RuleConfig::default();
    Rule::ALL
        .iter()
        .map(|&r| (r.key().to_string(), config.is_enabled(r)))
        .collect()
}

#[pymodule]
fn rust_fa_clean(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fix_text, m)?)?;
    m.add_function(wrap_pyfunction!(fix_file_to_file, m)?)?;
    m.add_function(wrap_pyfunction!(default_config, m)?)?;
    Ok(())
}
