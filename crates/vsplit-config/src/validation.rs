//! Configuration validation.
//!
//! Every check pushes onto one list; the caller gets all problems at once.

use vsplit_common::ConfigError;

use crate::schema::VsplitConfig;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &VsplitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(
        &mut errors,
        "editor.canvas_width",
        config.editor.canvas_width,
        100.0,
        4000.0,
    );
    if let Some(path) = &config.store.path {
        if path.as_os_str().is_empty() {
            errors.push("store.path must not be empty".into());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Push an error if `value` is outside `[min, max]`.
fn validate_range_f64(errors: &mut Vec<String>, name: &str, value: f64, min: f64, max: f64) {
    if !(min..=max).contains(&value) {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}
