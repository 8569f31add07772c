// ============================================================================
// Engine Factory
// Creates scientific engines from configuration
// ============================================================================

use crate::domain::EngineConfig;
use crate::engine::ScientificEngine;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a scientific engine from configuration
///
/// # Arguments
/// * `config` - Engine thresholds
///
/// # Returns
/// * `Result<ScientificEngine, String>` - Configured engine or the validation error
///
/// # Example
/// ```
/// use sci_number::prelude::*;
///
/// let config = EngineConfig::reference().with_negligible_exponent_gap(20);
/// let engine = create_from_config(config).unwrap();
/// assert_eq!(engine.config().negligible_exponent_gap, 20);
/// ```
pub fn create_from_config(config: EngineConfig) -> Result<ScientificEngine, String> {
    // Validate configuration first
    config.validate()?;

    let engine = ScientificEngine::new(config).map_err(|err| err.to_string())?;
    tracing::debug!("Created scientific engine with {:?}", config);

    Ok(engine)
}

/// Creates a scientific engine from a named preset
///
/// Known presets: `reference`, `wide-division`.
pub fn create_from_preset(name: &str) -> Result<ScientificEngine, String> {
    let config = match name {
        "reference" => EngineConfig::reference(),
        "wide-division" | "wide_division" => EngineConfig::wide_division(),
        other => return Err(format!("Unknown engine preset: {}", other)),
    };

    create_from_config(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_from_reference_config() {
        let engine = create_from_config(EngineConfig::reference());
        assert!(engine.is_ok());
        assert_eq!(engine.unwrap().config(), &EngineConfig::reference());
    }

    #[test]
    fn test_invalid_config_reports_reason() {
        let config = EngineConfig::new(30, 35);
        let err = create_from_config(config).unwrap_err();
        assert!(err.contains("Conversion ceiling"));
    }

    #[test]
    fn test_presets() {
        let wide = create_from_preset("wide-division").unwrap();
        assert_eq!(wide.config().division_upscale_digits, 42);

        assert!(create_from_preset("reference").is_ok());
        assert!(create_from_preset("unbounded").is_err());
    }
}
