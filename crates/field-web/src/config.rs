use field_core::FieldConfig;

/// Field configuration for a mount, with the grid spacing optionally taken
/// from the background canvas' `data-grid-spacing` attribute. Unusable values
/// are logged and the default spacing is kept.
pub fn field_config(grid_spacing_attr: Option<&str>) -> FieldConfig {
    let config = FieldConfig::default();
    let Some(raw) = grid_spacing_attr else {
        return config;
    };
    let spacing = match raw.trim().parse::<f32>() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("[config] ignoring grid spacing {raw:?}: {e}");
            return config;
        }
    };
    let candidate = config.clone().with_grid_spacing(spacing);
    match candidate.validate() {
        Ok(()) => candidate,
        Err(e) => {
            log::warn!("[config] ignoring grid spacing {raw:?}: {e}");
            config
        }
    }
}
