use tracing::{debug, info};

use super::{FormcheckConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_defaults_used(path: &std::path::Path) {
    debug!(
        target: "formcheck::config",
        path = %path.display(),
        env = CONFIG_ENV_KEY,
        default = DEFAULT_CONFIG_PATH,
        "No configuration file found; using built-in defaults"
    );
}

pub fn log_loaded(config: &FormcheckConfig) {
    info!(
        target: "formcheck::config",
        path = %config.source_display(),
        missing_fields = config.validator.missing_fields.as_str(),
        format = config.output.format.as_str(),
        "Configuration loaded successfully"
    );
}
