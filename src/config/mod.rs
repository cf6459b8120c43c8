mod settings;

pub use settings::{ApiConfig, BatchConfig, Credentials, LoggingConfig, Settings, TOKEN_ENV_VAR};
