use crate::config::enums::configuration_error::ConfigurationError;

impl std::fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigurationError::IOError(e) => e.fmt(f),
            ConfigurationError::ParseError(e) => e.fmt(f),
            ConfigurationError::SerializeError(e) => e.fmt(f),
            ConfigurationError::InvalidPattern(pattern, e) => write!(f, "invalid bypass cookie pattern \"{}\": {}", pattern, e),
            ConfigurationError::InvalidValue(message) => write!(f, "invalid value: {}", message),
        }
    }
}

impl std::error::Error for ConfigurationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigurationError::IOError(e) => Some(e),
            ConfigurationError::ParseError(e) => Some(e),
            ConfigurationError::SerializeError(e) => Some(e),
            ConfigurationError::InvalidPattern(_, e) => Some(e),
            ConfigurationError::InvalidValue(_) => None,
        }
    }
}
