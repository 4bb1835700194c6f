use actix_web::HttpRequest;
use log::debug;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::bypass_config::BypassConfig;
use crate::deciders::enums::decider::Decider;

impl Decider {
    /// Builds the pipeline in evaluation order. Empty rule sets produce no
    /// decider; an invalid cookie pattern is a configuration error.
    pub fn from_config(config: &BypassConfig) -> Result<Vec<Decider>, ConfigurationError> {
        let mut deciders = Vec::new();

        let paths = Self::normalize(&config.paths);
        if !paths.is_empty() {
            deciders.push(Decider::Path(paths));
        }

        let methods = Self::normalize(&config.methods);
        if !methods.is_empty() {
            deciders.push(Decider::Method(methods));
        }

        let mut cookies = Vec::with_capacity(config.cookies.len());
        for pattern in &config.cookies {
            let regex = Regex::new(pattern)
                .map_err(|e| ConfigurationError::InvalidPattern(pattern.clone(), e))?;
            cookies.push(regex);
        }
        if !cookies.is_empty() {
            deciders.push(Decider::Cookie(cookies));
        }

        Ok(deciders)
    }

    fn normalize(tokens: &[String]) -> Vec<String> {
        tokens.iter()
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Decider::Path(_) => "path",
            Decider::Method(_) => "method",
            Decider::Cookie(_) => "cookie",
        }
    }

    /// True when the request must bypass the cache.
    pub fn decide(&self, request: &HttpRequest) -> bool {
        match self {
            Decider::Path(paths) => {
                let segment = Self::first_segment(request.path()).to_lowercase();
                paths.iter().any(|path| *path == segment)
            }
            Decider::Method(methods) => {
                let method = request.method().as_str().to_lowercase();
                methods.iter().any(|m| *m == method)
            }
            Decider::Cookie(patterns) => {
                match request.cookies() {
                    Ok(cookies) => cookies.iter().any(|cookie| {
                        patterns.iter().any(|pattern| pattern.is_match(cookie.name()))
                    }),
                    Err(e) => {
                        debug!("[Decider] Unparseable cookie header, not bypassing: {}", e);
                        false
                    }
                }
            }
        }
    }

    /// The segment between the leading slash and the next one.
    pub fn first_segment(path: &str) -> &str {
        let path = path.strip_prefix('/').unwrap_or(path);
        path.split('/').next().unwrap_or_default()
    }

    /// First decider that fires, if any.
    pub fn should_bypass<'a>(deciders: &'a [Decider], request: &HttpRequest) -> Option<&'a Decider> {
        deciders.iter().find(|decider| decider.decide(request))
    }
}
