use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BypassConfig {
    pub paths: Vec<String>,
    pub methods: Vec<String>,
    pub cookies: Vec<String>,
}
