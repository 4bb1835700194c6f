use serde::{Deserialize, Serialize};

/// Terminal outcome counted for a request.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Hit,
    Miss,
    Bypass,
}
