use serde::{Deserialize, Serialize};

/// Banner comment at the top of the scene file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeaderOptions {
    /// Generator name printed in the banner.
    pub generator: String,
    /// Generation date printed in the banner. Left unset, the output of two
    /// exports of the same scene is byte-identical.
    pub timestamp: Option<String>,
}

impl Default for HeaderOptions {
    fn default() -> Self {
        Self {
            generator: "molpov".to_owned(),
            timestamp: None,
        }
    }
}
