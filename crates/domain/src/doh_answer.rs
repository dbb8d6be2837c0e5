use serde::{Deserialize, Serialize};

/// One entry of the `Answer` array of a DNS-over-HTTPS JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohAnswer {
    pub data: String,

    #[serde(rename = "TTL", default)]
    pub ttl: u32,
}

impl DohAnswer {
    pub fn new(data: impl Into<String>, ttl: u32) -> Self {
        Self {
            data: data.into(),
            ttl,
        }
    }
}

/// Subset of the JSON resolver response the lookup consumes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DohResponse {
    #[serde(rename = "Answer", default)]
    pub answer: Vec<DohAnswer>,
}
