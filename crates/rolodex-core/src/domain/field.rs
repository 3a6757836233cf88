use serde::{Deserialize, Serialize};

/// On-disk wrapper for single-valued fields: `{"value": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueField {
    pub value: String,
}
