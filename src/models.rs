// src/models.rs
use serde::{Serialize, Deserialize};

// Qualitative strength band derived from the numeric score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assessment {
    #[serde(rename = "Very Weak")]
    VeryWeak,
    Weak,
    Medium,
    Strong,
    Excellent,
}

impl Assessment {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Assessment::Excellent
        } else if score >= 60 {
            Assessment::Strong
        } else if score >= 40 {
            Assessment::Medium
        } else if score >= 20 {
            Assessment::Weak
        } else {
            Assessment::VeryWeak
        }
    }
}

impl std::fmt::Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Assessment::VeryWeak => write!(f, "Very Weak"),
            Assessment::Weak => write!(f, "Weak"),
            Assessment::Medium => write!(f, "Medium"),
            Assessment::Strong => write!(f, "Strong"),
            Assessment::Excellent => write!(f, "Excellent"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub score: u8,
    pub assessment: Assessment,
    pub feedback: Vec<String>,
}
