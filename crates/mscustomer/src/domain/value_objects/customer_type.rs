//! CustomerType - Individual or company

use serde::{Deserialize, Serialize};

/// Customer type classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum CustomerType {
    /// Individual person; never carries authorized signers
    Persona,
    /// Company; may hold any number of authorized signers
    Empresa,
}

impl CustomerType {
    pub fn allows_signers(self) -> bool {
        matches!(self, CustomerType::Empresa)
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CustomerType::Persona => write!(f, "PERSONA"),
            CustomerType::Empresa => write!(f, "EMPRESA"),
        }
    }
}

impl std::str::FromStr for CustomerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PERSONA" => Ok(CustomerType::Persona),
            "EMPRESA" => Ok(CustomerType::Empresa),
            _ => Err(format!("Unknown customer type: {}", s)),
        }
    }
}
