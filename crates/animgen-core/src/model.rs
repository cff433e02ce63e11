//! Parameter model shared by extraction and generation.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_value::Value as SerdeValue;

/// Type of a state machine parameter.
///
/// `Unsupported` keeps the raw kind as exported so diagnostics can name it.
/// It is a legal value: such parameters get a constant and a predicate
/// clause but no member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Bool,
    Float,
    Int,
    Trigger,
    Unsupported(String),
}

impl ParameterKind {
    /// Map the engine's numeric parameter type code.
    pub fn from_type_code(code: i64) -> Self {
        match code {
            1 => Self::Float,
            3 => Self::Int,
            4 => Self::Bool,
            9 => Self::Trigger,
            other => Self::Unsupported(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Int => "int",
            Self::Trigger => "trigger",
            Self::Unsupported(raw) => raw,
        }
    }
}

impl FromStr for ParameterKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Ok(Self::from_type_code(code));
        }
        Ok(match trimmed.to_lowercase().as_str() {
            "bool" | "boolean" => Self::Bool,
            "float" => Self::Float,
            "int" | "integer" => Self::Int,
            "trigger" => Self::Trigger,
            _ => Self::Unsupported(trimmed.to_string()),
        })
    }
}

impl fmt::Display for ParameterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ParameterKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts either a type name or the engine's numeric type code.
impl<'de> Deserialize<'de> for ParameterKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = SerdeValue::deserialize(deserializer)?;

        let code = match value {
            SerdeValue::String(s) => return Ok(s.parse().unwrap_or_else(|e| match e {})),
            SerdeValue::I8(n) => i64::from(n),
            SerdeValue::I16(n) => i64::from(n),
            SerdeValue::I32(n) => i64::from(n),
            SerdeValue::I64(n) => n,
            SerdeValue::U8(n) => i64::from(n),
            SerdeValue::U16(n) => i64::from(n),
            SerdeValue::U32(n) => i64::from(n),
            SerdeValue::U64(n) => i64::try_from(n)
                .map_err(|_| <D::Error as serde::de::Error>::custom("type code out of range"))?,
            _ => {
                return Err(serde::de::Error::custom(
                    "Expected parameter type name or numeric type code",
                ))
            }
        };
        Ok(Self::from_type_code(code))
    }
}

/// One control parameter of the source state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Name as authored in the controller
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub kind: ParameterKind,

    /// Engine-computed hash of `name`, passed through untouched
    #[serde(rename = "hash")]
    pub stable_hash: i32,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, kind: ParameterKind, stable_hash: i32) -> Self {
        Self {
            name: name.into(),
            kind,
            stable_hash,
        }
    }
}

/// Parameters of one controller asset, in controller order.
///
/// Order is the positional key of the generated compatibility check and is
/// never changed after extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerSnapshot {
    /// Name of the controller asset
    #[serde(rename = "name")]
    pub asset_name: String,

    /// Parameters in controller order
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl ControllerSnapshot {
    pub fn new(asset_name: impl Into<String>, parameters: Vec<ParameterDescriptor>) -> Self {
        Self {
            asset_name: asset_name.into(),
            parameters,
        }
    }
}
