//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available LLM models (Value Object)
///
/// This is a domain concept representing the models that can drive the
/// Planner and Executor roles. Any OpenAI-compatible identifier is accepted
/// through the `Custom` variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4,
    Gpt4Turbo,
    Gpt4o,
    Gpt4oMini,
    Gpt35Turbo,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4 => "gpt-4",
            Model::Gpt4Turbo => "gpt-4-turbo",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (GPT-4)
    fn default() -> Self {
        Model::Gpt4
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "gpt-4" => Model::Gpt4,
            "gpt-4-turbo" => Model::Gpt4Turbo,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-3.5-turbo" => Model::Gpt35Turbo,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}
