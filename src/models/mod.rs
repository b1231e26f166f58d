pub mod requests;
pub mod responses;

use crate::codec::ModelError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    Draft,
    #[default]
    Published,
}

impl NodeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeMode::Draft => "draft",
            NodeMode::Published => "published",
        }
    }
}

impl FromStr for NodeMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(NodeMode::Draft),
            "published" => Ok(NodeMode::Published),
            _ => Err(ModelError::UnknownNodeMode(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Source,
    Transform,
    Metric,
    Dimension,
    Cube,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Source => "source",
            NodeType::Transform => "transform",
            NodeType::Metric => "metric",
            NodeType::Dimension => "dimension",
            NodeType::Cube => "cube",
        }
    }
}

impl FromStr for NodeType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "source" => Ok(NodeType::Source),
            "transform" => Ok(NodeType::Transform),
            "metric" => Ok(NodeType::Metric),
            "dimension" => Ok(NodeType::Dimension),
            "cube" => Ok(NodeType::Cube),
            _ => Err(ModelError::UnknownNodeType(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    Valid,
    Invalid,
}

impl NodeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeStatus::Valid => "valid",
            NodeStatus::Invalid => "invalid",
        }
    }
}

impl FromStr for NodeStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(NodeStatus::Valid),
            "invalid" => Ok(NodeStatus::Invalid),
            _ => Err(ModelError::UnknownNodeStatus(s.to_string())),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MetricDirection {
    HigherIsBetter,
    LowerIsBetter,
    Neutral,
}

impl MetricDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricDirection::HigherIsBetter => "higher_is_better",
            MetricDirection::LowerIsBetter => "lower_is_better",
            MetricDirection::Neutral => "neutral",
        }
    }
}

impl FromStr for MetricDirection {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "higher_is_better" => Ok(MetricDirection::HigherIsBetter),
            "lower_is_better" => Ok(MetricDirection::LowerIsBetter),
            "neutral" => Ok(MetricDirection::Neutral),
            _ => Err(ModelError::UnknownMetricDirection(s.to_string())),
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(NodeMode, NodeType, NodeStatus, MetricDirection);

/// Treats an explicit JSON `null` the same as a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
