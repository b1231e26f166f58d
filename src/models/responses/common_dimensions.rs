use crate::models::null_as_default;
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dimensions shared by every metric in a request.
///
/// The service answers the common-dimensions endpoint with a bare JSON array;
/// both that and the `{"dimensions": [...]}` object form decode here. Encoding
/// always produces the object form.
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct CommonDimensionsResponse {
    pub dimensions: Option<Vec<Dimension>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Dimension {
    pub name: Option<String>,
    pub node_name: Option<String>,
    pub node_display_name: Option<String>,
    pub properties: Option<Vec<String>>,
    #[serde(rename = "type")]
    pub dimension_type: Option<String>,
    pub path: Option<Vec<String>>,
    #[serde(deserialize_with = "null_as_default")]
    pub filter_only: bool,
}

impl<'de> Deserialize<'de> for CommonDimensionsResponse {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize, Default)]
        #[serde(default)]
        struct CommonDimensionsHelper {
            dimensions: Option<Vec<Dimension>>,
        }

        struct CommonDimensionsVisitor;

        impl<'de> Visitor<'de> for CommonDimensionsVisitor {
            type Value = CommonDimensionsResponse;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a list of dimensions or an object with a `dimensions` key")
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let dimensions = Vec::<Dimension>::deserialize(SeqAccessDeserializer::new(seq))?;
                Ok(CommonDimensionsResponse {
                    dimensions: Some(dimensions),
                })
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let helper = CommonDimensionsHelper::deserialize(MapAccessDeserializer::new(map))?;
                Ok(CommonDimensionsResponse {
                    dimensions: helper.dimensions,
                })
            }
        }

        deserializer.deserialize_any(CommonDimensionsVisitor)
    }
}
