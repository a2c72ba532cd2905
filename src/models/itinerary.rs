use serde::{Deserialize, Deserializer, Serialize};

/// Typed view of the itinerary the model returns.
///
/// Handlers forward the model's JSON untouched; this type only backs the
/// log summary and tests, so it is deliberately lenient.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    #[serde(deserialize_with = "deserialize_rounded_u32")]
    pub total_days: u32,
    pub itinerary: Vec<DayPlan>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_budget: Option<EstimatedBudget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_tips: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DayPlan {
    #[serde(deserialize_with = "deserialize_rounded_u32")]
    pub day: u32,
    pub title: String,
    pub activities: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Activity {
    pub time: String,
    pub activity: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EstimatedBudget {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
}

impl Itinerary {
    /// Reads the typed view out of a parsed model response, if it fits.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    pub fn activity_count(&self) -> usize {
        self.itinerary.iter().map(|day| day.activities.len()).sum()
    }
}

// JSON schema "number" lets the model send 4.0 where we expect 4
fn deserialize_rounded_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_u64() {
                Ok(i as u32)
            } else if let Some(f) = n.as_f64() {
                Ok(f.round().max(0.0) as u32)
            } else {
                Ok(0)
            }
        }
        _ => Err(serde::de::Error::custom("expected a number")),
    }
}
