use serde_json::{json, Value};

/// `responseSchema` sent with every itinerary request. Uses Gemini's
/// OpenAPI-style upper-case type names.
pub fn travel_itinerary_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "destination": { "type": "STRING" },
            "totalDays": { "type": "NUMBER" },
            "itinerary": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "day": { "type": "NUMBER" },
                        "title": { "type": "STRING" },
                        "activities": {
                            "type": "ARRAY",
                            "items": {
                                "type": "OBJECT",
                                "properties": {
                                    "time": { "type": "STRING" },
                                    "activity": { "type": "STRING" },
                                    "location": { "type": "STRING" },
                                    "description": { "type": "STRING" }
                                },
                                "required": ["time", "activity", "location"]
                            }
                        }
                    },
                    "required": ["day", "title", "activities"]
                }
            },
            "estimatedBudget": {
                "type": "OBJECT",
                "properties": {
                    "currency": { "type": "STRING" },
                    "amount": { "type": "NUMBER" }
                }
            },
            "travelTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["destination", "totalDays", "itinerary"]
    })
}
