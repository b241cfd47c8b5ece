use std::collections::HashMap;

use itertools::Itertools;
use serde::de::{self, Deserializer};
use serde_derive::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::utils::{EntityName, IntentName, SlotName};

/// NLU dataset in the Snips JSON format
///
/// Only the fields the audio join relies on are typed, every other key is
/// carried along untouched so that a cleaned dataset serializes back to the
/// same document minus the dropped utterances.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NluDataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub intents: HashMap<IntentName, IntentData>,
    #[serde(default)]
    pub entities: HashMap<EntityName, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentData {
    pub utterances: Vec<Utterance>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub data: Vec<Chunk>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    pub text: String,
    /// `Some(None)` stands for an `"entity": null` key, which still marks a slot
    #[serde(
        default,
        deserialize_with = "deserialize_present_key",
        skip_serializing_if = "Option::is_none"
    )]
    pub entity: Option<Option<EntityName>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_name: Option<SlotName>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Expected parsing output of a single utterance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtteranceLabels {
    pub text: String,
    pub intent: IntentName,
    pub slots: Vec<Chunk>,
}

impl NluDataset {
    pub fn utterances_count(&self) -> usize {
        self.intents.values().map(|intent| intent.utterances.len()).sum()
    }

    /// Intent names in a stable order
    pub fn intent_names(&self) -> Vec<&str> {
        self.intents.keys().map(|name| &**name).sorted().collect()
    }
}

impl Utterance {
    /// Full sentence, made of the chunk texts joined without separator
    pub fn text(&self) -> String {
        self.data.iter().map(|chunk| &*chunk.text).join("")
    }

    pub fn slots(&self) -> Vec<Chunk> {
        self.data
            .iter()
            .filter(|chunk| chunk.is_slot())
            .cloned()
            .collect()
    }
}

impl Chunk {
    pub fn is_slot(&self) -> bool {
        self.entity.is_some()
    }

    pub fn entity(&self) -> Option<&str> {
        self.entity.as_ref().and_then(|entity| entity.as_ref().map(|e| &**e))
    }
}

fn deserialize_present_key<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: de::Deserialize<'de>,
{
    let value: Option<T> = de::Deserialize::deserialize(deserializer)?;
    Ok(Some(value))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_dataset() {
        // Given
        let data = r#"{
            "language": "en",
            "snips_nlu_version": "0.19.0",
            "intents": {
                "SetLightBrightness": {
                    "utterances": [
                        {
                            "data": [
                                {"text": "set lights to "},
                                {
                                    "text": "twenty",
                                    "entity": "snips/percentage",
                                    "slot_name": "brightness"
                                },
                                {"text": " in the basement"}
                            ]
                        }
                    ]
                }
            },
            "entities": {
                "snips/percentage": {}
            }
        }"#;

        // When
        let dataset: NluDataset = serde_json::from_str(data).unwrap();

        // Then
        assert_eq!(Some("en".to_string()), dataset.language);
        assert_eq!(1, dataset.utterances_count());
        assert_eq!(vec!["SetLightBrightness"], dataset.intent_names());
        assert_eq!(
            Some(&Value::String("0.19.0".to_string())),
            dataset.extra.get("snips_nlu_version")
        );
        let utterance = &dataset.intents["SetLightBrightness"].utterances[0];
        assert_eq!("set lights to twenty in the basement", utterance.text());
        assert_eq!(
            vec![Chunk {
                text: "twenty".to_string(),
                entity: Some(Some("snips/percentage".to_string())),
                slot_name: Some("brightness".to_string()),
                extra: Map::new(),
            }],
            utterance.slots()
        );
    }

    #[test]
    fn test_serialize_chunk_without_slot_omits_slot_fields() {
        // Given
        let chunk = Chunk {
            text: "turn on the lights".to_string(),
            entity: None,
            slot_name: None,
            extra: Map::new(),
        };

        // When
        let serialized = serde_json::to_value(&chunk).unwrap();

        // Then
        assert_eq!(json!({"text": "turn on the lights"}), serialized);
    }

    #[test]
    fn test_unknown_fields_are_preserved() {
        // Given
        let data = json!({
            "data": [
                {"text": "kitchen", "entity": "room", "slot_name": "room", "range": [0, 7]}
            ],
            "speaker": "spk_01"
        });

        // When
        let utterance: Utterance = serde_json::from_value(data.clone()).unwrap();
        let serialized = serde_json::to_value(&utterance).unwrap();

        // Then
        assert_eq!(data, serialized);
    }

    #[test]
    fn test_chunk_with_null_entity_is_a_slot() {
        // Given
        let data = json!({
            "data": [
                {"text": "turn on the "},
                {"text": "kitchen", "entity": null, "slot_name": "room"}
            ]
        });

        // When
        let utterance: Utterance = serde_json::from_value(data.clone()).unwrap();
        let serialized = serde_json::to_value(&utterance).unwrap();

        // Then
        let slots = utterance.slots();
        assert_eq!(1, slots.len());
        assert_eq!("kitchen", slots[0].text);
        assert_eq!(None, slots[0].entity());
        assert!(!utterance.data[0].is_slot());
        assert_eq!(data, serialized);
    }

    #[test]
    fn test_dataset_without_language() {
        // Given
        let data = json!({
            "intents": {"TurnLightOff": {"utterances": [{"data": [{"text": "lights off"}]}]}},
            "entities": {}
        });

        // When
        let dataset: NluDataset = serde_json::from_value(data.clone()).unwrap();
        let serialized = serde_json::to_value(&dataset).unwrap();

        // Then
        assert_eq!(None, dataset.language);
        assert_eq!(data, serialized);
    }

    #[test]
    fn test_serialize_labels() {
        // Given
        let labels = UtteranceLabels {
            text: "switch off the kitchen".to_string(),
            intent: "TurnOffLight".to_string(),
            slots: vec![Chunk {
                text: "kitchen".to_string(),
                entity: Some(Some("room".to_string())),
                slot_name: Some("room".to_string()),
                extra: Map::new(),
            }],
        };

        // When
        let serialized = serde_json::to_value(&labels).unwrap();

        // Then
        let expected = json!({
            "text": "switch off the kitchen",
            "intent": "TurnOffLight",
            "slots": [{"text": "kitchen", "entity": "room", "slot_name": "room"}]
        });
        assert_eq!(expected, serialized);
    }
}
