use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::Validate;

/// Request to score one survey
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PredictRequest {
    /// Selected option per question, keyed by question display name
    #[validate(length(min = 1))]
    #[serde(deserialize_with = "unique_answers")]
    pub responses: BTreeMap<String, String>,
}

/// Deserialize answers, failing when a question appears twice so an invalid
/// option cannot be masked by a later valid one
fn unique_answers<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueAnswers;

    impl<'de> Visitor<'de> for UniqueAnswers {
        type Value = BTreeMap<String, String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of question to selected option")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut answers = BTreeMap::new();
            while let Some((question, option)) = access.next_entry::<String, String>()? {
                if answers.contains_key(&question) {
                    return Err(de::Error::custom(format!("duplicate question {:?}", question)));
                }
                answers.insert(question, option);
            }
            Ok(answers)
        }
    }

    deserializer.deserialize_map(UniqueAnswers)
}
