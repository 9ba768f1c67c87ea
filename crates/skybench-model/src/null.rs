//! Field deserializers that read JSON `null` as the type's zero value.
//!
//! The search API writes empty slices and maps as `null`, so every non-`Option`
//! field of the result tree goes through [`or_default`].

use std::collections::HashMap;

use serde::{Deserialize, Deserializer};

use crate::{LanguageCode, LocalizableString};

pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Like [`or_default`], and also drops languages whose forms are `null`.
pub(crate) fn localizable<'de, D>(deserializer: D) -> Result<LocalizableString, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<HashMap<LanguageCode, Option<HashMap<String, String>>>> =
        Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(language, forms)| forms.map(|forms| (language, forms)))
        .collect())
}

#[cfg(test)]
mod tests {
    use crate::{AgentInfo, Chunk, Segment};

    #[test]
    fn null_collections_and_scalars_read_as_empty() {
        let chunk: Chunk = serde_json::from_str(
            r#"{"chunk_id": null, "tickets": null, "agents": null, "last_update_timestamp": null}"#,
        )
        .expect("null fields");
        assert_eq!(chunk, Chunk::default());
    }

    #[test]
    fn nested_null_tags_read_as_empty() {
        let segment: Segment =
            serde_json::from_str(r#"{"flights": [1], "tags": null, "transfers": null}"#)
                .expect("null tags");
        assert!(segment.tags.is_empty());
        assert_eq!(segment.flights.len(), 1);
    }

    #[test]
    fn null_language_forms_are_skipped() {
        let agent: AgentInfo = serde_json::from_str(
            r#"{"id": 3, "label": {"en": {"default": "Gate"}, "ru": null}, "payment_methods": null}"#,
        )
        .expect("null forms");
        assert_eq!(agent.label.len(), 1);
        assert!(agent.payment_methods.is_empty());
    }
}
