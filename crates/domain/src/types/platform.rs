//! Platform payloads.

use serde::{Deserialize, Serialize};

/// Category a platform belongs to, referenced by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
}

impl PlatformCategory {
    pub fn with_id(id: u32) -> Self {
        Self { id: Some(id) }
    }
}

/// Radar measurement configuration for a platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RadarConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_public_data: Option<bool>,
}

impl RadarConfig {
    pub fn public_data(enabled: bool) -> Self {
        Self {
            use_public_data: Some(enabled),
        }
    }
}

/// Options submitted when creating or updating a platform.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformOpts {
    /// Platform alias, the `name` wire field.
    #[serde(rename = "name")]
    pub alias: String,
    pub display_name: String,
    pub category: PlatformCategory,
    pub radar_config: RadarConfig,
    pub public_provider_archetype_id: u32,
    pub intended_use: String,
}

impl PlatformOpts {
    /// Platform options with the display name defaulted to the alias.
    pub fn new(
        alias: impl Into<String>,
        category: PlatformCategory,
        radar_config: RadarConfig,
        public_provider_archetype_id: u32,
        intended_use: impl Into<String>,
    ) -> Self {
        let alias = alias.into();
        Self {
            display_name: alias.clone(),
            alias,
            category,
            radar_config,
            public_provider_archetype_id,
            intended_use: intended_use.into(),
        }
    }
}

/// An existing platform as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Platform {
    pub id: u32,
    #[serde(rename = "name")]
    pub alias: String,
    pub display_name: String,
    pub category: PlatformCategory,
    pub radar_config: RadarConfig,
    pub public_provider_archetype_id: u32,
    pub intended_use: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_defaults_to_alias() {
        let opts = PlatformOpts::new(
            "foo",
            PlatformCategory::with_id(1),
            RadarConfig::public_data(true),
            12345,
            "foo description",
        );
        assert_eq!(opts.alias, "foo");
        assert_eq!(opts.display_name, "foo");
        assert_eq!(opts.category.id, Some(1));
        assert_eq!(opts.radar_config.use_public_data, Some(true));
    }

    #[test]
    fn serializes_to_documented_field_names() {
        let opts = PlatformOpts::new(
            "foo",
            PlatformCategory::with_id(1),
            RadarConfig::public_data(true),
            12345,
            "foo description",
        );
        let json = serde_json::to_value(&opts).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "foo",
                "displayName": "foo",
                "category": {"id": 1},
                "radarConfig": {"usePublicData": true},
                "publicProviderArchetypeId": 12345,
                "intendedUse": "foo description",
            })
        );
    }

    #[test]
    fn platform_decodes_from_response_body() {
        let body = serde_json::json!({
            "id": 99,
            "name": "foo",
            "displayName": "foo",
            "category": {"id": 1},
            "radarConfig": {"usePublicData": true},
            "publicProviderArchetypeId": 12345,
            "intendedUse": "foo description",
        });
        let platform: Platform = serde_json::from_value(body).unwrap();
        assert_eq!(platform.id, 99);
        assert_eq!(platform.alias, "foo");
        assert_eq!(platform.category, PlatformCategory::with_id(1));
    }
}
