//! Platform service.

use itm_domain::types::{Platform, PlatformOpts};
use itm_domain::Result;
use tracing::warn;

use super::{decode, encode, expect_status};
use crate::http::HttpTransport;

const PLATFORMS_BASE_PATH: &str = "v2/config/platforms.json";

/// Predicate applied to list results; a record survives iff every supplied
/// predicate returns true.
pub type PlatformFilter = Box<dyn Fn(&Platform) -> bool + Send + Sync>;

/// CRUD operations for platforms.
pub struct PlatformsService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> PlatformsService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Create a platform.
    pub async fn create(&self, opts: &PlatformOpts) -> Result<Platform> {
        let body = encode(opts)?;
        let response =
            self.transport.post(PLATFORMS_BASE_PATH, body, None).await.map_err(|err| {
                warn!(error = %err, "platform create request failed");
                err
            })?;
        expect_status(&response, 201)?;
        decode(&response)
    }

    /// Replace a platform with the full representation in `opts`.
    pub async fn update(&self, id: u32, opts: &PlatformOpts) -> Result<Platform> {
        let body = encode(opts)?;
        let response =
            self.transport.put(&platform_path(id), body, None).await.map_err(|err| {
                warn!(error = %err, "platform update request failed");
                err
            })?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Fetch a platform by id.
    pub async fn get(&self, id: u32) -> Result<Platform> {
        let response = self.transport.get(&platform_path(id)).await?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Delete a platform by id.
    pub async fn delete(&self, id: u32) -> Result<()> {
        let response = self.transport.delete(&platform_path(id)).await?;
        expect_status(&response, 204)
    }

    /// List platforms, keeping records that pass every filter.
    /// Server-returned order is preserved.
    pub async fn list(&self, filters: &[PlatformFilter]) -> Result<Vec<Platform>> {
        let response = self.transport.get(PLATFORMS_BASE_PATH).await?;
        expect_status(&response, 200)?;
        let all: Vec<Platform> = decode(&response)?;
        Ok(all
            .into_iter()
            .filter(|platform| filters.iter().all(|f| f(platform)))
            .collect())
    }
}

fn platform_path(id: u32) -> String {
    format!("{PLATFORMS_BASE_PATH}/{id}")
}

#[cfg(test)]
mod tests {
    use itm_domain::types::{PlatformCategory, RadarConfig};
    use itm_domain::ItmError;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::ItmClient;

    fn client_for(server: &MockServer) -> ItmClient {
        ItmClient::builder().base_url(server.uri()).build().expect("client")
    }

    fn test_opts() -> PlatformOpts {
        PlatformOpts::new(
            "foo",
            PlatformCategory::with_id(1),
            RadarConfig::public_data(true),
            12345,
            "foo description",
        )
    }

    fn platform_body(id: u32, alias: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "name": alias,
            "displayName": alias,
            "category": {"id": 1},
            "radarConfig": {"usePublicData": true},
            "publicProviderArchetypeId": 12345,
            "intendedUse": "foo description",
        })
    }

    #[tokio::test]
    async fn create_posts_canonical_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/config/platforms.json"))
            .and(body_json(serde_json::json!({
                "name": "foo",
                "displayName": "foo",
                "category": {"id": 1},
                "radarConfig": {"usePublicData": true},
                "publicProviderArchetypeId": 12345,
                "intendedUse": "foo description",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(platform_body(99, "foo")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let platform = client.platforms().create(&test_opts()).await.expect("create");

        assert_eq!(platform.id, 99);
        assert_eq!(platform.alias, "foo");
    }

    #[tokio::test]
    async fn create_surfaces_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/config/platforms.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not created"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.platforms().create(&test_opts()).await.expect_err("should fail");

        assert!(matches!(
            err,
            ItmError::UnexpectedStatus {
                expected: 201,
                got: 200,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn crud_round_trip_follows_status_contracts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/config/platforms.json/99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(platform_body(99, "foo")))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v2/config/platforms.json/99"))
            .respond_with(ResponseTemplate::new(200).set_body_json(platform_body(99, "foo")))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v2/config/platforms.json/99"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let platform = client.platforms().get(99).await.expect("get");
        assert_eq!(platform.public_provider_archetype_id, 12345);

        client.platforms().update(99, &test_opts()).await.expect("update");
        client.platforms().delete(99).await.expect("delete");
    }

    #[tokio::test]
    async fn list_applies_predicate_chain_in_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/config/platforms.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                platform_body(1, "first"),
                platform_body(2, "second"),
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let filters: Vec<PlatformFilter> = vec![
            Box::new(|p| p.category.id == Some(1)),
            Box::new(|p| p.alias != "second"),
        ];
        let platforms = client.platforms().list(&filters).await.expect("list");

        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0].alias, "first");
        assert_eq!(platforms[0].intended_use, "foo description");
    }
}
