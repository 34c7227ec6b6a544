//! Authoritative DNS zone service.

use itm_domain::types::{DnsZone, DnsZoneOpts};
use itm_domain::{ItmError, Result};
use tracing::warn;

use super::{decode, encode, expect_status};
use crate::http::HttpTransport;

const DNS_ZONES_BASE_PATH: &str = "v2/config/authdns.json";

/// Predicate applied to list results; a record survives iff every supplied
/// predicate returns true.
pub type DnsZoneFilter = Box<dyn Fn(&DnsZone) -> bool + Send + Sync>;

/// CRUD operations for DNS zones.
pub struct DnsZonesService<'a> {
    transport: &'a HttpTransport,
}

impl<'a> DnsZonesService<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Create a DNS zone. The API answers 201 on current deployments and
    /// 200 on older ones; both are accepted.
    pub async fn create(&self, opts: &DnsZoneOpts) -> Result<DnsZone> {
        let body = encode(opts)?;
        let response =
            self.transport.post(DNS_ZONES_BASE_PATH, body, None).await.map_err(|err| {
                warn!(error = %err, "DNS zone create request failed");
                err
            })?;
        if response.status != 200 && response.status != 201 {
            return Err(ItmError::UnexpectedStatus {
                expected: 201,
                got: response.status,
                body: response.body_string(),
            });
        }
        decode(&response)
    }

    /// Replace a DNS zone with the full representation in `opts`.
    pub async fn update(&self, id: u32, opts: &DnsZoneOpts) -> Result<DnsZone> {
        let body = encode(opts)?;
        let response =
            self.transport.put(&zone_path(id), body, None).await.map_err(|err| {
                warn!(error = %err, "DNS zone update request failed");
                err
            })?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Fetch a DNS zone by id.
    pub async fn get(&self, id: u32) -> Result<DnsZone> {
        let response = self.transport.get(&zone_path(id)).await?;
        expect_status(&response, 200)?;
        decode(&response)
    }

    /// Delete a DNS zone by id.
    pub async fn delete(&self, id: u32) -> Result<()> {
        let response = self.transport.delete(&zone_path(id)).await?;
        expect_status(&response, 204)
    }

    /// List DNS zones, keeping records that pass every filter.
    /// Server-returned order is preserved.
    pub async fn list(&self, filters: &[DnsZoneFilter]) -> Result<Vec<DnsZone>> {
        let response = self.transport.get(DNS_ZONES_BASE_PATH).await?;
        expect_status(&response, 200)?;
        let all: Vec<DnsZone> = decode(&response)?;
        Ok(all.into_iter().filter(|zone| filters.iter().all(|f| f(zone))).collect())
    }
}

fn zone_path(id: u32) -> String {
    format!("{DNS_ZONES_BASE_PATH}/{id}")
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::client::ItmClient;

    fn client_for(server: &MockServer) -> ItmClient {
        ItmClient::builder().base_url(server.uri()).build().expect("client")
    }

    fn zone_body(id: u32, domain: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "isPrimary": true,
            "domainName": domain,
            "description": "zone description",
            "records": [],
        })
    }

    #[tokio::test]
    async fn create_accepts_both_success_codes() {
        for status in [200u16, 201] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/v2/config/authdns.json"))
                .and(body_json(serde_json::json!({
                    "isPrimary": true,
                    "domainName": "foo.com",
                    "description": "zone description",
                })))
                .respond_with(
                    ResponseTemplate::new(status).set_body_json(zone_body(7, "foo.com")),
                )
                .expect(1)
                .mount(&server)
                .await;

            let client = client_for(&server);
            let zone = client
                .dns_zones()
                .create(&DnsZoneOpts::new("foo.com", "zone description"))
                .await
                .expect("create");
            assert_eq!(zone.id, 7);
            assert_eq!(zone.domain_name, "foo.com");
        }
    }

    #[tokio::test]
    async fn create_rejects_other_statuses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v2/config/authdns.json"))
            .respond_with(ResponseTemplate::new(400).set_body_string("bad zone"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .dns_zones()
            .create(&DnsZoneOpts::new("foo.com", "desc"))
            .await
            .expect_err("should fail");

        match err {
            ItmError::UnexpectedStatus {
                expected,
                got,
                body,
            } => {
                assert_eq!(expected, 201);
                assert_eq!(got, 400);
                assert_eq!(body, "bad zone");
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_puts_to_zone_path() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/v2/config/authdns.json/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(zone_body(7, "foo.com")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let zone = client
            .dns_zones()
            .update(7, &DnsZoneOpts::new("foo.com", "zone description"))
            .await
            .expect("update");
        assert_eq!(zone.id, 7);
    }

    #[tokio::test]
    async fn get_and_delete_follow_status_contracts() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/config/authdns.json/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(zone_body(7, "foo.com")))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/v2/config/authdns.json/7"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let zone = client.dns_zones().get(7).await.expect("get");
        assert_eq!(zone.domain_name, "foo.com");
        client.dns_zones().delete(7).await.expect("delete");
    }

    #[tokio::test]
    async fn list_filters_and_preserves_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/config/authdns.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
                zone_body(1, "a.com"),
                zone_body(2, "b.com"),
                zone_body(3, "a.org"),
            ])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let filters: Vec<DnsZoneFilter> =
            vec![Box::new(|zone| zone.domain_name.starts_with("a."))];
        let zones = client.dns_zones().list(&filters).await.expect("list");

        let ids: Vec<u32> = zones.iter().map(|zone| zone.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
