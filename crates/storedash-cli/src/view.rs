//! The store list view: the collection of stores last fetched from the
//! service plus a single in-flight flag for create requests.
//!
//! Methods take `&mut self`, so remote calls from one view are strictly
//! sequential; a stale list response can never overwrite a newer one.

use storedash_core::StoreRecord;
use storedash_provisioner::{ProvisionerClient, ProvisionerError};

pub(crate) struct StoreListView {
    client: ProvisionerClient,
    stores: Vec<StoreRecord>,
    creating: bool,
}

impl StoreListView {
    pub(crate) fn new(client: ProvisionerClient) -> Self {
        Self {
            client,
            stores: Vec::new(),
            creating: false,
        }
    }

    pub(crate) fn stores(&self) -> &[StoreRecord] {
        &self.stores
    }

    pub(crate) fn is_creating(&self) -> bool {
        self.creating
    }

    pub(crate) fn client(&self) -> &ProvisionerClient {
        &self.client
    }

    /// Re-fetches the store collection and replaces the held list.
    ///
    /// On failure the previously held collection is kept and the error is
    /// returned to the caller.
    ///
    /// # Errors
    ///
    /// Propagates any [`ProvisionerError`] from the list request.
    pub(crate) async fn refresh(&mut self) -> Result<(), ProvisionerError> {
        let stores = self.client.list_stores().await?;
        self.stores = stores;
        Ok(())
    }

    /// Provisions a new store, then refreshes the list.
    ///
    /// Rejects re-entry while an earlier create is still in flight. The
    /// in-flight flag is set for the whole create-then-refresh span and
    /// cleared on both success and failure.
    ///
    /// # Errors
    ///
    /// Returns an error if a create is already in flight, or if the create
    /// or the subsequent refresh fails.
    pub(crate) async fn create(&mut self) -> anyhow::Result<StoreRecord> {
        if self.creating {
            anyhow::bail!("a create request is already in flight");
        }
        self.creating = true;
        let outcome = self.create_inner().await;
        self.creating = false;
        outcome
    }

    async fn create_inner(&mut self) -> anyhow::Result<StoreRecord> {
        let record = self.client.create_store().await?;
        self.refresh().await?;
        Ok(record)
    }

    /// Deletes the store with the given id, then refreshes the list.
    ///
    /// No confirmation step; the id is trusted as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete or the subsequent refresh fails.
    pub(crate) async fn delete(&mut self, store_id: &str) -> anyhow::Result<String> {
        let deleted = self.client.delete_store(store_id).await?;
        self.refresh().await?;
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn view_for(server: &MockServer) -> StoreListView {
        let client = ProvisionerClient::with_base_url(&server.uri(), 30, "storedash-test/0.1")
            .expect("client construction should not fail");
        StoreListView::new(client)
    }

    fn store_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "store_id": id,
            "status": status,
            "url": format!("http://{id}.localhost")
        })
    }

    #[tokio::test]
    async fn initial_refresh_issues_exactly_one_read() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stores": [store_json("store-a1b2c3", "Ready")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.refresh().await.expect("refresh should succeed");

        assert_eq!(view.stores().len(), 1);
        assert_eq!(view.stores()[0].store_id, "store-a1b2c3");
        server.verify().await;
    }

    #[tokio::test]
    async fn refresh_failure_keeps_previous_collection() {
        let server = MockServer::start().await;

        // First read succeeds, every later one fails.
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stores": [store_json("store-a1b2c3", "Ready")]
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(
                ResponseTemplate::new(500)
                    .set_body_json(serde_json::json!({ "detail": "kubectl unavailable" })),
            )
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.refresh().await.expect("first refresh should succeed");
        assert_eq!(view.stores().len(), 1);

        let err = view.refresh().await.expect_err("second refresh should fail");
        assert!(err.to_string().contains("kubectl unavailable"));
        assert_eq!(view.stores().len(), 1, "stale collection should be kept");
    }

    #[tokio::test]
    async fn create_refreshes_and_clears_flag() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/stores"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(store_json("store-9f8e7d", "Ready")),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "stores": [store_json("store-9f8e7d", "Ready")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        let record = view.create().await.expect("create should succeed");

        assert_eq!(record.store_id, "store-9f8e7d");
        assert!(!view.is_creating(), "flag should clear after the refresh");
        assert_eq!(view.stores().len(), 1);
        server.verify().await;
    }

    #[tokio::test]
    async fn create_failure_clears_flag_and_skips_refresh() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/stores"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({ "detail": "Max store limit reached" })),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        let err = view.create().await.expect_err("limit should be an error");

        assert!(err.to_string().contains("Max store limit reached"));
        assert!(!view.is_creating(), "flag should clear on failure too");
        server.verify().await;
    }

    #[tokio::test]
    async fn create_is_rejected_while_one_is_in_flight() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/stores"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(store_json("store-9f8e7d", "Ready")),
            )
            .expect(0)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        view.creating = true;

        let err = view.create().await.expect_err("re-entrant create should fail");
        assert!(err.to_string().contains("already in flight"));
        server.verify().await;
    }

    #[tokio::test]
    async fn delete_targets_id_then_issues_one_read() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/stores/store-a1b2c3"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "deleted": "store-a1b2c3" })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/stores"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let mut view = view_for(&server);
        let deleted = view.delete("store-a1b2c3").await.expect("delete should succeed");

        assert_eq!(deleted, "store-a1b2c3");
        assert!(view.stores().is_empty());
        server.verify().await;
    }
}
