// ========== Destination API ==========

use serde::Serialize;
use shared::models::{Destination, DestinationCreate, DestinationType, DestinationUpdate};
use urlencoding::encode;

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;

#[derive(Serialize)]
struct NameQuery<'a> {
    name: &'a str,
}

impl TravelClient {
    pub async fn list_destinations(&self) -> ClientResult<Vec<Destination>> {
        self.http.get("/destinations").await
    }

    pub async fn list_active_destinations(&self) -> ClientResult<Vec<Destination>> {
        self.http.get("/destinations/active").await
    }

    pub async fn get_destination(&self, id: i64) -> ClientResult<Destination> {
        self.http.get(&format!("/destinations/{}", id)).await
    }

    pub async fn create_destination(&self, destination: &DestinationCreate) -> ClientResult<Destination> {
        self.http.post("/destinations", destination).await
    }

    pub async fn update_destination(
        &self,
        id: i64,
        destination: &DestinationUpdate,
    ) -> ClientResult<Destination> {
        self.http.put(&format!("/destinations/{}", id), destination).await
    }

    pub async fn delete_destination(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/destinations/{}", id)).await
    }

    pub async fn destinations_by_country(&self, country: &str) -> ClientResult<Vec<Destination>> {
        self.http
            .get(&format!("/destinations/country/{}", encode(country)))
            .await
    }

    pub async fn active_destinations_by_country(&self, country: &str) -> ClientResult<Vec<Destination>> {
        self.http
            .get(&format!("/destinations/country/{}/active", encode(country)))
            .await
    }

    pub async fn destinations_by_type(&self, destination_type: DestinationType) -> ClientResult<Vec<Destination>> {
        self.http
            .get(&format!("/destinations/type/{}", destination_type.as_str()))
            .await
    }

    pub async fn destinations_by_region(&self, region: &str) -> ClientResult<Vec<Destination>> {
        self.http
            .get(&format!("/destinations/region/{}", encode(region)))
            .await
    }

    /// Name search, performed by the backend
    pub async fn search_destinations(&self, name: &str) -> ClientResult<Vec<Destination>> {
        self.http
            .get_with_query("/destinations/search", &NameQuery { name })
            .await
    }

    /// Countries that have at least one active destination
    pub async fn active_countries(&self) -> ClientResult<Vec<String>> {
        self.http.get("/destinations/countries").await
    }

    /// Flips the `active` flag of a destination
    pub async fn toggle_destination_status(&self, id: i64) -> ClientResult<()> {
        self.http
            .patch_empty(&format!("/destinations/{}/toggle-status", id))
            .await
    }
}
