// ========== Tour API ==========

use shared::models::{SearchFilters, Tour, TourCreate, TourUpdate};

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl TravelClient {
    pub async fn list_tours(&self) -> ClientResult<Vec<Tour>> {
        self.http.get("/tours").await
    }

    pub async fn list_available_tours(&self) -> ClientResult<Vec<Tour>> {
        self.http.get("/tours/available").await
    }

    pub async fn get_tour(&self, id: i64) -> ClientResult<Tour> {
        self.http.get(&format!("/tours/{}", id)).await
    }

    /// Backend search. Populated filters become flat query parameters
    /// (`?minPrice=1000&maxPrice=3000`); the result is returned as decoded.
    pub async fn search_tours(&self, filters: &SearchFilters) -> ClientResult<Vec<Tour>> {
        self.http.get_with_query("/tours/search", filters).await
    }

    pub async fn create_tour(&self, tour: &TourCreate) -> ClientResult<Tour> {
        self.http.post("/tours", tour).await
    }

    pub async fn update_tour(&self, id: i64, tour: &TourUpdate) -> ClientResult<Tour> {
        self.http.put(&format!("/tours/{}", id), tour).await
    }

    pub async fn delete_tour(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/tours/{}", id)).await
    }
}
