// ========== Reservation API ==========

use shared::models::{CreateReservationRequest, Reservation, ReservationUpdate};

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl TravelClient {
    pub async fn list_reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get("/reservations").await
    }

    pub async fn get_reservation(&self, id: i64) -> ClientResult<Reservation> {
        self.http.get(&format!("/reservations/{}", id)).await
    }

    pub async fn create_reservation(&self, request: &CreateReservationRequest) -> ClientResult<Reservation> {
        self.http.post("/reservations", request).await
    }

    pub async fn update_reservation(
        &self,
        id: i64,
        reservation: &ReservationUpdate,
    ) -> ClientResult<Reservation> {
        self.http.put(&format!("/reservations/{}", id), reservation).await
    }

    pub async fn delete_reservation(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/reservations/{}", id)).await
    }

    /// Requests the PENDING -> CONFIRMED transition. The backend decides.
    pub async fn confirm_reservation(&self, id: i64) -> ClientResult<()> {
        self.http
            .patch_empty(&format!("/reservations/{}/confirm", id))
            .await
    }

    /// Requests cancellation. The backend decides.
    pub async fn cancel_reservation(&self, id: i64) -> ClientResult<()> {
        self.http
            .patch_empty(&format!("/reservations/{}/cancel", id))
            .await
    }
}
