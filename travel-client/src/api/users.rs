// ========== User API ==========

use shared::models::{User, UserCreate, UserUpdate};

use crate::client::TravelClient;
use crate::error::ClientResult;
use crate::http::HttpClient;

impl TravelClient {
    pub async fn list_users(&self) -> ClientResult<Vec<User>> {
        self.http.get("/users").await
    }

    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        self.http.get(&format!("/users/{}", id)).await
    }

    pub async fn create_user(&self, user: &UserCreate) -> ClientResult<User> {
        self.http.post("/users", user).await
    }

    pub async fn update_user(&self, id: i64, user: &UserUpdate) -> ClientResult<User> {
        self.http.put(&format!("/users/{}", id), user).await
    }

    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("/users/{}", id)).await
    }
}
