use super::{path_segment, ApiClient, ApiRequest, Method, Transport};
use crate::error::ClientError;
use crate::model::{NewUser, User, UserUpdate};

fn user_path(id: &str) -> String {
    format!("/api/users/{}", path_segment(id))
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_users(&self) -> Result<Vec<User>, ClientError> {
        self.fetch_json(ApiRequest::new(Method::Get, "/api/users"))
            .await
    }

    pub async fn get_user(&self, id: &str) -> Result<User, ClientError> {
        self.fetch_json(ApiRequest::new(Method::Get, user_path(id)))
            .await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ClientError> {
        let request = ApiRequest::new(Method::Post, "/api/users").json(user)?;
        self.fetch_json(request).await
    }

    pub async fn update_user(&self, id: &str, update: &UserUpdate) -> Result<User, ClientError> {
        let request = ApiRequest::new(Method::Put, user_path(id)).json(update)?;
        self.fetch_json(request).await
    }

    /// The backend answers deletes with plain text rather than JSON.
    pub async fn delete_user(&self, id: &str) -> Result<String, ClientError> {
        self.fetch_text(ApiRequest::new(Method::Delete, user_path(id)))
            .await
    }
}
