use super::{ApiClient, ApiRequest, Method, Transport};
use crate::error::ClientError;
use crate::model::{LoginRequest, LoginResponse};

impl<T: Transport> ApiClient<T> {
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let request = ApiRequest::new(Method::Post, "/api/users/login").json(credentials)?;
        self.fetch_json(request).await
    }
}
