use super::{path_segment, ApiClient, ApiRequest, Method, Transport};
use crate::error::ClientError;
use crate::model::{Incident, Specialization, SpecializationQuery};

impl<T: Transport> ApiClient<T> {
    pub async fn technician_specializations(
        &self,
        username: &str,
        token: Option<&str>,
    ) -> Result<Vec<Specialization>, ClientError> {
        let path = format!("/api/technicians/{}/specializations", path_segment(username));
        let request = ApiRequest::new(Method::Get, path).bearer(token);
        self.fetch_json(request).await
    }

    pub async fn incidents_by_specialization(
        &self,
        specializations: &[Specialization],
        token: Option<&str>,
    ) -> Result<Vec<Incident>, ClientError> {
        let query = SpecializationQuery {
            specializations: specializations.to_vec(),
        };
        let request = ApiRequest::new(Method::Post, "/api/incidents/by-specialization")
            .json(&query)?
            .bearer(token);
        self.fetch_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::ScriptedTransport;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn technician_calls_carry_bearer_token() {
        let client = ApiClient::new(
            ScriptedTransport::default()
                .reply(200, r#"["network","DATABASE"]"#)
                .reply(200, "[]"),
        );
        let specs = block_on(client.technician_specializations("tech", Some("jwt")))
            .expect("specs");
        assert_eq!(specs, vec![Specialization::Network, Specialization::Database]);

        let incidents = block_on(client.incidents_by_specialization(&specs, Some("jwt")))
            .expect("incidents");
        assert!(incidents.is_empty());

        let requests = client.transport().requests.borrow();
        assert_eq!(requests[0].path, "/api/technicians/tech/specializations");
        assert_eq!(requests[0].bearer.as_deref(), Some("jwt"));
        assert_eq!(requests[1].path, "/api/incidents/by-specialization");
        assert_eq!(
            requests[1].body,
            Some(serde_json::json!({ "specializations": ["network", "database"] }))
        );
        assert_eq!(requests[1].bearer.as_deref(), Some("jwt"));
    }

    #[test]
    fn reserved_characters_in_username_are_escaped() {
        let client = ApiClient::new(ScriptedTransport::default().reply(200, "[]"));
        block_on(client.technician_specializations("a/b#c?", None)).expect("specs");

        let requests = client.transport().requests.borrow();
        assert_eq!(
            requests[0].path,
            "/api/technicians/a%2Fb%23c%3F/specializations"
        );
    }
}
