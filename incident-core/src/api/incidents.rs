use super::{ApiClient, ApiRequest, Method, Transport};
use crate::error::ClientError;
use crate::model::{Incident, NewIncident};

impl<T: Transport> ApiClient<T> {
    pub async fn create_incident(&self, incident: &NewIncident) -> Result<Incident, ClientError> {
        let request = ApiRequest::new(Method::Post, "/api/incidents").json(incident)?;
        self.fetch_json(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::ScriptedTransport;
    use super::*;
    use chrono::{TimeZone, Utc};
    use futures::executor::block_on;

    #[test]
    fn create_incident_sends_status_and_date() {
        let client = ApiClient::new(ScriptedTransport::default().reply(
            201,
            r#"{"id":"inc-9","title":"printer","description":"jammed","status":"Open","priority":0}"#,
        ));
        let report = NewIncident {
            title: "printer".into(),
            description: "jammed".into(),
            category: None,
            priority: None,
            status: "Open".into(),
            creation_date: Utc.with_ymd_and_hms(2024, 6, 10, 8, 0, 0).unwrap(),
        };
        let created = block_on(client.create_incident(&report)).expect("created");
        assert_eq!(created.id.as_deref(), Some("inc-9"));

        let requests = client.transport().requests.borrow();
        let body = requests[0].body.as_ref().expect("body");
        assert_eq!(body["status"], "Open");
        assert_eq!(body["creationDate"], "2024-06-10T08:00:00Z");
        assert!(body.get("category").is_none());
    }
}
