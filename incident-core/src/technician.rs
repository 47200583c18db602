use crate::api::{ApiClient, Transport};
use crate::error::DashboardError;
use crate::filter::open_incidents;
use crate::model::{Incident, Specialization};
use crate::session::Session;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TechnicianDashboard {
    pub username: String,
    pub specializations: Vec<Specialization>,
    pub incidents: Vec<Incident>,
}

impl TechnicianDashboard {
    pub fn open_incidents(&self) -> Vec<&Incident> {
        open_incidents(&self.incidents)
    }
}

/// Loads a technician's specializations, then the incidents matching them.
///
/// The two requests are strictly sequential: incidents are only requested once the
/// specializations came back. Without a stored username nothing is requested at all.
pub async fn load_dashboard<T: Transport>(
    client: &ApiClient<T>,
    session: Option<&Session>,
) -> Result<TechnicianDashboard, DashboardError> {
    let session = session.ok_or_else(|| {
        tracing::error!("username not found in session storage");
        DashboardError::MissingUsername
    })?;
    let token = Some(session.token.as_str());

    let specializations = client
        .technician_specializations(&session.username, token)
        .await
        .map_err(|err| {
            tracing::error!("error fetching specializations: {err}");
            DashboardError::Specializations(err)
        })?;

    let incidents = client
        .incidents_by_specialization(&specializations, token)
        .await
        .map_err(|err| {
            tracing::error!("error fetching incidents: {err}");
            DashboardError::Incidents(err)
        })?;

    Ok(TechnicianDashboard {
        username: session.username.clone(),
        specializations,
        incidents,
    })
}
