pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod filter;
pub mod forms;
pub mod model;
pub mod role;
pub mod route;
pub mod session;
pub mod storage;
pub mod technician;

mod utility;

pub use api::{ApiClient, ApiRequest, ApiResponse, Method, Transport};
pub use error::{AuthError, ClientError, DashboardError, SessionError};
pub use role::{route_for, Role};
pub use route::Route;
pub use session::{Session, SessionStore};
pub use storage::{MemoryStorage, SessionStorage};
