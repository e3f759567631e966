use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use warp::reply::Json;
use warp::Filter;

use crate::auth::{authorize, role::ALL_ROLES, Access, Role, SessionStore, User};
use crate::chat::ChatHub;
use crate::services::DataServices;
use crate::view::sections;
use crate::view::{DashboardData, DashboardLoader, ViewState, ViewerIdentity};

/// Everything the route handlers share.
pub struct PortalState {
    pub sessions: SessionStore,
    pub services: DataServices,
    pub chat: ChatHub,
    pub fetch_timeout: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: String,
    pub message: String,
    pub data: Option<serde_json::Value>,
}

impl ApiResponse {
    fn success(message: &str, data: serde_json::Value) -> Self {
        ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: Some(data),
        }
    }

    fn error(message: &str) -> Self {
        ApiResponse {
            status: "error".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    /// Soft fallback panel for unknown roles and sections. Always paired
    /// with a 200 — nothing in the portal hard-404s.
    fn not_available(message: &str) -> Self {
        ApiResponse {
            status: "not_found".to_string(),
            message: message.to_string(),
            data: None,
        }
    }

    fn redirect(location: &str) -> Self {
        ApiResponse {
            status: "redirect".to_string(),
            message: "Redirecting".to_string(),
            data: Some(json!({ "location": location })),
        }
    }

    fn invalid(errors: &[crate::error::FieldError]) -> Self {
        ApiResponse {
            status: "invalid".to_string(),
            message: "Validation failed".to_string(),
            data: Some(json!({ "fields": errors })),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    role: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ChatPost {
    text: String,
    #[serde(default)]
    sender_id: Option<String>,
    #[serde(default)]
    sender_name: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotQuery {
    doctor_id: Option<String>,
    date: Option<NaiveDate>,
}

pub struct RestApi {
    state: Arc<PortalState>,
}

impl RestApi {
    pub fn new(state: Arc<PortalState>) -> Self {
        RestApi { state }
    }

    pub fn routes(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        // Fixed routes first; the dynamic role routes are the catch-all
        // tail of the chain.
        self.entry()
            .or(self.login())
            .or(self.logout())
            .or(self.session())
            .or(self.chat_status())
            .or(self.chat_post())
            .or(self.doctors())
            .or(self.slots())
            .or(self.create_appointment())
            .or(self.cancel_appointment())
            .or(self.register_patient())
            .or(self.dashboard())
            .or(self.section())
    }

    /// Public entry: the role catalog the login page renders.
    fn entry(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path::end().and(warp::get()).map(|| {
            let roles: Vec<_> = ALL_ROLES
                .iter()
                .map(|role| {
                    json!({
                        "role": role,
                        "title": role.dashboard_title(),
                        "route": role.home_route(),
                    })
                })
                .collect();
            let response = ApiResponse::success("Select a role to sign in", json!({ "roles": roles }));
            warp::reply::json(&response)
        })
    }

    fn login(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("login")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |request: LoginRequest| {
                let state = Arc::clone(&state);
                async move {
                    let role = match Role::from_slug(&request.role) {
                        Some(role) => role,
                        None => {
                            let response = ApiResponse::error("Unknown role");
                            return Ok::<Json, Infallible>(warp::reply::json(&response));
                        }
                    };

                    let response = match state.sessions.login(role) {
                        Ok(user) => ApiResponse::success(
                            "Signed in",
                            json!({ "user": user, "redirect": role.home_route() }),
                        ),
                        Err(e) => ApiResponse::error(&format!("Failed to start session: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn logout(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("logout").and(warp::post()).map(move || {
            state.sessions.logout();
            let response = ApiResponse::redirect("/");
            warp::reply::json(&response)
        })
    }

    fn session(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("session").and(warp::get()).map(move || {
            let response = match state.sessions.current_user() {
                Some(user) => ApiResponse::success("Session active", json!({ "user": user })),
                None => ApiResponse::success("No session", json!({ "user": null })),
            };
            warp::reply::json(&response)
        })
    }

    fn chat_status(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("chat" / String).and(warp::get()).map(move |chat_id: String| {
            // Joining is what "GET the chat" means here; the receiver is
            // dropped but the channel stays open for later posts.
            drop(state.chat.connect(&chat_id));
            let response = ApiResponse::success(
                &format!("Connected to chat {}", chat_id),
                json!({ "status": "connected" }),
            );
            warp::reply::json(&response)
        })
    }

    fn chat_post(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("chat" / String)
            .and(warp::post())
            .and(warp::body::json())
            .map(move |chat_id: String, post: ChatPost| {
                let user = state.sessions.current_user();
                let sender_id = post
                    .sender_id
                    .or_else(|| user.as_ref().map(|u| u.id.clone()))
                    .unwrap_or_else(|| "anonymous".to_string());
                let sender_name = post
                    .sender_name
                    .or_else(|| user.map(|u| u.name))
                    .unwrap_or_else(|| "Anonymous".to_string());

                let ack = state.chat.publish(&chat_id, &sender_id, &sender_name, &post.text);
                let response = ApiResponse::success("Message delivered", json!(ack));
                warp::reply::json(&response)
            })
    }

    fn doctors(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("doctors")
            .and(warp::get())
            .and_then(move || {
                let state = Arc::clone(&state);
                async move {
                    let response = match state.services.appointments.list_doctors().await {
                        Ok(doctors) => {
                            ApiResponse::success("Doctors", json!({ "doctors": doctors }))
                        }
                        Err(e) => ApiResponse::error(&format!("Failed to load doctors: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn slots(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("appointments" / "slots")
            .and(warp::get())
            .and(warp::query::<SlotQuery>())
            .and_then(move |query: SlotQuery| {
                let state = Arc::clone(&state);
                async move {
                    let (doctor_id, date) = match (query.doctor_id, query.date) {
                        (Some(doctor_id), Some(date)) => (doctor_id, date),
                        _ => {
                            let response =
                                ApiResponse::error("doctorId and date query parameters are required");
                            return Ok::<Json, Infallible>(warp::reply::json(&response));
                        }
                    };

                    let response = match state
                        .services
                        .appointments
                        .available_slots(&doctor_id, date)
                        .await
                    {
                        Ok(slots) => ApiResponse::success("Available slots", json!({ "slots": slots })),
                        Err(e) => ApiResponse::error(&format!("Failed to load slots: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn create_appointment(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("appointments")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |request: crate::services::models::NewAppointment| {
                let state = Arc::clone(&state);
                async move {
                    if let Err(errors) = request.validate() {
                        let response = ApiResponse::invalid(&errors);
                        return Ok::<Json, Infallible>(warp::reply::json(&response));
                    }

                    let response = match state.services.appointments.create(request).await {
                        Ok(appointment) => ApiResponse::success(
                            "Appointment booked",
                            json!({ "appointment": appointment }),
                        ),
                        Err(e) => ApiResponse::error(&format!("Failed to book appointment: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn cancel_appointment(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("appointments" / String / "cancel")
            .and(warp::post())
            .and_then(move |id: String| {
                let state = Arc::clone(&state);
                async move {
                    let response = match state.services.appointments.cancel(&id).await {
                        Ok(true) => ApiResponse::success("Appointment cancelled", json!({ "id": id })),
                        Ok(false) => {
                            ApiResponse::not_available(&format!("No appointment {}", id))
                        }
                        Err(e) => ApiResponse::error(&format!("Failed to cancel: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn register_patient(
        &self,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!("patients")
            .and(warp::post())
            .and(warp::body::json())
            .and_then(move |request: crate::services::models::NewPatient| {
                let state = Arc::clone(&state);
                async move {
                    if let Err(errors) = request.validate() {
                        let response = ApiResponse::invalid(&errors);
                        return Ok::<Json, Infallible>(warp::reply::json(&response));
                    }

                    let response = match state.services.patients.register(request).await {
                        Ok(patient) => {
                            ApiResponse::success("Patient registered", json!({ "patient": patient }))
                        }
                        Err(e) => ApiResponse::error(&format!("Failed to register patient: {}", e)),
                    };
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn dashboard(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!(String)
            .and(warp::get())
            .and_then(move |role_slug: String| {
                let state = Arc::clone(&state);
                async move {
                    let role = match Role::from_slug(&role_slug) {
                        Some(role) => role,
                        None => {
                            let response = ApiResponse::not_available(
                                "The requested dashboard does not exist. Return to the home page and select a valid role.",
                            );
                            return Ok::<Json, Infallible>(warp::reply::json(&response));
                        }
                    };

                    let user = match gate(&state, role) {
                        Ok(user) => user,
                        Err(response) => return Ok::<Json, Infallible>(warp::reply::json(&response)),
                    };

                    let identity = ViewerIdentity::from_user(&user);
                    let loader = DashboardLoader::new(state.services.clone(), state.fetch_timeout);
                    let view_state = loader.load(role, &identity).await;

                    let response = dashboard_response(role, view_state, |data| {
                        json!({
                            "role": role,
                            "title": role.dashboard_title(),
                            "user": user,
                            "appointments": data.view.appointments,
                            "records": data.view.records,
                            "labReports": data.view.lab_reports,
                            "patients": data.patients,
                        })
                    });
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }

    fn section(&self) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let state = Arc::clone(&self.state);

        warp::path!(String / String)
            .and(warp::get())
            .and_then(move |role_slug: String, section_slug: String| {
                let state = Arc::clone(&state);
                async move {
                    let role = match Role::from_slug(&role_slug) {
                        Some(role) => role,
                        None => {
                            let response = ApiResponse::not_available(
                                "The requested section does not exist. Return to the home page and select a valid role.",
                            );
                            return Ok::<Json, Infallible>(warp::reply::json(&response));
                        }
                    };

                    let user = match gate(&state, role) {
                        Ok(user) => user,
                        Err(response) => return Ok::<Json, Infallible>(warp::reply::json(&response)),
                    };

                    let title = sections::section_title(role, &section_slug);
                    let available = sections::is_known_section(role, &section_slug);

                    let identity = ViewerIdentity::from_user(&user);
                    let loader = DashboardLoader::new(state.services.clone(), state.fetch_timeout);
                    let view_state = loader.load(role, &identity).await;

                    let response = dashboard_response(role, view_state, |data| {
                        json!({
                            "role": role,
                            "section": section_slug,
                            "title": title,
                            "available": available,
                            "content": section_content(role, &section_slug, &user, data),
                        })
                    });
                    Ok::<Json, Infallible>(warp::reply::json(&response))
                }
            })
    }
}

/// Gate a role-scoped route. A failed check yields the redirect response
/// the caller should return as-is.
fn gate(state: &PortalState, role: Role) -> Result<User, ApiResponse> {
    match authorize(state.sessions.current_user().as_ref(), &[role]) {
        Access::Granted(user) => Ok(user),
        Access::RedirectToEntry => Err(ApiResponse::redirect("/")),
        Access::RedirectToHome(own_role) => Err(ApiResponse::redirect(own_role.home_route())),
    }
}

/// Shape a settled view state into the response envelope; `ready` renders
/// the payload, `error` becomes the dismissible-banner contract.
fn dashboard_response(
    role: Role,
    view_state: ViewState,
    ready: impl FnOnce(&DashboardData) -> serde_json::Value,
) -> ApiResponse {
    match view_state {
        ViewState::Ready(data) => {
            let mut payload = ready(&data);
            if let Some(object) = payload.as_object_mut() {
                object.insert("state".to_string(), json!("ready"));
            }
            ApiResponse::success(role.dashboard_title(), payload)
        }
        ViewState::Error(error) => ApiResponse {
            status: "error".to_string(),
            message: "Failed to load dashboard data. Please refresh the page.".to_string(),
            data: Some(json!({ "state": "error", "error": error })),
        },
        ViewState::Loading => ApiResponse {
            status: "success".to_string(),
            message: "Loading".to_string(),
            data: Some(json!({ "state": "loading" })),
        },
    }
}

/// Pick the dataset slice a section renders. Sections without a dataset
/// (profile, messages, registration) get a small informational payload.
fn section_content(
    role: Role,
    section: &str,
    user: &User,
    data: &DashboardData,
) -> serde_json::Value {
    match (role, section) {
        (Role::Patient, "appointments") => json!({ "appointments": data.view.appointments }),
        (Role::Patient, "records") => json!({ "records": data.view.records }),
        (Role::Doctor, "schedule") => json!({ "appointments": data.view.appointments }),
        (Role::Doctor, "patients") => json!({ "patients": data.patients }),
        (Role::Receptionist, "appointments") => json!({ "appointments": data.view.appointments }),
        (Role::Receptionist, "registration") => json!({ "form": "patient-registration" }),
        (Role::Receptionist, "queue") => json!({ "appointments": data.view.appointments }),
        (Role::LabTechnician, "requests") => json!({ "labReports": data.view.lab_reports }),
        (Role::LabTechnician, "reports") => json!({ "labReports": data.view.lab_reports }),
        (_, "messages") => json!({ "chat": "open" }),
        (_, "profile") => json!({ "user": user }),
        _ => json!(null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DataConfig;
    use pretty_assertions::assert_eq;

    fn test_api(dir: &tempfile::TempDir) -> RestApi {
        let state = PortalState {
            sessions: SessionStore::open(dir.path().join("session.json")),
            services: DataServices::in_memory(&DataConfig {
                latency_ms: 0,
                fetch_timeout_ms: 1000,
            }),
            chat: ChatHub::new(),
            fetch_timeout: Duration::from_secs(1),
        };
        RestApi::new(Arc::new(state))
    }

    async fn body_of(response: warp::http::Response<warp::hyper::body::Bytes>) -> serde_json::Value {
        serde_json::from_slice(response.body()).unwrap()
    }

    async fn login_as(api: &RestApi, role: &str) {
        let response = warp::test::request()
            .method("POST")
            .path("/login")
            .json(&json!({ "role": role }))
            .reply(&api.routes())
            .await;
        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn entry_lists_all_four_roles() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request().path("/").reply(&api.routes()).await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["roles"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn login_redirects_lab_technician_to_short_route() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request()
            .method("POST")
            .path("/login")
            .json(&json!({ "role": "lab_technician" }))
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["data"]["redirect"], "/lab");
        assert_eq!(body["data"]["user"]["name"], "Tech. Mike");
    }

    #[tokio::test]
    async fn dashboard_without_session_redirects_to_entry() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request().path("/patient").reply(&api.routes()).await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "redirect");
        assert_eq!(body["data"]["location"], "/");
    }

    #[tokio::test]
    async fn dashboard_with_wrong_role_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "doctor").await;

        let response = warp::test::request().path("/patient").reply(&api.routes()).await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "redirect");
        assert_eq!(body["data"]["location"], "/doctor");
    }

    #[tokio::test]
    async fn patient_dashboard_is_scoped_to_the_logged_in_patient() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "patient").await;

        let response = warp::test::request().path("/patient").reply(&api.routes()).await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["state"], "ready");

        let appointments = body["data"]["appointments"].as_array().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0]["patientName"], "John Doe");
        // Patients never see the patient directory.
        assert_eq!(body["data"]["patients"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn lab_alias_reaches_the_lab_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "lab").await;

        let response = warp::test::request().path("/lab").reply(&api.routes()).await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["title"], "Laboratory Dashboard");
        assert_eq!(body["data"]["labReports"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_role_gets_a_soft_panel_not_a_404() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request().path("/janitor").reply(&api.routes()).await;
        assert_eq!(response.status(), 200);
        let body = body_of(response).await;
        assert_eq!(body["status"], "not_found");
    }

    #[tokio::test]
    async fn unknown_section_keeps_the_fallback_title() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "doctor").await;

        let response = warp::test::request()
            .path("/doctor/unmapped-section")
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["title"], "Unmapped Section");
        assert_eq!(body["data"]["available"], false);
        assert_eq!(body["data"]["content"], json!(null));
    }

    #[tokio::test]
    async fn doctor_schedule_section_carries_their_appointments() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "doctor").await;

        let response = warp::test::request()
            .path("/doctor/schedule")
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["data"]["title"], "My Schedule");
        let appointments = body["data"]["content"]["appointments"].as_array().unwrap();
        assert_eq!(appointments.len(), 1);
        assert_eq!(appointments[0]["doctorName"], "Dr. Sarah Smith");
    }

    #[tokio::test]
    async fn booking_then_cancelling_through_the_api() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);
        login_as(&api, "patient").await;

        let response = warp::test::request()
            .method("POST")
            .path("/appointments")
            .json(&json!({
                "patientId": "pat-001",
                "patientName": "John Doe",
                "doctorId": "doc-001",
                "doctorName": "Dr. Sarah Smith",
                "department": "Cardiology",
                "date": "2024-10-15",
                "startTime": "09:30",
                "endTime": "10:00",
                "type": "in-person"
            }))
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["appointment"]["status"], "scheduled");
        let id = body["data"]["appointment"]["id"].as_str().unwrap().to_string();

        let response = warp::test::request()
            .method("POST")
            .path(&format!("/appointments/{}/cancel", id))
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
    }

    #[tokio::test]
    async fn invalid_registration_reports_each_field() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request()
            .method("POST")
            .path("/patients")
            .json(&json!({
                "name": "",
                "email": "nope",
                "phone": "",
                "dateOfBirth": "1990-01-01",
                "gender": "other",
                "bloodType": "AB+"
            }))
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "invalid");
        assert_eq!(body["data"]["fields"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn chat_post_returns_the_system_ack() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request()
            .method("POST")
            .path("/chat/chat-001")
            .json(&json!({ "text": "Hello" }))
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["chatId"], "chat-001");
        assert_eq!(body["data"]["senderId"], "system");
        assert_eq!(body["data"]["status"], "delivered");
    }

    #[tokio::test]
    async fn slot_query_requires_doctor_and_date() {
        let dir = tempfile::tempdir().unwrap();
        let api = test_api(&dir);

        let response = warp::test::request()
            .path("/appointments/slots?doctorId=doc-001")
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "error");

        let response = warp::test::request()
            .path("/appointments/slots?doctorId=doc-001&date=2024-10-15")
            .reply(&api.routes())
            .await;
        let body = body_of(response).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["data"]["slots"].as_array().unwrap().len(), 2);
    }
}
