//! HTTP API handlers for the airport administration backend.
//!
//! All entity endpoints live under `/api` and share one set of generic
//! handlers; which operations an entity exposes is decided in [`router`].
//!
//! | Path | Methods |
//! |---|---|
//! | `/api/flights`, `/api/airlines` | list, get, create, update, delete |
//! | `/api/passengers`, `/api/baggage` | list (`?flightId=`), get, create, update |
//! | `/api/gates`, `/api/staff`, `/api/maintenance`, `/api/security/alerts` | list, get, create, update |
//! | `/api/runways` | list, get, update |
//! | `/api/weather/current` | latest reading |
//! | `/api/dashboard/stats` | aggregate counters |
//!
//! Handlers touch exactly one collection. Updating one record never updates
//! another: assigning a gate to a flight leaves the gate's status alone.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::{Method, StatusCode, header},
    routing::get,
};
use serde::Serialize;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{Span, info, instrument};

use crate::dashboard::compute_stats;
use crate::model::{
    Airline, Baggage, Creatable, DashboardStats, Entity, Flight, FlightFilter, Gate,
    Maintenance, Passenger, Patchable, Runway, SecurityAlert, Staff, UpdateFlightRequest,
    Weather, generate_id,
};
use crate::response::{ApiError, ApiResponse, JsonBody, PrettyJson, QueryParams, panic_response};
use crate::store::{Store, Stored};

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "Airport Admin API";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the full application router: `/`, everything under `/api`, and the
/// CORS, tracing and panic layers.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/flights", get(list::<Flight>).post(create::<Flight>))
        .route(
            "/flights/:id",
            get(fetch::<Flight>)
                .put(update_flight)
                .delete(remove::<Flight>),
        )
        .route("/airlines", get(list::<Airline>).post(create::<Airline>))
        .route(
            "/airlines/:id",
            get(fetch::<Airline>)
                .put(update::<Airline>)
                .delete(remove::<Airline>),
        )
        .route(
            "/passengers",
            get(list_passengers).post(create::<Passenger>),
        )
        .route(
            "/passengers/:id",
            get(fetch::<Passenger>).put(update::<Passenger>),
        )
        .route("/gates", get(list::<Gate>).post(create::<Gate>))
        .route("/gates/:id", get(fetch::<Gate>).put(update::<Gate>))
        .route("/staff", get(list::<Staff>).post(create::<Staff>))
        .route("/staff/:id", get(fetch::<Staff>).put(update::<Staff>))
        .route("/weather/current", get(current_weather))
        .route("/runways", get(list::<Runway>))
        .route("/runways/:id", get(fetch::<Runway>).put(update::<Runway>))
        .route("/baggage", get(list_baggage).post(create::<Baggage>))
        .route("/baggage/:id", get(fetch::<Baggage>).put(update::<Baggage>))
        .route(
            "/maintenance",
            get(list::<Maintenance>).post(create::<Maintenance>),
        )
        .route(
            "/maintenance/:id",
            get(fetch::<Maintenance>).put(update::<Maintenance>),
        )
        .route(
            "/security/alerts",
            get(list::<SecurityAlert>).post(create::<SecurityAlert>),
        )
        .route(
            "/security/alerts/:id",
            get(fetch::<SecurityAlert>).put(update::<SecurityAlert>),
        )
        .route("/dashboard/stats", get(dashboard_stats));

    Router::new()
        .route("/", get(service_info))
        .nest("/api", api)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors())
        .with_state(state)
}

/// Any origin, the usual verbs, and the two headers the front end sends.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Pull the id out of the path, rejecting a missing or blank one.
fn require_id<T: Stored>(path: Option<Path<String>>) -> Result<String, ApiError> {
    match path {
        Some(Path(id)) if !id.trim().is_empty() => {
            Span::current().record("id", id.as_str());
            Ok(id)
        }
        _ => Err(ApiError::MissingId(T::ID_NOUN)),
    }
}

/// GET /api/{entity} - List every record in insertion order.
#[instrument(skip_all, fields(entity = T::NOUN))]
pub async fn list<T: Stored>(State(state): State<AppState>) -> ApiResponse<Vec<T>> {
    ApiResponse::ok(T::collection(&state.store).list().await)
}

/// GET /api/{entity}/:id - Fetch one record.
#[instrument(skip_all, fields(entity = T::NOUN, id))]
pub async fn fetch<T: Stored>(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> Result<ApiResponse<T>, ApiError> {
    let id = require_id::<T>(path)?;

    T::collection(&state.store)
        .get(&id)
        .await
        .map(ApiResponse::ok)
        .ok_or(ApiError::NotFound(T::NOUN))
}

/// POST /api/{entity} - Create a record with a freshly generated id.
///
/// Any id in the body is ignored. Responds `201 Created` with the stored
/// record.
#[instrument(skip_all, fields(entity = T::NOUN, id))]
pub async fn create<T: Stored + Creatable>(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<T::Create>,
) -> Result<(StatusCode, ApiResponse<T>), ApiError> {
    let id = generate_id::<T>();
    Span::current().record("id", id.as_str());

    let created = T::collection(&state.store)
        .insert(T::from_create(id, request))
        .await?;

    info!(id = %created.id(), "{} created", T::NOUN);
    Ok((StatusCode::CREATED, ApiResponse::ok(created)))
}

/// PUT /api/{entity}/:id - Merge the body into an existing record.
///
/// Fields present in the body replace the stored values; omitted fields keep
/// them. The path id always wins over anything in the body. An unknown id is
/// a 404 and creates nothing.
#[instrument(skip_all, fields(entity = T::NOUN, id))]
pub async fn update<T: Stored + Patchable>(
    State(state): State<AppState>,
    path: Option<Path<String>>,
    JsonBody(patch): JsonBody<T::Patch>,
) -> Result<ApiResponse<T>, ApiError> {
    let id = require_id::<T>(path)?;
    apply_patch::<T>(&state.store, &id, patch).await
}

/// PUT /api/flights/:id - Selective flight update.
///
/// The flight is looked up before the body is read, so an unknown id is a
/// 404 whatever the body holds.
#[instrument(skip_all, fields(entity = Flight::NOUN, id))]
pub async fn update_flight(
    State(state): State<AppState>,
    path: Option<Path<String>>,
    body: Result<JsonBody<UpdateFlightRequest>, ApiError>,
) -> Result<ApiResponse<Flight>, ApiError> {
    let id = require_id::<Flight>(path)?;
    if state.store.flights.get(&id).await.is_none() {
        return Err(ApiError::NotFound(Flight::NOUN));
    }

    let JsonBody(patch) = body?;
    apply_patch::<Flight>(&state.store, &id, patch).await
}

async fn apply_patch<T: Stored + Patchable>(
    store: &Store,
    id: &str,
    patch: T::Patch,
) -> Result<ApiResponse<T>, ApiError> {
    let updated = T::collection(store)
        .merge(id, patch)
        .await
        .ok_or(ApiError::NotFound(T::NOUN))?;

    info!(id = %id, "{} updated", T::NOUN);
    Ok(ApiResponse::ok(updated))
}

/// DELETE /api/{entity}/:id - Remove a record.
///
/// Records that refer to the removed one are left as they are.
#[instrument(skip_all, fields(entity = T::NOUN, id))]
pub async fn remove<T: Stored>(
    State(state): State<AppState>,
    path: Option<Path<String>>,
) -> Result<ApiResponse<()>, ApiError> {
    let id = require_id::<T>(path)?;

    if T::collection(&state.store).remove(&id).await {
        info!(id = %id, "{} deleted", T::NOUN);
        Ok(ApiResponse::<()>::message(format!("{} deleted", T::NOUN)))
    } else {
        Err(ApiError::NotFound(T::NOUN))
    }
}

/// GET /api/passengers - List passengers, optionally only those on one flight.
#[instrument(skip(state))]
pub async fn list_passengers(
    State(state): State<AppState>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> ApiResponse<Vec<Passenger>> {
    let passengers = match FlightFilter::from_pairs(pairs).flight_id {
        Some(flight_id) => state.store.passengers_by_flight(&flight_id).await,
        None => state.store.passengers.list().await,
    };
    ApiResponse::ok(passengers)
}

/// GET /api/baggage - List baggage, optionally only that on one flight.
#[instrument(skip(state))]
pub async fn list_baggage(
    State(state): State<AppState>,
    QueryParams(pairs): QueryParams<Vec<(String, String)>>,
) -> ApiResponse<Vec<Baggage>> {
    let baggage = match FlightFilter::from_pairs(pairs).flight_id {
        Some(flight_id) => state.store.baggage_by_flight(&flight_id).await,
        None => state.store.baggage.list().await,
    };
    ApiResponse::ok(baggage)
}

/// GET /api/weather/current - The reading with the latest timestamp.
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
) -> Result<ApiResponse<Weather>, ApiError> {
    state
        .store
        .latest_weather()
        .await
        .map(ApiResponse::ok)
        .ok_or(ApiError::NoWeatherData)
}

/// GET /api/dashboard/stats - Aggregate counters, recomputed on each call.
#[instrument(skip(state))]
pub async fn dashboard_stats(State(state): State<AppState>) -> ApiResponse<DashboardStats> {
    let stats = compute_stats(&state.store).await;
    info!(
        total_flights = stats.total_flights,
        active_flights = stats.active_flights,
        weather = %stats.weather_condition,
        "Dashboard stats computed"
    );
    ApiResponse::ok(stats)
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// GET / - Service identity.
pub async fn service_info() -> PrettyJson<ServiceInfo> {
    PrettyJson(ServiceInfo {
        name: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_responses_are_pretty_printed_json() {
        let app = router(AppState::new(Store::seeded()));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/flights/flight-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(text.starts_with("{\n  \"success\": true"));
        assert!(text.contains("\"flightNumber\": \"SKW101\""));
    }

    #[tokio::test]
    async fn test_service_info() {
        let app = router(AppState::new(Store::new()));

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["name"], SERVICE_NAME);
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["status"], "running");
    }

    #[tokio::test]
    async fn test_cors_preflight_allows_any_origin() {
        let app = router(AppState::new(Store::new()));

        let response = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/flights")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(methods.contains("PUT"));
        assert!(methods.contains("DELETE"));
    }

    #[test]
    fn test_require_id() {
        assert_eq!(
            require_id::<Flight>(Some(Path("flight-1".to_string()))).unwrap(),
            "flight-1"
        );
        assert!(matches!(
            require_id::<Staff>(Some(Path("  ".to_string()))),
            Err(ApiError::MissingId("staff"))
        ));
        assert!(matches!(
            require_id::<SecurityAlert>(None),
            Err(ApiError::MissingId("alert"))
        ));
    }
}
