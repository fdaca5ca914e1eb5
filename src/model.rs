//! Data models for the airport administration API.
//!
//! Every record carries a string `id` of the form `<prefix>-<uuid>` that is
//! assigned by the server on creation and never changes afterwards. Records
//! point at each other only by storing the other record's id; nothing checks
//! that the referenced record exists.
//!
//! Field names travel over the wire in camelCase, enum values in
//! SCREAMING_SNAKE_CASE. Optional fields are left out of responses when unset.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record kept in its own collection of the store.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// Prefix of generated ids, e.g. `flight` in `flight-<uuid>`.
    const PREFIX: &'static str;

    /// Capitalized noun used in responses ("Flight not found", "Flight deleted").
    const NOUN: &'static str;

    /// Lowercase noun used when the id is missing ("Missing flight ID").
    const ID_NOUN: &'static str;

    fn id(&self) -> &str;
}

/// An entity that can be created from a request body.
pub trait Creatable: Entity {
    /// Shape of the POST body.
    type Create: DeserializeOwned + Send + 'static;

    /// Build the stored record from a request and a freshly generated id.
    fn from_create(id: String, request: Self::Create) -> Self;
}

/// An entity that can be updated in place from a partial body.
///
/// Fields present in the patch override the stored value; absent (or null)
/// fields keep it.
pub trait Patchable: Entity {
    type Patch: DeserializeOwned + Send + 'static;

    fn apply(&mut self, patch: Self::Patch);
}

/// Generate a new id for `T`: `"<prefix>-<random uuid>"`.
pub fn generate_id<T: Entity>() -> String {
    format!("{}-{}", T::PREFIX, Uuid::new_v4())
}

/// Copy every `Some` field of a patch onto the target record.
///
/// Fields listed after `optional` are `Option` on the record and are wrapped
/// back into `Some`.
macro_rules! merge {
    ($target:expr, $patch:expr; $($field:ident),* $(,)?) => {
        $(
            if let Some(value) = $patch.$field {
                $target.$field = value;
            }
        )*
    };
    ($target:expr, $patch:expr; $($field:ident),*; optional $($opt:ident),* $(,)?) => {
        merge!($target, $patch; $($field),*);
        $(
            if let Some(value) = $patch.$opt {
                $target.$opt = Some(value);
            }
        )*
    };
}

// ============================================================================
// Flights
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightStatus {
    Scheduled,
    Boarding,
    Departed,
    InFlight,
    Landed,
    Arrived,
    Delayed,
    Cancelled,
}

impl FlightStatus {
    /// Whether a flight in this status counts as active on the dashboard.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            FlightStatus::Scheduled | FlightStatus::Boarding | FlightStatus::InFlight
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    #[serde(default)]
    pub id: String,
    pub flight_number: String,
    pub airline_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub status: FlightStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gate_id: Option<String>,
    pub aircraft_type: String,
    pub capacity: i32,
    #[serde(default)]
    pub booked_seats: i32,
    #[serde(default)]
    pub delay_minutes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,
}

/// Request body for `POST /api/flights`.
///
/// The server fills in the id, the `SCHEDULED` status and zeroed counters.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightRequest {
    pub flight_number: String,
    pub airline_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub aircraft_type: String,
    pub capacity: i32,
    #[serde(default)]
    pub terminal: Option<String>,
}

/// Request body for `PUT /api/flights/:id`.
///
/// Only these five fields can change after a flight is created.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightRequest {
    pub status: Option<FlightStatus>,
    pub gate_id: Option<String>,
    pub delay_minutes: Option<i32>,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
}

impl Entity for Flight {
    const PREFIX: &'static str = "flight";
    const NOUN: &'static str = "Flight";
    const ID_NOUN: &'static str = "flight";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Flight {
    type Create = CreateFlightRequest;

    fn from_create(id: String, request: CreateFlightRequest) -> Self {
        Flight {
            id,
            flight_number: request.flight_number,
            airline_id: request.airline_id,
            origin: request.origin,
            destination: request.destination,
            departure_time: request.departure_time,
            arrival_time: request.arrival_time,
            status: FlightStatus::Scheduled,
            gate_id: None,
            aircraft_type: request.aircraft_type,
            capacity: request.capacity,
            booked_seats: 0,
            delay_minutes: 0,
            terminal: request.terminal,
        }
    }
}

impl Patchable for Flight {
    type Patch = UpdateFlightRequest;

    fn apply(&mut self, patch: UpdateFlightRequest) {
        merge!(self, patch; status, delay_minutes, departure_time, arrival_time; optional gate_id);
    }
}

// ============================================================================
// Airlines
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airline {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub code: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub contact_email: String,
    pub contact_phone: String,
    #[serde(default)]
    pub active_flights: i32,
    #[serde(default)]
    pub rating: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirlinePatch {
    pub name: Option<String>,
    pub code: Option<String>,
    pub country: Option<String>,
    pub logo: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub active_flights: Option<i32>,
    pub rating: Option<f64>,
}

impl Entity for Airline {
    const PREFIX: &'static str = "airline";
    const NOUN: &'static str = "Airline";
    const ID_NOUN: &'static str = "airline";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Airline {
    type Create = Airline;

    fn from_create(id: String, request: Airline) -> Self {
        Airline { id, ..request }
    }
}

impl Patchable for Airline {
    type Patch = AirlinePatch;

    fn apply(&mut self, patch: AirlinePatch) {
        merge!(self, patch;
            name, code, country, contact_email, contact_phone, active_flights, rating;
            optional logo);
    }
}

// ============================================================================
// Passengers
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckInStatus {
    NotCheckedIn,
    CheckedIn,
    Boarded,
    NoShow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub passport_number: String,
    pub nationality: String,
    pub date_of_birth: String,
    pub email: String,
    pub phone: String,
    pub flight_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<String>,
    pub check_in_status: CheckInStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boarding_pass: Option<String>,
    #[serde(default)]
    pub baggage_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassengerPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub passport_number: Option<String>,
    pub nationality: Option<String>,
    pub date_of_birth: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub flight_id: Option<String>,
    pub seat_number: Option<String>,
    pub check_in_status: Option<CheckInStatus>,
    pub boarding_pass: Option<String>,
    pub baggage_count: Option<i32>,
    pub special_requirements: Option<String>,
}

impl Entity for Passenger {
    const PREFIX: &'static str = "pass";
    const NOUN: &'static str = "Passenger";
    const ID_NOUN: &'static str = "passenger";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Passenger {
    type Create = Passenger;

    fn from_create(id: String, request: Passenger) -> Self {
        Passenger { id, ..request }
    }
}

impl Patchable for Passenger {
    type Patch = PassengerPatch;

    fn apply(&mut self, patch: PassengerPatch) {
        merge!(self, patch;
            first_name, last_name, passport_number, nationality, date_of_birth,
            email, phone, flight_id, check_in_status, baggage_count;
            optional seat_number, boarding_pass, special_requirements);
    }
}

// ============================================================================
// Gates
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateStatus {
    Available,
    Occupied,
    Maintenance,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gate {
    #[serde(default)]
    pub id: String,
    pub number: String,
    pub terminal: String,
    pub status: GateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_flight_id: Option<String>,
    pub capacity: i32,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_maintenance: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatePatch {
    pub number: Option<String>,
    pub terminal: Option<String>,
    pub status: Option<GateStatus>,
    pub current_flight_id: Option<String>,
    pub capacity: Option<i32>,
    pub facilities: Option<Vec<String>>,
    pub last_maintenance: Option<String>,
}

impl Entity for Gate {
    const PREFIX: &'static str = "gate";
    const NOUN: &'static str = "Gate";
    const ID_NOUN: &'static str = "gate";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Gate {
    type Create = Gate;

    fn from_create(id: String, request: Gate) -> Self {
        Gate { id, ..request }
    }
}

impl Patchable for Gate {
    type Patch = GatePatch;

    fn apply(&mut self, patch: GatePatch) {
        merge!(self, patch;
            number, terminal, status, capacity, facilities;
            optional current_flight_id, last_maintenance);
    }
}

// ============================================================================
// Staff
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffRole {
    GateAgent,
    Security,
    Customs,
    GroundCrew,
    AirTrafficController,
    Maintenance,
    Manager,
    CustomerService,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StaffStatus {
    OnDuty,
    OffDuty,
    OnBreak,
    SickLeave,
    Vacation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    #[serde(default)]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: StaffRole,
    pub email: String,
    pub phone: String,
    pub employee_id: String,
    pub shift: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_gate: Option<String>,
    pub status: StaffStatus,
    pub hire_date: String,
    #[serde(default)]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: Option<StaffRole>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub employee_id: Option<String>,
    pub shift: Option<String>,
    pub assigned_gate: Option<String>,
    pub status: Option<StaffStatus>,
    pub hire_date: Option<String>,
    pub certifications: Option<Vec<String>>,
}

impl Entity for Staff {
    const PREFIX: &'static str = "staff";
    const NOUN: &'static str = "Staff member";
    const ID_NOUN: &'static str = "staff";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Staff {
    type Create = Staff;

    fn from_create(id: String, request: Staff) -> Self {
        Staff { id, ..request }
    }
}

impl Patchable for Staff {
    type Patch = StaffPatch;

    fn apply(&mut self, patch: StaffPatch) {
        merge!(self, patch;
            first_name, last_name, role, email, phone, employee_id, shift,
            status, hire_date, certifications;
            optional assigned_gate);
    }
}

// ============================================================================
// Weather
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Foggy,
    Windy,
}

impl WeatherCondition {
    /// Wire name of the condition, as reported on the dashboard.
    pub fn name(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "CLEAR",
            WeatherCondition::PartlyCloudy => "PARTLY_CLOUDY",
            WeatherCondition::Cloudy => "CLOUDY",
            WeatherCondition::Rainy => "RAINY",
            WeatherCondition::Stormy => "STORMY",
            WeatherCondition::Snowy => "SNOWY",
            WeatherCondition::Foggy => "FOGGY",
            WeatherCondition::Windy => "WINDY",
        }
    }
}

/// A single weather reading.
///
/// Readings are only ever read through `GET /api/weather/current`, which picks
/// the one with the greatest `timestamp` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weather {
    #[serde(default)]
    pub id: String,
    pub timestamp: String,
    pub temperature: f64,
    pub condition: WeatherCondition,
    pub wind_speed: f64,
    pub wind_direction: String,
    pub visibility: f64,
    pub pressure: f64,
    pub humidity: i32,
    #[serde(default)]
    pub precipitation: f64,
    #[serde(default)]
    pub cloud_coverage: i32,
}

impl Entity for Weather {
    const PREFIX: &'static str = "weather";
    const NOUN: &'static str = "Weather reading";
    const ID_NOUN: &'static str = "weather";

    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================================
// Runways
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunwayStatus {
    Operational,
    Closed,
    Maintenance,
    PartiallyOperational,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runway {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub length: i32,
    pub width: i32,
    pub surface: String,
    pub status: RunwayStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintenance_schedule: Option<String>,
    #[serde(default = "default_true")]
    pub lighting_system: bool,
    #[serde(default = "default_true")]
    pub ils: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayPatch {
    pub name: Option<String>,
    pub length: Option<i32>,
    pub width: Option<i32>,
    pub surface: Option<String>,
    pub status: Option<RunwayStatus>,
    pub current_operation: Option<String>,
    pub maintenance_schedule: Option<String>,
    pub lighting_system: Option<bool>,
    pub ils: Option<bool>,
}

impl Entity for Runway {
    const PREFIX: &'static str = "runway";
    const NOUN: &'static str = "Runway";
    const ID_NOUN: &'static str = "runway";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Patchable for Runway {
    type Patch = RunwayPatch;

    fn apply(&mut self, patch: RunwayPatch) {
        merge!(self, patch;
            name, length, width, surface, status, lighting_system, ils;
            optional current_operation, maintenance_schedule);
    }
}

// ============================================================================
// Baggage
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaggageStatus {
    CheckedIn,
    InTransit,
    Loaded,
    Delivered,
    Lost,
    Delayed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaggageType {
    CarryOn,
    Checked,
    Oversized,
    Fragile,
    Special,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Baggage {
    #[serde(default)]
    pub id: String,
    pub tag_number: String,
    pub passenger_id: String,
    pub flight_id: String,
    pub weight: f64,
    pub status: BaggageStatus,
    pub location: String,
    #[serde(rename = "type")]
    pub baggage_type: BaggageType,
    #[serde(default)]
    pub special_handling: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaggagePatch {
    pub tag_number: Option<String>,
    pub passenger_id: Option<String>,
    pub flight_id: Option<String>,
    pub weight: Option<f64>,
    pub status: Option<BaggageStatus>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub baggage_type: Option<BaggageType>,
    pub special_handling: Option<bool>,
    pub notes: Option<String>,
}

impl Entity for Baggage {
    const PREFIX: &'static str = "bag";
    const NOUN: &'static str = "Baggage";
    const ID_NOUN: &'static str = "baggage";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Baggage {
    type Create = Baggage;

    fn from_create(id: String, request: Baggage) -> Self {
        Baggage { id, ..request }
    }
}

impl Patchable for Baggage {
    type Patch = BaggagePatch;

    fn apply(&mut self, patch: BaggagePatch) {
        merge!(self, patch;
            tag_number, passenger_id, flight_id, weight, status, location,
            baggage_type, special_handling;
            optional notes);
    }
}

// ============================================================================
// Maintenance
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceTarget {
    Gate,
    Runway,
    Aircraft,
    Facility,
    Equipment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
    Overdue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

/// A maintenance job against a gate, runway, aircraft, facility or piece of
/// equipment. `target_id` is not checked against any collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    #[serde(default)]
    pub id: String,
    pub target_type: MaintenanceTarget,
    pub target_id: String,
    pub scheduled_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<String>,
    pub status: MaintenanceStatus,
    pub description: String,
    pub technician: String,
    pub priority: MaintenancePriority,
    /// Minutes.
    pub estimated_duration: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePatch {
    pub target_type: Option<MaintenanceTarget>,
    pub target_id: Option<String>,
    pub scheduled_date: Option<String>,
    pub completed_date: Option<String>,
    pub status: Option<MaintenanceStatus>,
    pub description: Option<String>,
    pub technician: Option<String>,
    pub priority: Option<MaintenancePriority>,
    pub estimated_duration: Option<i32>,
    pub actual_duration: Option<i32>,
    pub cost: Option<f64>,
}

impl Entity for Maintenance {
    const PREFIX: &'static str = "maint";
    const NOUN: &'static str = "Maintenance record";
    const ID_NOUN: &'static str = "maintenance";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for Maintenance {
    type Create = Maintenance;

    fn from_create(id: String, request: Maintenance) -> Self {
        Maintenance { id, ..request }
    }
}

impl Patchable for Maintenance {
    type Patch = MaintenancePatch;

    fn apply(&mut self, patch: MaintenancePatch) {
        merge!(self, patch;
            target_type, target_id, scheduled_date, status, description,
            technician, priority, estimated_duration;
            optional completed_date, actual_duration, cost);
    }
}

// ============================================================================
// Security alerts
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Active,
    Investigating,
    Resolved,
    FalseAlarm,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlert {
    #[serde(default)]
    pub id: String,
    pub timestamp: String,
    pub level: SecurityLevel,
    pub location: String,
    pub description: String,
    pub status: AlertStatus,
    pub reported_by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityAlertPatch {
    pub timestamp: Option<String>,
    pub level: Option<SecurityLevel>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub status: Option<AlertStatus>,
    pub reported_by: Option<String>,
    pub resolved_by: Option<String>,
    pub resolution: Option<String>,
}

impl Entity for SecurityAlert {
    const PREFIX: &'static str = "alert";
    const NOUN: &'static str = "Security alert";
    const ID_NOUN: &'static str = "alert";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Creatable for SecurityAlert {
    type Create = SecurityAlert;

    fn from_create(id: String, request: SecurityAlert) -> Self {
        SecurityAlert { id, ..request }
    }
}

impl Patchable for SecurityAlert {
    type Patch = SecurityAlertPatch;

    fn apply(&mut self, patch: SecurityAlertPatch) {
        merge!(self, patch;
            timestamp, level, location, description, status, reported_by;
            optional resolved_by, resolution);
    }
}

// ============================================================================
// Dashboard
// ============================================================================

/// Aggregate counters for `GET /api/dashboard/stats`.
///
/// Recomputed from the current store contents on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_flights: usize,
    /// Flights that are scheduled, boarding or in the air.
    pub active_flights: usize,
    pub delayed_flights: usize,
    pub total_passengers: usize,
    pub available_gates: usize,
    pub staff_on_duty: usize,
    /// Condition of the latest weather reading, or `"UNKNOWN"`.
    pub weather_condition: String,
    /// Number of alerts still in the `ACTIVE` state.
    pub security_alerts: usize,
}

/// Query parameters for listings that can be narrowed to one flight.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FlightFilter {
    pub flight_id: Option<String>,
}

impl FlightFilter {
    pub const FLIGHT_ID_PARAM: &'static str = "flightId";

    /// Build the filter from raw query pairs. A repeated `flightId` keeps
    /// its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let flight_id = pairs
            .into_iter()
            .find(|(key, _)| key == Self::FLIGHT_ID_PARAM)
            .map(|(_, value)| value);
        Self { flight_id }
    }
}
