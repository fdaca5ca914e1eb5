//! In-memory storage layer.
//!
//! The [`Store`] owns one [`Collection`] per entity type. Each collection is a
//! lock-guarded map that remembers insertion order, so listings come back in
//! the order records were created.
//!
//! Every mutation runs under a single write-lock acquisition. In particular a
//! patch is applied to the stored record while the lock is held, so two
//! concurrent updates of the same collection cannot interleave. Nothing spans
//! more than one collection; there are no cross-entity transactions.
//!
//! State lives only as long as the process. [`Store::seeded`] rebuilds the
//! same sample data on every start.

use std::collections::HashMap;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::model::{
    Airline, Baggage, Entity, Flight, Gate, Maintenance, Passenger, Patchable, Runway,
    SecurityAlert, Staff, Weather,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with the same id is already stored.
    #[error("{noun} with id {id} already exists")]
    DuplicateId { noun: &'static str, id: String },
}

struct Rows<T> {
    order: Vec<String>,
    by_id: HashMap<String, T>,
}

/// An insertion-ordered collection of records of one type.
pub struct Collection<T> {
    rows: RwLock<Rows<T>>,
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Build a collection from records in the given order.
    ///
    /// A later record with the same id replaces an earlier one but keeps the
    /// earlier position.
    pub fn from_records(records: Vec<T>) -> Self {
        let mut order = Vec::with_capacity(records.len());
        let mut by_id = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id().to_string();
            if by_id.insert(id.clone(), record).is_none() {
                order.push(id);
            }
        }
        Self {
            rows: RwLock::new(Rows { order, by_id }),
        }
    }

    /// Snapshot of every record, in insertion order.
    pub async fn list(&self) -> Vec<T> {
        let rows = self.rows.read().await;
        rows.order
            .iter()
            .filter_map(|id| rows.by_id.get(id))
            .cloned()
            .collect()
    }

    /// Records matching `predicate`, in insertion order.
    pub async fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.order
            .iter()
            .filter_map(|id| rows.by_id.get(id))
            .filter(|&record| predicate(record))
            .cloned()
            .collect()
    }

    pub async fn count<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.by_id.values().filter(|&record| predicate(record)).count()
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.by_id.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn get(&self, id: &str) -> Option<T> {
        self.rows.read().await.by_id.get(id).cloned()
    }

    /// Insert a new record.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is taken; the stored
    /// record is left untouched.
    pub async fn insert(&self, record: T) -> Result<T, StoreError> {
        let mut rows = self.rows.write().await;
        let id = record.id().to_string();
        if rows.by_id.contains_key(&id) {
            return Err(StoreError::DuplicateId { noun: T::NOUN, id });
        }
        rows.order.push(id.clone());
        rows.by_id.insert(id, record.clone());
        Ok(record)
    }

    /// Replace the record stored under `id` wholesale.
    ///
    /// Returns `None` without inserting anything if `id` is unknown. The
    /// record keeps its position in the listing order.
    pub async fn replace(&self, id: &str, record: T) -> Option<T> {
        let mut rows = self.rows.write().await;
        let slot = rows.by_id.get_mut(id)?;
        *slot = record.clone();
        Some(record)
    }

    /// Remove the record stored under `id`, reporting whether one existed.
    pub async fn remove(&self, id: &str) -> bool {
        let mut rows = self.rows.write().await;
        if rows.by_id.remove(id).is_none() {
            return false;
        }
        rows.order.retain(|existing| existing != id);
        true
    }
}

impl<T: Patchable> Collection<T> {
    /// Apply `patch` to the record stored under `id` and return the result.
    ///
    /// Returns `None` without inserting anything if `id` is unknown.
    pub async fn merge(&self, id: &str, patch: T::Patch) -> Option<T> {
        let mut rows = self.rows.write().await;
        let record = rows.by_id.get_mut(id)?;
        record.apply(patch);
        Some(record.clone())
    }
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Owner of all entity state.
#[derive(Default)]
pub struct Store {
    pub flights: Collection<Flight>,
    pub airlines: Collection<Airline>,
    pub passengers: Collection<Passenger>,
    pub gates: Collection<Gate>,
    pub staff: Collection<Staff>,
    pub weather: Collection<Weather>,
    pub runways: Collection<Runway>,
    pub baggage: Collection<Baggage>,
    pub maintenance: Collection<Maintenance>,
    pub security_alerts: Collection<SecurityAlert>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store filled with the fixed sample data.
    pub fn seeded() -> Self {
        crate::seed::sample_store()
    }

    pub async fn passengers_by_flight(&self, flight_id: &str) -> Vec<Passenger> {
        self.passengers
            .filter(|passenger| passenger.flight_id == flight_id)
            .await
    }

    pub async fn baggage_by_flight(&self, flight_id: &str) -> Vec<Baggage> {
        self.baggage.filter(|bag| bag.flight_id == flight_id).await
    }

    /// The weather reading with the greatest timestamp.
    ///
    /// Timestamps are compared as strings; on a tie the earliest inserted
    /// reading wins.
    pub async fn latest_weather(&self) -> Option<Weather> {
        self.weather
            .list()
            .await
            .into_iter()
            .reduce(|latest, reading| {
                if reading.timestamp > latest.timestamp {
                    reading
                } else {
                    latest
                }
            })
    }
}

/// Access to the collection holding a given entity type.
///
/// Lets request handlers be written once, generically over the entity.
pub trait Stored: Entity {
    fn collection(store: &Store) -> &Collection<Self>;
}

impl Stored for Flight {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.flights
    }
}

impl Stored for Airline {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.airlines
    }
}

impl Stored for Passenger {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.passengers
    }
}

impl Stored for Gate {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.gates
    }
}

impl Stored for Staff {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.staff
    }
}

impl Stored for Runway {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.runways
    }
}

impl Stored for Baggage {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.baggage
    }
}

impl Stored for Maintenance {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.maintenance
    }
}

impl Stored for SecurityAlert {
    fn collection(store: &Store) -> &Collection<Self> {
        &store.security_alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AirlinePatch, CheckInStatus, Creatable, CreateFlightRequest, UpdateFlightRequest,
        WeatherCondition, generate_id,
    };

    fn airline(id: &str, name: &str) -> Airline {
        Airline {
            id: id.to_string(),
            name: name.to_string(),
            code: "TST".to_string(),
            country: "USA".to_string(),
            logo: None,
            contact_email: "ops@test.example".to_string(),
            contact_phone: "+1-555-0000".to_string(),
            active_flights: 0,
            rating: 3.0,
        }
    }

    fn flight(number: &str) -> Flight {
        Flight::from_create(
            generate_id::<Flight>(),
            CreateFlightRequest {
                flight_number: number.to_string(),
                airline_id: "airline-1".to_string(),
                origin: "BOS".to_string(),
                destination: "DEN".to_string(),
                departure_time: "2025-10-20T07:00:00Z".to_string(),
                arrival_time: "2025-10-20T10:00:00Z".to_string(),
                aircraft_type: "Embraer E175".to_string(),
                capacity: 76,
                terminal: None,
            },
        )
    }

    fn passenger(id: &str, flight_id: &str) -> Passenger {
        Passenger {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            passport_number: "UK000001".to_string(),
            nationality: "UK".to_string(),
            date_of_birth: "1815-12-10".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44-20-0000".to_string(),
            flight_id: flight_id.to_string(),
            seat_number: None,
            check_in_status: CheckInStatus::NotCheckedIn,
            boarding_pass: None,
            baggage_count: 0,
            special_requirements: None,
        }
    }

    fn weather(id: &str, timestamp: &str, condition: WeatherCondition) -> Weather {
        Weather {
            id: id.to_string(),
            timestamp: timestamp.to_string(),
            temperature: 12.0,
            condition,
            wind_speed: 5.0,
            wind_direction: "N".to_string(),
            visibility: 10.0,
            pressure: 1010.0,
            humidity: 50,
            precipitation: 0.0,
            cloud_coverage: 0,
        }
    }

    #[tokio::test]
    async fn test_insert_then_get_returns_same_record() {
        let collection = Collection::new();
        let created = collection.insert(flight("RT100")).await.unwrap();

        let fetched = collection.get(&created.id).await;
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let collection: Collection<Flight> = Collection::new();
        assert!(collection.get("flight-missing").await.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let collection = Collection::new();
        let first = collection.insert(flight("ORD001")).await.unwrap();
        let second = collection.insert(flight("ORD002")).await.unwrap();
        let third = collection.insert(flight("ORD003")).await.unwrap();

        let ids: Vec<String> = collection.list().await.into_iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_rejected() {
        let collection = Collection::new();
        collection.insert(airline("airline-x", "Original")).await.unwrap();

        let err = collection
            .insert(airline("airline-x", "Impostor"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            StoreError::DuplicateId {
                noun: "Airline",
                id: "airline-x".to_string()
            }
        );
        assert_eq!(collection.get("airline-x").await.unwrap().name, "Original");
        assert_eq!(collection.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove() {
        let collection = Collection::new();
        let created = collection.insert(flight("DEL001")).await.unwrap();

        assert!(collection.remove(&created.id).await);
        assert!(collection.get(&created.id).await.is_none());
        assert!(collection.list().await.is_empty());
        assert!(!collection.remove(&created.id).await);
    }

    #[tokio::test]
    async fn test_replace_unknown_does_not_insert() {
        let collection = Collection::new();
        assert!(
            collection
                .replace("airline-ghost", airline("airline-ghost", "Ghost"))
                .await
                .is_none()
        );
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let collection = Collection::from_records(vec![
            airline("airline-1", "One"),
            airline("airline-2", "Two"),
        ]);

        collection
            .replace("airline-1", airline("airline-1", "Uno"))
            .await
            .unwrap();

        let names: Vec<String> = collection.list().await.into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["Uno", "Two"]);
    }

    #[tokio::test]
    async fn test_merge_applies_patch() {
        let collection = Collection::from_records(vec![airline("airline-1", "One")]);

        let updated = collection
            .merge(
                "airline-1",
                AirlinePatch {
                    rating: Some(4.9),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.rating, 4.9);
        assert_eq!(updated.name, "One");
        assert_eq!(collection.get("airline-1").await, Some(updated));
    }

    #[tokio::test]
    async fn test_merge_unknown_does_not_insert() {
        let collection: Collection<Flight> = Collection::new();
        let result = collection
            .merge(
                "flight-ghost",
                UpdateFlightRequest {
                    delay_minutes: Some(10),
                    ..Default::default()
                },
            )
            .await;
        assert!(result.is_none());
        assert!(collection.is_empty().await);
    }

    #[tokio::test]
    async fn test_passengers_by_flight() {
        let store = Store::new();
        store.passengers.insert(passenger("pass-a", "flight-1")).await.unwrap();
        store.passengers.insert(passenger("pass-b", "flight-2")).await.unwrap();
        store.passengers.insert(passenger("pass-c", "flight-1")).await.unwrap();

        let ids: Vec<String> = store
            .passengers_by_flight("flight-1")
            .await
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["pass-a", "pass-c"]);
        assert!(store.passengers_by_flight("flight-9").await.is_empty());
    }

    #[tokio::test]
    async fn test_latest_weather() {
        let store = Store::new();
        assert!(store.latest_weather().await.is_none());

        store
            .weather
            .insert(weather("weather-a", "2025-10-18T08:00:00Z", WeatherCondition::Clear))
            .await
            .unwrap();
        store
            .weather
            .insert(weather("weather-b", "2025-10-18T09:00:00Z", WeatherCondition::Foggy))
            .await
            .unwrap();
        store
            .weather
            .insert(weather("weather-c", "2025-10-18T07:00:00Z", WeatherCondition::Rainy))
            .await
            .unwrap();

        let latest = store.latest_weather().await.unwrap();
        assert_eq!(latest.id, "weather-b");
    }

    #[tokio::test]
    async fn test_latest_weather_tie_prefers_first_inserted() {
        let store = Store::new();
        for id in ["weather-first", "weather-second"] {
            store
                .weather
                .insert(weather(id, "2025-10-18T08:00:00Z", WeatherCondition::Cloudy))
                .await
                .unwrap();
        }
        assert_eq!(store.latest_weather().await.unwrap().id, "weather-first");
    }

    #[tokio::test]
    async fn test_concurrent_merges_are_not_lost() {
        let store = std::sync::Arc::new(Store::new());
        store.airlines.insert(airline("airline-1", "One")).await.unwrap();

        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .airlines
                    .merge(
                        "airline-1",
                        AirlinePatch {
                            active_flights: Some(i),
                            ..Default::default()
                        },
                    )
                    .await
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap().is_some());
        }

        assert_eq!(store.airlines.len().await, 1);
        assert_eq!(store.airlines.get("airline-1").await.unwrap().name, "One");
    }
}
