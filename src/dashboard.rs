//! Dashboard aggregates.
//!
//! The numbers are recomputed from the store on every call; nothing is cached.
//! Collections are read one after another, so the result is not a consistent
//! snapshot across collections while writes are in flight.

use crate::model::{AlertStatus, DashboardStats, FlightStatus, GateStatus, StaffStatus};
use crate::store::Store;

/// Reported when there is no weather reading at all.
pub const UNKNOWN_WEATHER: &str = "UNKNOWN";

/// Compute the dashboard counters from the current store contents.
pub async fn compute_stats(store: &Store) -> DashboardStats {
    let total_flights = store.flights.len().await;
    let active_flights = store.flights.count(|f| f.status.is_active()).await;
    let delayed_flights = store
        .flights
        .count(|f| f.status == FlightStatus::Delayed)
        .await;

    let total_passengers = store.passengers.len().await;
    let available_gates = store
        .gates
        .count(|g| g.status == GateStatus::Available)
        .await;
    let staff_on_duty = store
        .staff
        .count(|s| s.status == StaffStatus::OnDuty)
        .await;
    let security_alerts = store
        .security_alerts
        .count(|a| a.status == AlertStatus::Active)
        .await;

    let weather_condition = store
        .latest_weather()
        .await
        .map(|reading| reading.condition.name().to_string())
        .unwrap_or_else(|| UNKNOWN_WEATHER.to_string());

    DashboardStats {
        total_flights,
        active_flights,
        delayed_flights,
        total_passengers,
        available_gates,
        staff_on_duty,
        weather_condition,
        security_alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SecurityAlert, SecurityLevel};

    #[tokio::test]
    async fn test_seeded_stats() {
        let store = Store::seeded();
        let stats = compute_stats(&store).await;

        assert_eq!(stats.total_flights, 4);
        // flight-1 scheduled, flight-2 boarding, flight-4 in flight
        assert_eq!(stats.active_flights, 3);
        assert_eq!(stats.delayed_flights, 1);
        assert_eq!(stats.total_passengers, 2);
        assert_eq!(stats.available_gates, 14);
        assert_eq!(stats.staff_on_duty, 2);
        assert_eq!(stats.weather_condition, "PARTLY_CLOUDY");
        // the seeded alert is under investigation, not active
        assert_eq!(stats.security_alerts, 0);
    }

    #[tokio::test]
    async fn test_empty_store_stats() {
        let stats = compute_stats(&Store::new()).await;

        assert_eq!(stats.total_flights, 0);
        assert_eq!(stats.active_flights, 0);
        assert_eq!(stats.total_passengers, 0);
        assert_eq!(stats.weather_condition, UNKNOWN_WEATHER);
    }

    #[tokio::test]
    async fn test_stats_follow_mutations() {
        let store = Store::seeded();
        store
            .security_alerts
            .insert(SecurityAlert {
                id: "alert-2".to_string(),
                timestamp: "2025-10-18T12:00:00Z".to_string(),
                level: SecurityLevel::High,
                location: "Terminal A".to_string(),
                description: "Perimeter breach".to_string(),
                status: AlertStatus::Active,
                reported_by: "CCTV".to_string(),
                resolved_by: None,
                resolution: None,
            })
            .await
            .unwrap();
        assert!(store.flights.remove("flight-3").await);

        let stats = compute_stats(&store).await;
        assert_eq!(stats.security_alerts, 1);
        assert_eq!(stats.total_flights, 3);
        assert_eq!(stats.delayed_flights, 0);
    }
}
