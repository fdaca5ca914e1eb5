//! Sample data loaded into the store at startup.
//!
//! The same rows are rebuilt on every start; only the weather reading and the
//! security alert are stamped with the startup time.

use chrono::{SecondsFormat, Utc};

use crate::model::{
    Airline, AlertStatus, Baggage, BaggageStatus, BaggageType, CheckInStatus, Flight,
    FlightStatus, Gate, GateStatus, Maintenance, MaintenancePriority, MaintenanceStatus,
    MaintenanceTarget, Passenger, Runway, RunwayStatus, SecurityAlert, SecurityLevel, Staff,
    StaffRole, StaffStatus, Weather, WeatherCondition,
};
use crate::store::{Collection, Store};

/// Number of gates created by the seed, split across terminals A and B.
const SEED_GATE_COUNT: u32 = 20;

/// Build a store holding the sample data.
pub fn sample_store() -> Store {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);

    Store {
        flights: Collection::from_records(flights()),
        airlines: Collection::from_records(airlines()),
        passengers: Collection::from_records(passengers()),
        gates: Collection::from_records(gates()),
        staff: Collection::from_records(staff()),
        weather: Collection::from_records(vec![weather(&now)]),
        runways: Collection::from_records(runways()),
        baggage: Collection::from_records(vec![baggage()]),
        maintenance: Collection::from_records(vec![maintenance()]),
        security_alerts: Collection::from_records(vec![security_alert(&now)]),
    }
}

fn airlines() -> Vec<Airline> {
    let airline = |id: &str, name: &str, code: &str, country: &str, email: &str, phone: &str| {
        Airline {
            id: id.to_string(),
            name: name.to_string(),
            code: code.to_string(),
            country: country.to_string(),
            logo: None,
            contact_email: email.to_string(),
            contact_phone: phone.to_string(),
            active_flights: 0,
            rating: 0.0,
        }
    };

    vec![
        Airline {
            active_flights: 12,
            rating: 4.5,
            ..airline(
                "airline-1",
                "SkyWings International",
                "SKW",
                "USA",
                "info@skywings.com",
                "+1-555-0001",
            )
        },
        Airline {
            active_flights: 8,
            rating: 4.2,
            ..airline(
                "airline-2",
                "Global Airways",
                "GLB",
                "UK",
                "contact@globalair.co.uk",
                "+44-20-5550002",
            )
        },
        Airline {
            active_flights: 15,
            rating: 4.7,
            ..airline(
                "airline-3",
                "Pacific Express",
                "PCX",
                "Japan",
                "service@pacificexpress.jp",
                "+81-3-5550003",
            )
        },
    ]
}

fn gates() -> Vec<Gate> {
    (1..=SEED_GATE_COUNT)
        .map(|i| {
            let terminal = if i <= SEED_GATE_COUNT / 2 { "A" } else { "B" };
            Gate {
                id: format!("gate-{i}"),
                number: format!("{terminal}{i:02}"),
                terminal: terminal.to_string(),
                status: if i % 3 == 0 {
                    GateStatus::Occupied
                } else {
                    GateStatus::Available
                },
                current_flight_id: None,
                capacity: 200 + (i as i32) * 10,
                facilities: vec![
                    "WiFi".to_string(),
                    "Charging Stations".to_string(),
                    "Restrooms".to_string(),
                ],
                last_maintenance: None,
            }
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn flight(
    id: &str,
    number: &str,
    airline_id: &str,
    route: (&str, &str),
    times: (&str, &str),
    status: FlightStatus,
    gate_id: Option<&str>,
    aircraft: &str,
    seats: (i32, i32),
    terminal: &str,
) -> Flight {
    Flight {
        id: id.to_string(),
        flight_number: number.to_string(),
        airline_id: airline_id.to_string(),
        origin: route.0.to_string(),
        destination: route.1.to_string(),
        departure_time: times.0.to_string(),
        arrival_time: times.1.to_string(),
        status,
        gate_id: gate_id.map(str::to_string),
        aircraft_type: aircraft.to_string(),
        capacity: seats.0,
        booked_seats: seats.1,
        delay_minutes: 0,
        terminal: Some(terminal.to_string()),
    }
}

fn flights() -> Vec<Flight> {
    vec![
        flight(
            "flight-1",
            "SKW101",
            "airline-1",
            ("JFK", "LAX"),
            ("2025-10-18T08:00:00Z", "2025-10-18T11:30:00Z"),
            FlightStatus::Scheduled,
            Some("gate-1"),
            "Boeing 737-800",
            (189, 156),
            "A",
        ),
        flight(
            "flight-2",
            "GLB202",
            "airline-2",
            ("LHR", "JFK"),
            ("2025-10-18T10:00:00Z", "2025-10-18T13:00:00Z"),
            FlightStatus::Boarding,
            Some("gate-3"),
            "Airbus A380",
            (525, 489),
            "A",
        ),
        Flight {
            delay_minutes: 45,
            ..flight(
                "flight-3",
                "PCX303",
                "airline-3",
                ("NRT", "SFO"),
                ("2025-10-18T14:00:00Z", "2025-10-18T08:00:00Z"),
                FlightStatus::Delayed,
                Some("gate-6"),
                "Boeing 787-9",
                (290, 267),
                "A",
            )
        },
        flight(
            "flight-4",
            "SKW404",
            "airline-1",
            ("ORD", "MIA"),
            ("2025-10-18T09:30:00Z", "2025-10-18T13:45:00Z"),
            FlightStatus::InFlight,
            None,
            "Boeing 737-900",
            (220, 198),
            "B",
        ),
    ]
}

fn passengers() -> Vec<Passenger> {
    vec![
        Passenger {
            id: "pass-1".to_string(),
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            passport_number: "US123456789".to_string(),
            nationality: "USA".to_string(),
            date_of_birth: "1985-05-15".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "+1-555-1001".to_string(),
            flight_id: "flight-1".to_string(),
            seat_number: Some("12A".to_string()),
            check_in_status: CheckInStatus::CheckedIn,
            boarding_pass: None,
            baggage_count: 2,
            special_requirements: None,
        },
        Passenger {
            id: "pass-2".to_string(),
            first_name: "Emma".to_string(),
            last_name: "Johnson".to_string(),
            passport_number: "UK987654321".to_string(),
            nationality: "UK".to_string(),
            date_of_birth: "1990-08-22".to_string(),
            email: "emma.j@email.co.uk".to_string(),
            phone: "+44-20-1002".to_string(),
            flight_id: "flight-2".to_string(),
            seat_number: Some("8C".to_string()),
            check_in_status: CheckInStatus::Boarded,
            boarding_pass: None,
            baggage_count: 1,
            special_requirements: None,
        },
    ]
}

fn staff() -> Vec<Staff> {
    vec![
        Staff {
            id: "staff-1".to_string(),
            first_name: "Michael".to_string(),
            last_name: "Brown".to_string(),
            role: StaffRole::GateAgent,
            email: "m.brown@airport.com".to_string(),
            phone: "+1-555-2001".to_string(),
            employee_id: "EMP001".to_string(),
            shift: "Morning (06:00-14:00)".to_string(),
            assigned_gate: Some("gate-1".to_string()),
            status: StaffStatus::OnDuty,
            hire_date: "2020-01-15".to_string(),
            certifications: vec!["Customer Service".to_string(), "Safety".to_string()],
        },
        Staff {
            id: "staff-2".to_string(),
            first_name: "Sarah".to_string(),
            last_name: "Davis".to_string(),
            role: StaffRole::AirTrafficController,
            email: "s.davis@airport.com".to_string(),
            phone: "+1-555-2002".to_string(),
            employee_id: "EMP002".to_string(),
            shift: "Day (08:00-16:00)".to_string(),
            assigned_gate: None,
            status: StaffStatus::OnDuty,
            hire_date: "2018-06-20".to_string(),
            certifications: vec![
                "ATC License".to_string(),
                "Radar Operations".to_string(),
                "Emergency Procedures".to_string(),
            ],
        },
    ]
}

fn weather(timestamp: &str) -> Weather {
    Weather {
        id: "weather-1".to_string(),
        timestamp: timestamp.to_string(),
        temperature: 22.5,
        condition: WeatherCondition::PartlyCloudy,
        wind_speed: 15.0,
        wind_direction: "NW".to_string(),
        visibility: 10.0,
        pressure: 1013.25,
        humidity: 65,
        precipitation: 0.0,
        cloud_coverage: 40,
    }
}

fn runways() -> Vec<Runway> {
    let runway = |id: &str, name: &str, length: i32, surface: &str| Runway {
        id: id.to_string(),
        name: name.to_string(),
        length,
        width: 45,
        surface: surface.to_string(),
        status: RunwayStatus::Operational,
        current_operation: None,
        maintenance_schedule: None,
        lighting_system: true,
        ils: true,
    };

    vec![
        runway("runway-1", "09L/27R", 3000, "Asphalt"),
        runway("runway-2", "09R/27L", 2800, "Concrete"),
    ]
}

fn baggage() -> Baggage {
    Baggage {
        id: "bag-1".to_string(),
        tag_number: "SKW101-001".to_string(),
        passenger_id: "pass-1".to_string(),
        flight_id: "flight-1".to_string(),
        weight: 23.5,
        status: BaggageStatus::CheckedIn,
        location: "Check-in Counter A".to_string(),
        baggage_type: BaggageType::Checked,
        special_handling: false,
        notes: None,
    }
}

fn maintenance() -> Maintenance {
    Maintenance {
        id: "maint-1".to_string(),
        target_type: MaintenanceTarget::Gate,
        target_id: "gate-5".to_string(),
        scheduled_date: "2025-10-19T02:00:00Z".to_string(),
        completed_date: None,
        status: MaintenanceStatus::Scheduled,
        description: "Regular cleaning and inspection".to_string(),
        technician: "Tech Team A".to_string(),
        priority: MaintenancePriority::Medium,
        estimated_duration: 120,
        actual_duration: None,
        cost: None,
    }
}

fn security_alert(timestamp: &str) -> SecurityAlert {
    SecurityAlert {
        id: "alert-1".to_string(),
        timestamp: timestamp.to_string(),
        level: SecurityLevel::Low,
        location: "Terminal B, Gate 15".to_string(),
        description: "Unattended baggage reported".to_string(),
        status: AlertStatus::Investigating,
        reported_by: "Security Officer #42".to_string(),
        resolved_by: None,
        resolution: None,
    }
}
