// Hotel reservation manager
// Keeps the active reservations of one hotel and prices new ones

use crate::client::Client;
use crate::config::ManagerConfig;
use crate::error::{ConfigError, ReservationError};
use crate::id_counter::ReservationIdCounter;
use crate::reservation::Reservation;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

// Price multiplier applied when breakfast is included
pub const BREAKFAST_SURCHARGE: f64 = 1.25;

// Reservation book trait: the operations a caller can run against a hotel
pub trait ReservationBook: Send + Sync + 'static {
    // Snapshot of the active reservations in insertion order
    fn reservations(&self) -> Vec<Reservation>;

    // Books all clients together for the given stay.
    // Rejected in full if any client already holds an active reservation.
    fn add_reservation(
        &self,
        clients: Vec<Client>,
        duration_in_days: u32,
        breakfast_included: bool,
    ) -> Result<Reservation, ReservationError>;

    // Removes the active reservation with the given id
    fn cancel_reservation(&self, id: u64) -> Result<(), ReservationError>;
}

pub struct HotelReservationManager {
    reservations: Mutex<Vec<Reservation>>,
    hotel_name: String,
    price_per_client: f64,
    id_counter: ReservationIdCounter,
}

impl Default for HotelReservationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HotelReservationManager {
    /// Manager for the default hotel with its own id counter.
    pub fn new() -> Self {
        let config = ManagerConfig::default();
        Self::with_hotel(config.hotel_name, config.price_per_client)
    }

    /// Manager for a custom hotel and nightly rate with its own id counter.
    pub fn with_hotel(hotel_name: impl Into<String>, price_per_client: f64) -> Self {
        Self {
            reservations: Mutex::new(Vec::new()),
            hotel_name: hotel_name.into(),
            price_per_client,
            id_counter: ReservationIdCounter::new(),
        }
    }

    /// Validates `config` and builds a manager with its own id counter.
    pub fn from_config(config: ManagerConfig) -> Result<Self, ConfigError> {
        Self::with_counter(config, ReservationIdCounter::new())
    }

    /// Validates `config` and builds a manager drawing ids from `id_counter`.
    ///
    /// Managers built from clones of the same counter share one id sequence:
    /// an id issued by one of them is never issued by another.
    pub fn with_counter(
        config: ManagerConfig,
        id_counter: ReservationIdCounter,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            reservations: Mutex::new(Vec::new()),
            hotel_name: config.hotel_name,
            price_per_client: config.price_per_client,
            id_counter,
        })
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    pub fn price_per_client(&self) -> f64 {
        self.price_per_client
    }

    pub fn id_counter(&self) -> &ReservationIdCounter {
        &self.id_counter
    }

    pub fn len(&self) -> usize {
        self.reservations.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.lock().is_empty()
    }

    pub fn reservation_ids(&self) -> Vec<u64> {
        self.reservations.lock().iter().map(|r| r.id()).collect()
    }

    // Every client that currently holds an active reservation
    pub fn booked_clients(&self) -> Vec<Client> {
        self.reservations
            .lock()
            .iter()
            .flat_map(|r| r.clients().iter().cloned())
            .collect()
    }

    /// Price of a stay: clients × nightly rate × days, plus the breakfast surcharge.
    pub fn calculate_price(
        &self,
        total_clients: usize,
        days: u32,
        breakfast_included: bool,
    ) -> f64 {
        let coefficient = if breakfast_included {
            BREAKFAST_SURCHARGE
        } else {
            1.0
        };
        total_clients as f64 * self.price_per_client * f64::from(days) * coefficient
    }
}

// Checks a candidate id and client list against the active reservations
fn check_availability(
    active: &[Reservation],
    id: u64,
    clients: &[Client],
) -> Result<(), ReservationError> {
    if active.iter().any(|r| r.id() == id) {
        return Err(ReservationError::DuplicateId { id });
    }

    if active
        .iter()
        .any(|r| clients.iter().any(|client| r.has_client(client)))
    {
        return Err(ReservationError::DuplicateClient {
            clients: clients.to_vec(),
        });
    }

    Ok(())
}

impl ReservationBook for HotelReservationManager {
    fn reservations(&self) -> Vec<Reservation> {
        self.reservations.lock().clone()
    }

    fn add_reservation(
        &self,
        clients: Vec<Client>,
        duration_in_days: u32,
        breakfast_included: bool,
    ) -> Result<Reservation, ReservationError> {
        // Counter lock is taken before the list lock and held until the id is committed
        let result: Result<Reservation, ReservationError> = self.id_counter.issue_with(|id| {
            let mut reservations = self.reservations.lock();
            check_availability(&reservations, id, &clients)?;

            let price = self.calculate_price(clients.len(), duration_in_days, breakfast_included);
            debug!(
                "Pricing reservation {}: {} clients, {} days, breakfast: {} -> {}",
                id,
                clients.len(),
                duration_in_days,
                breakfast_included,
                price
            );

            let reservation = Reservation::new(
                id,
                self.hotel_name.clone(),
                clients,
                duration_in_days,
                price,
                breakfast_included,
            );
            reservations.push(reservation.clone());
            Ok(reservation)
        });

        match &result {
            Ok(reservation) => info!("Added reservation with id {}", reservation.id()),
            Err(error) => warn!("Rejected reservation at {}: {}", self.hotel_name, error),
        }
        result
    }

    fn cancel_reservation(&self, id: u64) -> Result<(), ReservationError> {
        let mut reservations = self.reservations.lock();
        let Some(index) = reservations.iter().position(|r| r.id() == id) else {
            let error = ReservationError::ReservationNotFound { id };
            warn!("{}", error);
            return Err(error);
        };

        reservations.remove(index);
        info!("Cancelled reservation with id {}", id);
        Ok(())
    }
}
