// In-memory hotel reservation tracker

pub mod client;
pub mod config;
pub mod error;
pub mod id_counter;
pub mod manager;
pub mod reservation;

// Re-export key types for convenience
pub use client::Client;
pub use config::ManagerConfig;
pub use error::{ConfigError, ReservationError};
pub use id_counter::ReservationIdCounter;
pub use manager::{HotelReservationManager, ReservationBook};
pub use reservation::Reservation;
