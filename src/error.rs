use crate::client::{format_client_list, Client};
use thiserror::Error;

// Failures of reservation operations. A failed call leaves the manager untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReservationError {
    #[error("ReservationError.duplicateId: Reservation with id {id} already exists")]
    DuplicateId { id: u64 },

    // Carries the full requested list, not only the clients already booked
    #[error(
        "ReservationError.duplicateClient: There is already a reservation for a client you want to add from list: {}",
        format_client_list(.clients)
    )]
    DuplicateClient { clients: Vec<Client> },

    #[error("ReservationError.reservationNotFound: Cannot cancel a reservation with id {id} because it does not exist")]
    ReservationNotFound { id: u64 },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid price per client: {0}")]
    InvalidPrice(f64),

    #[error("Hotel name must not be empty")]
    InvalidHotelName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ReservationError::DuplicateId { id: 3 },
        "ReservationError.duplicateId: Reservation with id 3 already exists" ; "duplicate id")]
    #[test_case(ReservationError::ReservationNotFound { id: 104 },
        "ReservationError.reservationNotFound: Cannot cancel a reservation with id 104 because it does not exist" ; "not found")]
    #[test_case(ReservationError::DuplicateClient { clients: vec![Client::new("Krillin", 29, 155)] },
        "ReservationError.duplicateClient: There is already a reservation for a client you want to add from list: [Krillin (age 29, 155 cm)]" ; "duplicate client")]
    fn test_error_messages(error: ReservationError, expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_errors_compare_by_kind_and_data() {
        let krillin = Client::new("Krillin", 29, 155);

        assert_eq!(
            ReservationError::DuplicateClient {
                clients: vec![krillin.clone()]
            },
            ReservationError::DuplicateClient {
                clients: vec![krillin]
            }
        );
        assert_ne!(
            ReservationError::DuplicateId { id: 1 },
            ReservationError::ReservationNotFound { id: 1 }
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ConfigError = parse_error.into();
        assert!(matches!(error, ConfigError::Parse(_)));
        assert!(error.to_string().starts_with("Parse error: "));
    }
}
