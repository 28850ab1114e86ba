// Demo: books, rejects and cancels a few reservations and logs the outcome.
// Usage: hotel_reservations [config.json]

use anyhow::Context;
use hotel_reservations::{
    Client, HotelReservationManager, ManagerConfig, ReservationBook, ReservationError,
};
use tracing::{error, info, Level};

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    if let Err(error) = run() {
        error!("Application error: {:#}", error);
        std::process::exit(1);
    }
}

fn load_config() -> anyhow::Result<ManagerConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path))?;
            ManagerConfig::from_json(&content)
                .with_context(|| format!("parsing config file {}", path))
        }
        None => Ok(ManagerConfig::default()),
    }
}

fn run() -> anyhow::Result<()> {
    let config = load_config()?;
    let manager = HotelReservationManager::from_config(config)?;
    info!(
        "Managing reservations for {} at {} per client and night",
        manager.hotel_name(),
        manager.price_per_client()
    );

    let goku = Client::new("Goku", 28, 175);
    let krillin = Client::new("Krillin", 29, 155);
    let piccolo = Client::new("Piccolo", 10, 190);

    let family = manager.add_reservation(vec![goku, krillin.clone()], 3, true)?;
    info!("Reservation {} costs {}", family.id(), family.price());
    manager.add_reservation(vec![piccolo], 1, false)?;

    match manager.add_reservation(vec![krillin], 5, true) {
        Err(ReservationError::DuplicateClient { clients }) => {
            info!("Second booking refused for {} client(s)", clients.len())
        }
        other => anyhow::bail!("expected a duplicate client error, got {:?}", other),
    }

    manager.cancel_reservation(family.id())?;
    if let Err(error) = manager.cancel_reservation(family.id()) {
        info!("{}", error);
    }

    for reservation in manager.reservations() {
        info!(
            "Active reservation {}: {} client(s), {} day(s), price {}",
            reservation.id(),
            reservation.clients().len(),
            reservation.duration_in_days(),
            reservation.price()
        );
    }

    Ok(())
}
