use crate::client::Client;

// A booked stay. Built only by the manager and never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: u64,
    hotel_name: String,
    clients: Vec<Client>,
    duration_in_days: u32,
    price: f64,
    breakfast_included: bool,
}

impl Reservation {
    pub(crate) fn new(
        id: u64,
        hotel_name: String,
        clients: Vec<Client>,
        duration_in_days: u32,
        price: f64,
        breakfast_included: bool,
    ) -> Self {
        Self {
            id,
            hotel_name,
            clients,
            duration_in_days,
            price,
            breakfast_included,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn hotel_name(&self) -> &str {
        &self.hotel_name
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn duration_in_days(&self) -> u32 {
        self.duration_in_days
    }

    /// Total price, fixed when the reservation was created.
    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn breakfast_included(&self) -> bool {
        self.breakfast_included
    }

    pub(crate) fn has_client(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }
}
