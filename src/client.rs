use std::fmt;

/// A person who can hold a reservation.
///
/// Clients carry no identifier: two clients with the same name, age and height
/// are considered the same person when checking for double bookings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Client {
    name: String,
    age: u32,
    height_in_cm: u32,
}

impl Client {
    pub fn new(name: impl Into<String>, age: u32, height_in_cm: u32) -> Self {
        Self {
            name: name.into(),
            age,
            height_in_cm,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn height_in_cm(&self) -> u32 {
        self.height_in_cm
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (age {}, {} cm)",
            self.name, self.age, self.height_in_cm
        )
    }
}

// Renders a client list as "[a, b, c]" for error messages
pub(crate) fn format_client_list(clients: &[Client]) -> String {
    let names: Vec<String> = clients.iter().map(|c| c.to_string()).collect();
    format!("[{}]", names.join(", "))
}
