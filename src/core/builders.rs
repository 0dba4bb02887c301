use super::{Status, Ticket, TicketId, TicketNumber};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    number: Option<TicketNumber>,
    name: Option<String>,
    description: Option<String>,
    category: Option<String>,
    assigned_to: Option<String>,
    status: Option<Status>,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the tracking number
    #[must_use]
    pub const fn number(mut self, number: TicketNumber) -> Self {
        self.number = Some(number);
        self
    }

    /// Set the name
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category (stored as given; normalize before calling)
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the assigned admin
    #[must_use]
    pub fn assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            number: self.number.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            assigned_to: self.assigned_to.unwrap_or_default(),
            status: self.status.unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let ticket = TicketBuilder::new()
            .id(TicketId::new(1))
            .number(TicketNumber::new(1234))
            .name("Broken laptop")
            .description("Screen flickers on boot")
            .category("IT")
            .assigned_to("Alice")
            .build();

        assert_eq!(ticket.id, TicketId::new(1));
        assert_eq!(ticket.number, TicketNumber::new(1234));
        assert_eq!(ticket.name, "Broken laptop");
        assert_eq!(ticket.category, "IT");
        assert_eq!(ticket.assigned_to, "Alice");
        assert_eq!(ticket.status, Status::Open);
    }
}
