//! Handler for the `menu` command
//!
//! The interactive console intake: a looping menu with three actions
//! (create a ticket, list all tickets, exit). Invalid input aborts the
//! single attempt with a message and returns to the menu; it never kills
//! the process.

use crate::cli::output::OutputFormatter;
use crate::core::{Ticket, TicketDraft};
use crate::error::{Result, TicketDeskError};
use crate::store::{MemoryStore, TicketRepository};
use chrono::{DateTime, Local, Utc};
use dialoguer::{Input, Select, theme::ColorfulTheme};

const MENU_CREATE: usize = 0;
const MENU_LIST: usize = 1;

/// Run the interactive menu against the given store
///
/// # Errors
///
/// Returns an error only when the terminal itself fails; ticket
/// validation problems are printed and the menu continues.
pub fn handle_menu_command(store: &MemoryStore, formatter: &OutputFormatter) -> Result<()> {
    let theme = ColorfulTheme::default();

    loop {
        let actions = vec!["Create ticket", "List tickets", "Exit"];
        let selection = Select::with_theme(&theme)
            .with_prompt("Ticket Management System")
            .items(&actions)
            .default(0)
            .interact()?;

        match selection {
            MENU_CREATE => create_ticket(store, &theme, formatter)?,
            MENU_LIST => list_tickets(store, formatter)?,
            _ => {
                formatter.info("Exiting system...");
                return Ok(());
            },
        }
    }
}

/// Prompt for the intake fields and create one ticket
fn create_ticket(
    store: &MemoryStore,
    theme: &ColorfulTheme,
    formatter: &OutputFormatter,
) -> Result<()> {
    let name: String = Input::with_theme(theme)
        .with_prompt("Ticket name")
        .allow_empty(true)
        .interact_text()?;

    let description: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    let categories = store.directory().categories().join("/");
    let category: String = Input::with_theme(theme)
        .with_prompt(format!("Category ({categories})"))
        .allow_empty(true)
        .interact_text()?;

    match store.create(TicketDraft::new(name, description, category)) {
        Ok(ticket) => {
            if formatter.is_json() {
                formatter.json(&ticket)?;
            } else {
                formatter.success("\nTicket Created Successfully!");
                formatter.info(&format!("Ticket ID: {}", ticket.id));
                formatter.info(&format!("Ticket Number: {}", ticket.number));
                formatter.info(&format!("Assigned To: {}", ticket.assigned_to));
                formatter.info(&format!("Created At: {}", format_created_at(ticket.created_at)));
            }
            Ok(())
        },
        // Bad input aborts this attempt only; the menu loop continues.
        Err(err @ (TicketDeskError::EmptyField { .. }
        | TicketDeskError::InvalidCategory { .. }
        | TicketDeskError::NumbersExhausted { .. })) => {
            formatter.error(&err.user_message());
            Ok(())
        },
        Err(err) => Err(err),
    }
}

/// Print every stored ticket, oldest first
fn list_tickets(store: &MemoryStore, formatter: &OutputFormatter) -> Result<()> {
    let tickets = store.all()?;

    if formatter.is_json() {
        return formatter.json(&tickets);
    }

    if tickets.is_empty() {
        formatter.info("No tickets found.");
        return Ok(());
    }

    for ticket in &tickets {
        formatter.info(&format_ticket_block(ticket));
    }
    Ok(())
}

/// One printable block per ticket, all fields
fn format_ticket_block(ticket: &Ticket) -> String {
    format!(
        "\n-------------------------------\n\
         Ticket ID     : {}\n\
         Ticket Number : {}\n\
         Name          : {}\n\
         Description   : {}\n\
         Category      : {}\n\
         Assigned To   : {}\n\
         Status        : {}\n\
         Created At    : {}",
        ticket.id,
        ticket.number,
        ticket.name,
        ticket.description,
        ticket.category,
        ticket.assigned_to,
        ticket.status,
        format_created_at(ticket.created_at),
    )
}

/// Creation time in the operator's local timezone
fn format_created_at(created_at: DateTime<Utc>) -> String {
    created_at
        .with_timezone(&Local)
        .format("%d-%m-%Y %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Status, TicketBuilder, TicketId, TicketNumber};
    use chrono::TimeZone;

    #[test]
    fn test_ticket_block_has_all_fields() {
        let ticket = TicketBuilder::new()
            .id(TicketId::new(3))
            .number(TicketNumber::new(4242))
            .name("Printer jam")
            .description("Floor 2")
            .category("IT")
            .assigned_to("Alice")
            .status(Status::Open)
            .build();

        let block = format_ticket_block(&ticket);
        assert!(block.contains("Ticket ID     : 3"));
        assert!(block.contains("Ticket Number : 4242"));
        assert!(block.contains("Name          : Printer jam"));
        assert!(block.contains("Category      : IT"));
        assert!(block.contains("Assigned To   : Alice"));
        assert!(block.contains("Status        : Open"));
    }

    #[test]
    fn test_created_at_format() {
        let created_at = Utc.with_ymd_and_hms(2026, 8, 6, 12, 30, 45).unwrap();
        let formatted = format_created_at(created_at);
        // Day-month-year with time, e.g. "06-08-2026 12:30:45" (local offset applies).
        assert_eq!(formatted.len(), "06-08-2026 12:30:45".len());
        assert_eq!(&formatted[2..3], "-");
        assert_eq!(&formatted[10..11], " ");
    }
}
