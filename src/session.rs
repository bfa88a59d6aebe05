// Top-level menu loop sequencing one booking at a time

use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::info;

use crate::config::BookingConfig;
use crate::console::{Console, ConsoleError};
use crate::order::{BookingOrder, OrderError};
use crate::payment::get_payment_details;
use crate::receipt::{display_receipt, rule, ReceiptTotals, CONFIRMATION_MESSAGE};
use crate::selection::{get_addon_selections, get_room_selections};
use crate::validation::{validate_date, validate_number};

pub const FAREWELL_MESSAGE: &str = "Thank you for using our Hotel Booking System!";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("Invalid booking: {0}")]
    Order(#[from] OrderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MainMenu,
    Booking,
    Terminated,
}

pub struct Session<R, W> {
    console: Console<R, W>,
    config: BookingConfig,
    state: SessionState,
    completed: Vec<BookingOrder>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(console: Console<R, W>, config: BookingConfig) -> Self {
        Self {
            console,
            config,
            state: SessionState::MainMenu,
            completed: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn completed_bookings(&self) -> &[BookingOrder] {
        &self.completed
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    // Run until the user exits or, by default, until the first booking completes
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.console.say(rule())?;
        self.console.say("     WELCOME TO HOTEL BOOKING SYSTEM")?;
        self.console.say(rule())?;

        while self.state != SessionState::Terminated {
            let next = match self.state {
                SessionState::MainMenu => self.main_menu()?,
                SessionState::Booking => self.booking()?,
                SessionState::Terminated => SessionState::Terminated,
            };
            info!(from = ?self.state, to = ?next, "session transition");
            self.state = next;
        }

        Ok(())
    }

    fn main_menu(&mut self) -> Result<SessionState, SessionError> {
        self.console.say("\n--- MAIN MENU ---")?;
        self.console.say("1. Book Room")?;
        self.console.say("2. Exit")?;

        let choice = match self.console.prompt("Please select an option (1 or 2): ") {
            Ok(choice) => choice,
            Err(ConsoleError::InputClosed) => {
                info!("input closed at the main menu, ending session");
                return Ok(SessionState::Terminated);
            }
            Err(error) => return Err(error.into()),
        };

        match choice.as_str() {
            "1" => Ok(SessionState::Booking),
            "2" => {
                self.console.say(format_args!("\n{}", FAREWELL_MESSAGE))?;
                self.console.say("Goodbye!")?;
                Ok(SessionState::Terminated)
            }
            _ => {
                self.console.say("Invalid choice! Please select 1 or 2.")?;
                Ok(SessionState::MainMenu)
            }
        }
    }

    fn booking(&mut self) -> Result<SessionState, SessionError> {
        let order = self.book()?;

        let totals = ReceiptTotals::compute(&order.selected_rooms, &order.selected_addons);
        info!(
            stay_date = %order.stay_date,
            guests = order.guest_count,
            rooms = order.room_count,
            addons = order.selected_addons.len(),
            grand_total = totals.grand_total,
            card_suffix = order.card_suffix(),
            "booking completed"
        );
        self.completed.push(order);

        if self.config.repeat_after_booking {
            return Ok(SessionState::MainMenu);
        }

        if self.config.pause_before_exit {
            match self.console.prompt("Press Any key to end the program...") {
                Ok(_) | Err(ConsoleError::InputClosed) => {}
                Err(error) => return Err(error.into()),
            }
        }
        self.console.say(FAREWELL_MESSAGE)?;

        Ok(SessionState::Terminated)
    }

    // Walk through one booking: date, guests, rooms, add-ons, payment, receipt
    pub fn book(&mut self) -> Result<BookingOrder, SessionError> {
        let console = &mut self.console;
        console.say("\n--- STARTING BOOKING PROCESS ---")?;

        let stay_date = console.get_valid_input("\nEnter booking date (YYYY-MM-DD): ", validate_date)?;

        let max_guests = self.config.max_guests;
        let guest_count = console.get_valid_input(
            &format!("\nEnter number of guests (1-{}): ", max_guests),
            |text| validate_number(text, 1, max_guests),
        )?;

        let room_count = console.get_valid_input(
            &format!("\nEnter number of rooms needed (1-{}): ", guest_count),
            |text| validate_number(text, 1, guest_count),
        )?;

        let selected_rooms = get_room_selections(console, room_count)?;

        let selected_addons =
            if console.get_yes_no_input("\nWould you like to add any services? (yes/no): ")? {
                get_addon_selections(console)?
            } else {
                Vec::new()
            };

        let card_number = get_payment_details(console)?;

        let order = BookingOrder::new(
            stay_date,
            guest_count,
            room_count,
            selected_rooms,
            selected_addons,
            card_number,
        )?;

        if console.get_yes_no_input("\nWould you like to display the receipt? (yes/no): ")? {
            display_receipt(console.output(), &order).map_err(ConsoleError::from)?;
        } else {
            console.say(format_args!("\n{}", CONFIRMATION_MESSAGE))?;
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::tests::{scripted, transcript};

    struct Outcome {
        state: SessionState,
        bookings: Vec<BookingOrder>,
        output: String,
    }

    fn run_session(lines: &[&str], config: BookingConfig) -> Outcome {
        let mut session = Session::new(scripted(lines), config);
        session.run().unwrap();

        Outcome {
            state: session.state(),
            bookings: session.completed_bookings().to_vec(),
            output: transcript(session.into_console()),
        }
    }

    #[test]
    fn test_end_to_end_single_booking() {
        let outcome = run_session(
            &[
                "1",
                "2999-01-01",
                "2",
                "2",
                "1",
                "2",
                "no",
                "4111111111111111",
                "123",
                "12/99",
                "yes",
                "",
            ],
            BookingConfig::default(),
        );

        assert_eq!(outcome.state, SessionState::Terminated);
        assert_eq!(outcome.bookings.len(), 1);

        let order = &outcome.bookings[0];
        assert_eq!(order.guest_count, 2);
        assert_eq!(order.room_count, 2);
        assert!(order.selected_addons.is_empty());

        assert!(outcome.output.contains("WELCOME TO HOTEL BOOKING SYSTEM"));
        assert!(outcome.output.contains("Room Total: $250"));
        assert!(outcome.output.contains("Add-on Total: $0"));
        assert!(outcome.output.contains("GRAND TOTAL: $250"));
        assert!(outcome.output.contains("Credit Card ending in 1111"));
        assert!(outcome.output.contains("Press Any key to end the program..."));
        assert!(outcome.output.trim_end().ends_with(FAREWELL_MESSAGE));
        assert_eq!(outcome.output.matches("--- MAIN MENU ---").count(), 1);
    }

    #[test]
    fn test_booking_with_addons_and_no_receipt() {
        let outcome = run_session(
            &[
                "1",
                "2999-01-01",
                "3",
                "1",
                "3",
                "y",
                "1",
                "2",
                "6",
                "4111111111111234",
                "123",
                "01/30",
                "n",
                "",
            ],
            BookingConfig::default(),
        );

        let order = &outcome.bookings[0];
        assert_eq!(order.selected_rooms[0].name, "Suite");
        assert_eq!(order.selected_addons.len(), 2);
        assert!(!outcome.output.contains("BOOKING RECEIPT"));
        assert!(outcome.output.contains(CONFIRMATION_MESSAGE));
    }

    #[test]
    fn test_exit_from_menu() {
        let outcome = run_session(&["2"], BookingConfig::default());

        assert_eq!(outcome.state, SessionState::Terminated);
        assert!(outcome.bookings.is_empty());
        assert!(outcome.output.contains(FAREWELL_MESSAGE));
        assert!(outcome.output.contains("Goodbye!"));
    }

    #[test]
    fn test_invalid_menu_choice_redisplays_menu() {
        let outcome = run_session(&["3", "book", "2"], BookingConfig::default());

        assert_eq!(outcome.output.matches("Invalid choice! Please select 1 or 2.").count(), 2);
        assert_eq!(outcome.output.matches("--- MAIN MENU ---").count(), 3);
    }

    #[test]
    fn test_input_closed_at_menu_ends_session() {
        let outcome = run_session(&[], BookingConfig::default());
        assert_eq!(outcome.state, SessionState::Terminated);
        assert!(!outcome.output.contains("Goodbye!"));
    }

    #[test]
    fn test_rejected_inputs_are_reprompted() {
        let outcome = run_session(
            &[
                "1",
                "2000-01-01",
                "01-01-2999",
                "2999-01-01",
                "11",
                "2",
                "3",
                "1",
                "4",
                "maybe",
                "no",
                "4111111111111111",
                "123",
                "12/99",
                "no",
            ],
            BookingConfig::default(),
        );

        assert!(outcome.output.contains("Error: Cannot book for past dates!"));
        assert!(outcome.output.contains("Error: Invalid date format! Please use YYYY-MM-DD format."));
        assert!(outcome.output.contains("Error: Number must be between 1 and 10!"));
        assert!(outcome.output.contains("Error: Number must be between 1 and 2!"));
        assert!(outcome.output.contains("Please enter 'yes' or 'no'"));

        let order = &outcome.bookings[0];
        assert_eq!(order.room_count, 1);
        assert_eq!(order.selected_rooms.len(), 1);
        assert_eq!(order.selected_rooms[0].name, "Presidential Suite");
    }

    #[test]
    fn test_repeat_after_booking_returns_to_menu() {
        let config = BookingConfig {
            repeat_after_booking: true,
            ..BookingConfig::default()
        };
        let booking = [
            "1",
            "2999-01-01",
            "1",
            "1",
            "1",
            "no",
            "4111111111111111",
            "123",
            "12/99",
            "no",
        ];
        let mut lines: Vec<&str> = booking.to_vec();
        lines.extend_from_slice(&booking);
        lines.push("2");

        let outcome = run_session(&lines, config);

        assert_eq!(outcome.bookings.len(), 2);
        assert_eq!(outcome.output.matches("--- MAIN MENU ---").count(), 3);
        assert!(!outcome.output.contains("Press Any key"));
        assert!(outcome.output.contains("Goodbye!"));
    }

    #[test]
    fn test_custom_guest_limit() {
        let config = BookingConfig {
            max_guests: 4,
            pause_before_exit: false,
            ..BookingConfig::default()
        };
        let outcome = run_session(
            &[
                "1",
                "2999-01-01",
                "5",
                "4",
                "4",
                "1",
                "1",
                "1",
                "1",
                "n",
                "4111111111111111",
                "123",
                "12/99",
                "n",
            ],
            config,
        );

        assert!(outcome.output.contains("Enter number of guests (1-4): "));
        assert!(outcome.output.contains("Error: Number must be between 1 and 4!"));
        assert!(!outcome.output.contains("Press Any key"));
        assert_eq!(outcome.bookings[0].selected_rooms.len(), 4);
    }

    #[test]
    fn test_input_closed_mid_booking_is_an_error() {
        let mut session = Session::new(scripted(&["1", "2999-01-01"]), BookingConfig::default());
        let result = session.run();
        assert!(matches!(
            result,
            Err(SessionError::Console(ConsoleError::InputClosed))
        ));
        assert!(session.completed_bookings().is_empty());
    }
}
