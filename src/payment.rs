// Mock payment capture, format checks only, nothing is charged

use std::io::{BufRead, Write};
use tracing::debug;

use crate::console::{Console, ConsoleError};
use crate::validation::validate_payment;

// Prompt for card number, CVV and expiry until all three pass.
// A failure in any field restarts collection of all three.
pub fn get_payment_details<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<String, ConsoleError> {
    loop {
        console.say("\n--- PAYMENT DETAILS ---")?;
        let card_number = console.prompt("Enter credit card number (16 digits): ")?;
        let cvv = console.prompt("Enter CVV (3 digits): ")?;
        let expiry = console.prompt("Enter expiry date (MM/YY): ")?;

        match validate_payment(&card_number, &cvv, &expiry) {
            Ok(()) => {
                console.say("Payment details validated successfully!")?;
                return Ok(card_number);
            }
            Err(error) => {
                debug!("payment details rejected, restarting collection");
                console.report(&error)?;
            }
        }
    }
}
