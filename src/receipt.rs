// Receipt totals and formatting

use std::io::{self, Write};

use crate::catalog::{Addon, RoomType};
use crate::order::BookingOrder;

const RULE_WIDTH: usize = 50;

pub const CONFIRMATION_MESSAGE: &str = "Booking confirmed! Thank you for choosing our hotel!";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptTotals {
    pub room_total: u64,
    pub addon_total: u64,
    pub grand_total: u64,
}

impl ReceiptTotals {
    pub fn compute(rooms: &[RoomType], addons: &[Addon]) -> Self {
        let room_total: u64 = rooms.iter().map(|room| u64::from(room.nightly_price)).sum();
        let addon_total: u64 = addons.iter().map(|addon| u64::from(addon.price)).sum();

        Self {
            room_total,
            addon_total,
            grand_total: room_total + addon_total,
        }
    }
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn render_receipt(order: &BookingOrder) -> String {
    let totals = ReceiptTotals::compute(&order.selected_rooms, &order.selected_addons);
    let mut text = String::new();

    // Writing into a String cannot fail
    let _ = write_receipt(&mut text, order, &totals);
    text
}

fn write_receipt(
    text: &mut String,
    order: &BookingOrder,
    totals: &ReceiptTotals,
) -> std::fmt::Result {
    use std::fmt::Write as _;

    writeln!(text, "\n{}", rule())?;
    writeln!(text, "               BOOKING RECEIPT")?;
    writeln!(text, "{}", rule())?;
    writeln!(text, "Booking Date: {}", order.stay_date)?;
    writeln!(text, "Number of Guests: {}", order.guest_count)?;
    writeln!(text, "Number of Rooms: {}", order.room_count)?;

    writeln!(text, "\n--- ROOM DETAILS ---")?;
    for (index, room) in order.selected_rooms.iter().enumerate() {
        writeln!(text, "Room {}: {}", index + 1, room)?;
    }

    if !order.selected_addons.is_empty() {
        writeln!(text, "\n--- ADD-ON SERVICES ---")?;
        for addon in &order.selected_addons {
            writeln!(text, "- {}", addon)?;
        }
    }

    writeln!(text, "\n--- COST BREAKDOWN ---")?;
    writeln!(text, "Room Total: ${}", totals.room_total)?;
    writeln!(text, "Add-on Total: ${}", totals.addon_total)?;
    writeln!(text, "GRAND TOTAL: ${}", totals.grand_total)?;
    writeln!(
        text,
        "\nPayment Method: Credit Card ending in {}",
        order.card_suffix()
    )?;
    writeln!(text, "\n{}", CONFIRMATION_MESSAGE)?;
    write!(text, "{}", rule())
}

pub fn display_receipt<W: Write>(out: &mut W, order: &BookingOrder) -> io::Result<()> {
    writeln!(out, "{}", render_receipt(order))
}
