// Interactive hotel booking console

pub mod catalog;
pub mod config;
pub mod console;
pub mod order;
pub mod payment;
pub mod receipt;
pub mod selection;
pub mod session;
pub mod validation;

// Re-export key types for convenience
pub use catalog::{addon_catalog, room_types, Addon, RoomType, ADDONS, ROOM_TYPES};
pub use config::BookingConfig;
pub use console::{Console, ConsoleError};
pub use order::{card_suffix, BookingOrder, OrderError};
pub use payment::get_payment_details;
pub use receipt::{display_receipt, render_receipt, ReceiptTotals};
pub use selection::{get_addon_selections, get_room_selections};
pub use session::{Session, SessionError, SessionState};
pub use validation::{
    validate_date, validate_date_on, validate_number, validate_payment, ValidationError,
};
