// Session configuration

#[derive(Debug, Clone)]
pub struct BookingConfig {
    // Upper bound of the guest count prompt
    pub max_guests: u32,
    // Return to the main menu after a booking instead of ending the session
    pub repeat_after_booking: bool,
    // Wait for one more line before the farewell once a booking completes
    pub pause_before_exit: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            max_guests: 10,
            repeat_after_booking: false,
            pause_before_exit: true,
        }
    }
}
