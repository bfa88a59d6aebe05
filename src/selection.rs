// Room and add-on selection flows

use std::io::{BufRead, Write};
use tracing::debug;

use crate::catalog::{
    addon, display_addons, display_room_types, max_addon_id, max_room_type_id, room_type, Addon,
    RoomType,
};
use crate::console::{Console, ConsoleError};
use crate::validation::{validate_number, ValidationError};

// Entered at the add-on prompt to finish the selection
pub const CONFIRM_ADDONS: &str = "6";

// Collect exactly `count` room types, one prompt per room
pub fn get_room_selections<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    count: u32,
) -> Result<Vec<RoomType>, ConsoleError> {
    let max_id = max_room_type_id();
    let mut selected = Vec::with_capacity(count as usize);

    for room_number in 1..=count {
        display_room_types(console.output())?;
        let room = console.get_valid_input(
            &format!("\nSelect room type for Room {} (1-{}): ", room_number, max_id),
            |text| select_room_type(text, max_id),
        )?;

        console.say(format_args!("Room {}: {} selected!", room_number, room.name))?;
        selected.push(room);
    }

    Ok(selected)
}

fn select_room_type(text: &str, max_id: u32) -> Result<RoomType, ValidationError> {
    let id = validate_number(text, 1, max_id)?;
    room_type(id).ok_or(ValidationError::OutOfRange { min: 1, max: max_id })
}

// Collect add-ons until the confirm option is entered, the same add-on may be picked more than once
pub fn get_addon_selections<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<Vec<Addon>, ConsoleError> {
    let max_id = max_addon_id();
    let mut selected = Vec::new();

    loop {
        display_addons(console.output())?;
        console.say(format_args!("{}. Confirm add-on selection", CONFIRM_ADDONS))?;

        let input = console.prompt(&format!("\nSelect add-on (1-{}): ", CONFIRM_ADDONS))?;
        if input == CONFIRM_ADDONS {
            break;
        }

        match validate_number(&input, 1, max_id).map(addon) {
            Ok(Some(item)) => {
                console.say(format_args!("Added: {}", item))?;
                selected.push(item);
            }
            Ok(None) => debug!(input = %input, "add-on id missing from catalog"),
            Err(error) => console.report(&error)?,
        }
    }

    debug!(count = selected.len(), "add-on selection confirmed");
    Ok(selected)
}
