// Static room and add-on catalogs

use std::fmt;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomType {
    pub id: u32,
    pub name: &'static str,
    pub nightly_price: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Addon {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
}

// Ordered by id, ids are contiguous from 1
pub const ROOM_TYPES: [RoomType; 4] = [
    RoomType {
        id: 1,
        name: "Standard Room",
        nightly_price: 100,
    },
    RoomType {
        id: 2,
        name: "Deluxe Room",
        nightly_price: 150,
    },
    RoomType {
        id: 3,
        name: "Suite",
        nightly_price: 250,
    },
    RoomType {
        id: 4,
        name: "Presidential Suite",
        nightly_price: 500,
    },
];

pub const ADDONS: [Addon; 5] = [
    Addon {
        id: 1,
        name: "Breakfast",
        price: 25,
    },
    Addon {
        id: 2,
        name: "Airport Transfer",
        price: 50,
    },
    Addon {
        id: 3,
        name: "Spa Package",
        price: 100,
    },
    Addon {
        id: 4,
        name: "City Tour",
        price: 75,
    },
    Addon {
        id: 5,
        name: "Late Checkout",
        price: 30,
    },
];

pub fn room_types() -> &'static [RoomType] {
    &ROOM_TYPES
}

pub fn addon_catalog() -> &'static [Addon] {
    &ADDONS
}

pub fn room_type(id: u32) -> Option<RoomType> {
    ROOM_TYPES.iter().find(|room| room.id == id).copied()
}

pub fn addon(id: u32) -> Option<Addon> {
    ADDONS.iter().find(|addon| addon.id == id).copied()
}

// Highest valid id, used as the upper bound of the selection prompts
pub fn max_room_type_id() -> u32 {
    ROOM_TYPES.iter().map(|room| room.id).max().unwrap_or(0)
}

pub fn max_addon_id() -> u32 {
    ADDONS.iter().map(|addon| addon.id).max().unwrap_or(0)
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}/night", self.name, self.nightly_price)
    }
}

impl fmt::Display for Addon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price)
    }
}

pub fn display_room_types<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Available Room Types ---")?;
    for room in room_types() {
        writeln!(out, "{}. {}", room.id, room)?;
    }
    Ok(())
}

pub fn display_addons<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n--- Available Add-ons ---")?;
    for addon in addon_catalog() {
        writeln!(out, "{}. {}", addon.id, addon)?;
    }
    Ok(())
}
