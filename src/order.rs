// The in-memory order built during one booking, never persisted

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::{Addon, RoomType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("At least one guest is required")]
    NoGuests,

    #[error("Room count {rooms} must be between 1 and the guest count {guests}")]
    InvalidRoomCount { rooms: u32, guests: u32 },

    #[error("Expected {expected} room selections, got {actual}")]
    RoomSelectionMismatch { expected: u32, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOrder {
    pub stay_date: NaiveDate,
    pub guest_count: u32,
    pub room_count: u32,
    pub selected_rooms: Vec<RoomType>,
    pub selected_addons: Vec<Addon>,
    pub card_number: String,
}

impl BookingOrder {
    pub fn new(
        stay_date: NaiveDate,
        guest_count: u32,
        room_count: u32,
        selected_rooms: Vec<RoomType>,
        selected_addons: Vec<Addon>,
        card_number: String,
    ) -> Result<Self, OrderError> {
        if guest_count == 0 {
            return Err(OrderError::NoGuests);
        }
        if room_count == 0 || room_count > guest_count {
            return Err(OrderError::InvalidRoomCount {
                rooms: room_count,
                guests: guest_count,
            });
        }
        if selected_rooms.len() != room_count as usize {
            return Err(OrderError::RoomSelectionMismatch {
                expected: room_count,
                actual: selected_rooms.len(),
            });
        }

        Ok(Self {
            stay_date,
            guest_count,
            room_count,
            selected_rooms,
            selected_addons,
            card_number,
        })
    }

    pub fn card_suffix(&self) -> &str {
        card_suffix(&self.card_number)
    }
}

// Last four characters of the card number, or the whole string if shorter
pub fn card_suffix(card_number: &str) -> &str {
    match card_number.char_indices().rev().nth(3) {
        Some((index, _)) => &card_number[index..],
        None => card_number,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ADDONS, ROOM_TYPES};

    fn stay_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2999, 1, 1).unwrap()
    }

    #[test]
    fn test_new_order() {
        let order = BookingOrder::new(
            stay_date(),
            3,
            2,
            vec![ROOM_TYPES[0], ROOM_TYPES[2]],
            vec![ADDONS[0], ADDONS[0]],
            "4111111111111234".to_string(),
        )
        .unwrap();

        assert_eq!(order.selected_rooms.len(), 2);
        assert_eq!(order.selected_addons.len(), 2);
        assert_eq!(order.card_suffix(), "1234");
    }

    #[test]
    fn test_rejects_more_rooms_than_guests() {
        let result = BookingOrder::new(
            stay_date(),
            1,
            2,
            vec![ROOM_TYPES[0], ROOM_TYPES[1]],
            vec![],
            "4111111111111111".to_string(),
        );
        assert_eq!(
            result,
            Err(OrderError::InvalidRoomCount { rooms: 2, guests: 1 })
        );
    }

    #[test]
    fn test_rejects_selection_count_mismatch() {
        let result = BookingOrder::new(
            stay_date(),
            2,
            2,
            vec![ROOM_TYPES[0]],
            vec![],
            "4111111111111111".to_string(),
        );
        assert_eq!(
            result,
            Err(OrderError::RoomSelectionMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_rejects_zero_guests() {
        let result = BookingOrder::new(stay_date(), 0, 0, vec![], vec![], String::new());
        assert_eq!(result, Err(OrderError::NoGuests));
    }

    #[test]
    fn test_card_suffix() {
        assert_eq!(card_suffix("4111111111111234"), "1234");
        assert_eq!(card_suffix("4111111111111111"), "1111");
        assert_eq!(card_suffix("12"), "12");
        assert_eq!(card_suffix(""), "");
        assert_eq!(card_suffix("ab€cde"), "€cde");
    }
}
