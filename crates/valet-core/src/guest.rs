//! Guest data structure
//!
//! A guest record carries the stay window, contact details,
//! transportation, party size and any scheduled room moves. The
//! "moving tomorrow" rule lives here: guest cards highlight a room
//! change scheduled for the day after today.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreError;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomCategory {
    /// Deluxe twin suite
    Dts,
    /// Deluxe king suite
    Dks,
}

impl RoomCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomCategory::Dts => "DTS",
            RoomCategory::Dks => "DKS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GuestStatus {
    /// Guest is in house
    CheckedIn,
    /// Arrival expected, room held
    Waiting,
    /// Stay finished, kept for the archive view
    Departed,
}

impl GuestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuestStatus::CheckedIn => "checked-in",
            GuestStatus::Waiting => "waiting",
            GuestStatus::Departed => "departed",
        }
    }
}

impl std::fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GuestStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checked-in" => Ok(GuestStatus::CheckedIn),
            "waiting" => Ok(GuestStatus::Waiting),
            "departed" => Ok(GuestStatus::Departed),
            _ => Err(format!("Unknown guest status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transportation {
    Car,
    Taxi,
    Transfer,
}

impl Transportation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transportation::Car => "car",
            Transportation::Taxi => "taxi",
            Transportation::Transfer => "transfer",
        }
    }
}

/// A scheduled room change, keyed by date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomMove {
    pub id: String,
    /// Day the guest changes rooms
    pub date: NaiveDate,
    /// Target room
    pub room: String,
    pub room_category: RoomCategory,
    pub comment: Option<String>,
}

impl RoomMove {
    pub fn new(date: NaiveDate, room: impl Into<String>, room_category: RoomCategory) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date,
            room: room.into(),
            room_category,
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    /// Unique identifier
    pub id: String,
    /// Full name (may cover a couple sharing one room)
    pub name: String,
    /// Current room number
    pub room: String,
    pub room_category: RoomCategory,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: GuestStatus,
    pub phone: String,
    pub email: String,
    pub preferences: Option<String>,
    pub transportation: Transportation,
    pub car_make: Option<String>,
    pub car_model: Option<String>,
    pub license_plate: Option<String>,
    pub parking_spot: Option<String>,
    pub adults: u8,
    pub children: u8,
    pub infants: u8,
    /// Scheduled room changes, if any
    pub moves: Vec<RoomMove>,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        room: impl Into<String>,
        room_category: RoomCategory,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Self> {
        let name = name.into();
        let room = room.into();

        if name.trim().is_empty() {
            return Err(StoreError::InvalidField {
                field: "name",
                reason: "cannot be empty".to_string(),
            });
        }
        if room.trim().is_empty() {
            return Err(StoreError::InvalidField {
                field: "room",
                reason: "cannot be empty".to_string(),
            });
        }

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name,
            room,
            room_category,
            check_in,
            check_out,
            status: GuestStatus::Waiting,
            phone: String::new(),
            email: String::new(),
            preferences: None,
            transportation: Transportation::Transfer,
            car_make: None,
            car_model: None,
            license_plate: None,
            parking_spot: None,
            adults: 1,
            children: 0,
            infants: 0,
            moves: Vec::new(),
        })
    }

    /// Room move scheduled for the given day, if any.
    pub fn moving_on(&self, date: NaiveDate) -> Option<&RoomMove> {
        self.moves.iter().find(|m| m.date == date)
    }

    /// Whether a room change is scheduled for the day after `today`.
    /// Drives the highlighted room box on the guest card.
    pub fn is_moving_tomorrow(&self, today: NaiveDate) -> bool {
        match today.succ_opt() {
            Some(tomorrow) => self.moving_on(tomorrow).is_some(),
            None => false,
        }
    }

    /// Target room of tomorrow's move, for the card annotation.
    pub fn move_tomorrow_room(&self, today: NaiveDate) -> Option<&str> {
        today
            .succ_opt()
            .and_then(|tomorrow| self.moving_on(tomorrow))
            .map(|m| m.room.as_str())
    }

    pub fn schedule_move(&mut self, room_move: RoomMove) {
        tracing::debug!(
            guest_id = %self.id,
            date = %room_move.date,
            room = %room_move.room,
            "Scheduled room move"
        );
        self.moves.push(room_move);
    }

    /// Last name only, for the compact card row.
    pub fn last_name(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    /// Total party size including the main guest(s).
    pub fn party_size(&self) -> u8 {
        self.adults + self.children + self.infants
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn guest() -> Guest {
        Guest::new(
            "Anna Sokolova",
            "103",
            RoomCategory::Dts,
            date(2025, 11, 1),
            date(2025, 11, 5),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Guest::new(
            "  ",
            "103",
            RoomCategory::Dts,
            date(2025, 11, 1),
            date(2025, 11, 5),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_moving_tomorrow() {
        let mut guest = guest();
        guest.schedule_move(RoomMove::new(date(2025, 11, 3), "601", RoomCategory::Dks));

        assert!(guest.is_moving_tomorrow(date(2025, 11, 2)));
        assert_eq!(guest.move_tomorrow_room(date(2025, 11, 2)), Some("601"));

        // Not tomorrow from any other day
        assert!(!guest.is_moving_tomorrow(date(2025, 11, 1)));
        assert!(!guest.is_moving_tomorrow(date(2025, 11, 3)));
        assert_eq!(guest.move_tomorrow_room(date(2025, 11, 3)), None);
    }

    #[test]
    fn test_no_moves_never_highlights() {
        let guest = guest();
        assert!(!guest.is_moving_tomorrow(date(2025, 11, 2)));
    }

    #[test]
    fn test_last_name() {
        let guest = guest();
        assert_eq!(guest.last_name(), "Sokolova");
    }

    #[test]
    fn test_status_round_trip() {
        let status: GuestStatus = "checked-in".parse().unwrap();
        assert_eq!(status, GuestStatus::CheckedIn);
        assert_eq!(status.to_string(), "checked-in");
        assert!("vanished".parse::<GuestStatus>().is_err());
    }

    #[test]
    fn test_room_category_serde() {
        let json = serde_json::to_string(&RoomCategory::Dks).unwrap();
        assert_eq!(json, "\"DKS\"");
    }
}
