use crate::model::id::{AddressId, CourseId, MeetingId, UserId};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

pub mod event;

pub const DEFAULT_ROOM_NUMBER: &str = "No room scheduled";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, AsRefStr, EnumString,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MeetingType {
    Online,
    Offline,
}

/// A scheduled meeting. A meeting either exists in the store or has been
/// deleted; there is no stored "completed" state. Whether a meeting lies in
/// the past is a read-time question, see [`Meeting::is_over`].
#[derive(Debug, Clone)]
pub struct Meeting {
    pub meeting_id: MeetingId,
    pub tutor_id: UserId,
    pub course_id: CourseId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_type: MeetingType,
    pub room_number: String,
    pub meeting_link: Option<String>,
    pub address_id: Option<AddressId>,
}

impl Meeting {
    /// Derived from the two stored endpoints; the duration is never stored
    /// on its own, so the three values cannot drift apart.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn is_over(&self, now: DateTime<Utc>) -> bool {
        self.end_time < now
    }

    pub fn slot(&self) -> MeetingSlot {
        MeetingSlot::new(
            self.start_time,
            self.room_number.clone(),
            self.address_id,
        )
    }
}

/// The tuple that must be unique across all meetings. The date component is
/// derived from the start time; all comparisons happen in UTC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSlot {
    pub meeting_date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub room_number: String,
    pub address_id: Option<AddressId>,
}

impl MeetingSlot {
    pub fn new(
        start_time: DateTime<Utc>,
        room_number: String,
        address_id: Option<AddressId>,
    ) -> Self {
        Self {
            meeting_date: start_time.date_naive(),
            start_time,
            room_number,
            address_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, m, 0).unwrap()
    }

    fn meeting(start: DateTime<Utc>, end: DateTime<Utc>) -> Meeting {
        Meeting {
            meeting_id: MeetingId::new(),
            tutor_id: UserId::new(),
            course_id: CourseId::new(),
            start_time: start,
            end_time: end,
            meeting_type: MeetingType::Offline,
            room_number: "E101".into(),
            meeting_link: None,
            address_id: None,
        }
    }

    #[test]
    fn duration_is_derived_from_the_endpoints() {
        let m = meeting(at(10, 0), at(11, 30));
        assert_eq!(m.duration(), Duration::minutes(90));
    }

    #[test]
    fn completion_is_a_read_time_interpretation() {
        let m = meeting(at(10, 0), at(11, 0));
        assert!(!m.is_over(at(10, 30)));
        assert!(m.is_over(at(11, 1)));
    }

    #[test]
    fn slot_date_is_derived_from_the_start_time() {
        let slot = MeetingSlot::new(at(10, 0), "E101".into(), None);
        assert_eq!(
            slot.meeting_date,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
    }

    #[test]
    fn slots_differ_by_room_at_the_same_time() {
        let a = MeetingSlot::new(at(10, 0), "E101".into(), None);
        let b = MeetingSlot::new(at(10, 0), "E101".into(), None);
        let c = MeetingSlot::new(at(10, 0), "E102".into(), None);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn meeting_type_round_trips_through_its_storage_form() {
        use std::str::FromStr;
        assert_eq!(MeetingType::Online.as_ref(), "ONLINE");
        assert_eq!(MeetingType::from_str("OFFLINE").unwrap(), MeetingType::Offline);
    }
}
