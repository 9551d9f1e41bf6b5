use chrono::{DateTime, Utc};
use kernel::model::{
    id::{AddressId, CourseId, MeetingId, UserId},
    meeting::{Meeting, MeetingType},
};
use shared::error::AppError;
use std::str::FromStr;

#[derive(sqlx::FromRow)]
pub struct MeetingRow {
    pub meeting_id: MeetingId,
    pub tutor_id: UserId,
    pub course_id: CourseId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_type: String,
    pub room_number: String,
    pub meeting_link: Option<String>,
    pub address_id: Option<AddressId>,
}

impl TryFrom<MeetingRow> for Meeting {
    type Error = AppError;

    fn try_from(value: MeetingRow) -> Result<Self, Self::Error> {
        let MeetingRow {
            meeting_id,
            tutor_id,
            course_id,
            start_time,
            end_time,
            meeting_type,
            room_number,
            meeting_link,
            address_id,
        } = value;
        let meeting_type = MeetingType::from_str(&meeting_type).map_err(|_| {
            AppError::ConversionEntityError(format!(
                "unknown meeting type: {meeting_type}"
            ))
        })?;
        Ok(Meeting {
            meeting_id,
            tutor_id,
            course_id,
            start_time,
            end_time,
            meeting_type,
            room_number,
            meeting_link,
            address_id,
        })
    }
}
