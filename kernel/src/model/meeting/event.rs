use crate::model::{
    id::{AddressId, CourseId, MeetingId, UserId},
    meeting::MeetingType,
};
use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateMeeting {
    pub tutor_id: UserId,
    pub course_id: CourseId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_type: MeetingType,
    pub room_number: Option<String>,
    pub meeting_link: Option<String>,
    pub address_id: Option<AddressId>,
}

#[derive(Debug, new)]
pub struct UpdateMeeting {
    pub meeting_id: MeetingId,
    pub tutor_id: UserId,
    pub course_id: CourseId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_type: MeetingType,
    pub room_number: Option<String>,
    pub meeting_link: Option<String>,
    pub address_id: Option<AddressId>,
}

#[derive(Debug, new)]
pub struct DeleteMeeting {
    pub meeting_id: MeetingId,
    pub requested_user: UserId,
}

#[derive(Debug, new)]
pub struct BookMeeting {
    pub meeting_id: MeetingId,
    pub student_id: UserId,
}

#[derive(Debug, new)]
pub struct CancelMeeting {
    pub meeting_id: MeetingId,
    pub student_id: UserId,
}
