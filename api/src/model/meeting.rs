use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{AddressId, CourseId, MeetingId, UserId},
    meeting::{
        event::{CreateMeeting, UpdateMeeting},
        Meeting, MeetingType,
    },
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateMeetingRequest {
    #[garde(skip)]
    pub course_id: CourseId,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    #[garde(skip)]
    pub meeting_type: MeetingType,
    #[garde(inner(length(min = 1)))]
    pub room_number: Option<String>,
    #[garde(skip)]
    pub meeting_link: Option<String>,
    #[garde(skip)]
    pub address_id: Option<AddressId>,
}

#[derive(new)]
pub struct CreateMeetingRequestWithUserId(UserId, CreateMeetingRequest);

impl From<CreateMeetingRequestWithUserId> for CreateMeeting {
    fn from(value: CreateMeetingRequestWithUserId) -> Self {
        let CreateMeetingRequestWithUserId(
            tutor_id,
            CreateMeetingRequest {
                course_id,
                start_time,
                end_time,
                meeting_type,
                room_number,
                meeting_link,
                address_id,
            },
        ) = value;
        CreateMeeting {
            tutor_id,
            course_id,
            start_time,
            end_time,
            meeting_type,
            room_number,
            meeting_link,
            address_id,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMeetingRequest {
    #[garde(skip)]
    pub course_id: CourseId,
    #[garde(skip)]
    pub start_time: DateTime<Utc>,
    #[garde(skip)]
    pub end_time: DateTime<Utc>,
    #[garde(skip)]
    pub meeting_type: MeetingType,
    #[garde(inner(length(min = 1)))]
    pub room_number: Option<String>,
    #[garde(skip)]
    pub meeting_link: Option<String>,
    #[garde(skip)]
    pub address_id: Option<AddressId>,
}

#[derive(new)]
pub struct UpdateMeetingRequestWithIds(MeetingId, UserId, UpdateMeetingRequest);

impl From<UpdateMeetingRequestWithIds> for UpdateMeeting {
    fn from(value: UpdateMeetingRequestWithIds) -> Self {
        let UpdateMeetingRequestWithIds(
            meeting_id,
            tutor_id,
            UpdateMeetingRequest {
                course_id,
                start_time,
                end_time,
                meeting_type,
                room_number,
                meeting_link,
                address_id,
            },
        ) = value;
        UpdateMeeting {
            meeting_id,
            tutor_id,
            course_id,
            start_time,
            end_time,
            meeting_type,
            room_number,
            meeting_link,
            address_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingResponse {
    pub meeting_id: MeetingId,
    pub tutor_id: UserId,
    pub course_id: CourseId,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: i64,
    pub meeting_type: MeetingType,
    pub room_number: String,
    pub meeting_link: Option<String>,
    pub address_id: Option<AddressId>,
}

impl From<Meeting> for MeetingResponse {
    fn from(value: Meeting) -> Self {
        let duration_minutes = value.duration().num_minutes();
        let Meeting {
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
        Self {
            meeting_id,
            tutor_id,
            course_id,
            start_time,
            end_time,
            duration_minutes,
            meeting_type,
            room_number,
            meeting_link,
            address_id,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingsResponse {
    pub items: Vec<MeetingResponse>,
}
