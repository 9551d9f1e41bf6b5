use crate::model::{
    id::{CourseId, MeetingId, UserId},
    meeting::{
        event::{BookMeeting, CancelMeeting, CreateMeeting, DeleteMeeting, UpdateMeeting},
        Meeting,
    },
    user::User,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait MeetingRepository: Send + Sync {
    /// Creates a meeting. The tutor must exist, hold the TUTOR role and be
    /// verified, and must own the course; the slot tuple
    /// (date, start time, room, address) must not collide with any
    /// existing meeting.
    async fn create(&self, event: CreateMeeting) -> AppResult<MeetingId>;
    /// Same validations as creation; the slot check excludes the meeting
    /// being updated.
    async fn update(&self, event: UpdateMeeting) -> AppResult<()>;
    /// Removes every participant edge and then the meeting row, in one
    /// transaction.
    async fn delete(&self, event: DeleteMeeting) -> AppResult<()>;
    /// Adds the mutual participant edge for a student enrolled in the
    /// meeting's course.
    async fn book(&self, event: BookMeeting) -> AppResult<()>;
    /// Removes the participant edge; an absent edge is an error, not a
    /// no-op.
    async fn cancel(&self, event: CancelMeeting) -> AppResult<()>;
    async fn find_by_id(&self, meeting_id: MeetingId) -> AppResult<Option<Meeting>>;
    async fn find_by_course_id(&self, course_id: CourseId) -> AppResult<Vec<Meeting>>;
    async fn find_participants(&self, meeting_id: MeetingId) -> AppResult<Vec<User>>;
    /// Meetings the user participates in followed by meetings the user
    /// schedules as tutor. A tutor participating in their own meeting
    /// appears twice; callers that care must deduplicate themselves.
    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Meeting>>;
}
