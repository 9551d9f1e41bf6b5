use crate::database::{
    model::{course::CourseRow, meeting::MeetingRow, user::UserRow},
    set_transaction_serializable, ConnectionPool,
};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{AddressId, CourseId, MeetingId, UserId},
    meeting::{
        event::{BookMeeting, CancelMeeting, CreateMeeting, DeleteMeeting, UpdateMeeting},
        Meeting, MeetingSlot, DEFAULT_ROOM_NUMBER,
    },
    role::Role,
    user::User,
};
use kernel::repository::meeting::MeetingRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct MeetingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl MeetingRepository for MeetingRepositoryImpl {
    async fn create(&self, event: CreateMeeting) -> AppResult<MeetingId> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        self.validate_schedule(&mut tx, event.tutor_id, event.course_id, event.address_id)
            .await?;
        if event.end_time <= event.start_time {
            return Err(AppError::UnprocessableEntity(
                "a meeting must end after it starts".into(),
            ));
        }

        let room_number = event
            .room_number
            .unwrap_or_else(|| DEFAULT_ROOM_NUMBER.to_string());
        let slot = MeetingSlot::new(event.start_time, room_number, event.address_id);
        self.assert_slot_free(&mut tx, &slot, None).await?;

        let meeting_id = MeetingId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO meetings
                (meeting_id, tutor_id, course_id, meeting_date, start_time,
                 end_time, meeting_type, room_number, meeting_link, address_id)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(meeting_id)
        .bind(event.tutor_id)
        .bind(event.course_id)
        .bind(slot.meeting_date)
        .bind(slot.start_time)
        .bind(event.end_time)
        .bind(event.meeting_type.as_ref())
        .bind(&slot.room_number)
        .bind(&event.meeting_link)
        .bind(event.address_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no meeting record has been created".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(meeting_id)
    }

    async fn update(&self, event: UpdateMeeting) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let existing: Option<(MeetingId,)> =
            sqlx::query_as("SELECT meeting_id FROM meetings WHERE meeting_id = $1")
                .bind(event.meeting_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if existing.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "meeting not found with id {}",
                event.meeting_id
            )));
        }

        self.validate_schedule(&mut tx, event.tutor_id, event.course_id, event.address_id)
            .await?;
        if event.end_time <= event.start_time {
            return Err(AppError::UnprocessableEntity(
                "a meeting must end after it starts".into(),
            ));
        }

        let room_number = event
            .room_number
            .unwrap_or_else(|| DEFAULT_ROOM_NUMBER.to_string());
        let slot = MeetingSlot::new(event.start_time, room_number, event.address_id);
        // The meeting being updated may keep occupying its own slot.
        self.assert_slot_free(&mut tx, &slot, Some(event.meeting_id))
            .await?;

        let res = sqlx::query(
            r#"
                UPDATE meetings
                SET tutor_id = $1,
                    course_id = $2,
                    meeting_date = $3,
                    start_time = $4,
                    end_time = $5,
                    meeting_type = $6,
                    room_number = $7,
                    meeting_link = $8,
                    address_id = $9
                WHERE meeting_id = $10
            "#,
        )
        .bind(event.tutor_id)
        .bind(event.course_id)
        .bind(slot.meeting_date)
        .bind(slot.start_time)
        .bind(event.end_time)
        .bind(event.meeting_type.as_ref())
        .bind(&slot.room_number)
        .bind(&event.meeting_link)
        .bind(event.address_id)
        .bind(event.meeting_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no meeting record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn delete(&self, event: DeleteMeeting) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let meeting: Option<(UserId,)> =
            sqlx::query_as("SELECT tutor_id FROM meetings WHERE meeting_id = $1")
                .bind(event.meeting_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some((tutor_id,)) = meeting else {
            return Err(AppError::EntityNotFound(format!(
                "meeting not found with id {}",
                event.meeting_id
            )));
        };
        if tutor_id != event.requested_user {
            return Err(AppError::ForbiddenOperation(
                "only the scheduling tutor may delete a meeting".into(),
            ));
        }

        // Detach-then-delete: every participant edge goes away with the
        // meeting row in the same transaction, never on its own.
        sqlx::query("DELETE FROM meeting_participants WHERE meeting_id = $1")
            .bind(event.meeting_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

        let res = sqlx::query("DELETE FROM meetings WHERE meeting_id = $1")
            .bind(event.meeting_id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no meeting record has been deleted".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn book(&self, event: BookMeeting) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let meeting: Option<(CourseId,)> =
            sqlx::query_as("SELECT course_id FROM meetings WHERE meeting_id = $1")
                .bind(event.meeting_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        let Some((course_id,)) = meeting else {
            return Err(AppError::EntityNotFound(format!(
                "meeting not found with id {}",
                event.meeting_id
            )));
        };

        let student = self
            .find_user_with_role(&mut tx, event.student_id, Role::Student)
            .await?;
        if student.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "student not found with id {}",
                event.student_id
            )));
        }

        let enrolled: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM enrollments WHERE student_id = $1 AND course_id = $2",
        )
        .bind(event.student_id)
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        if enrolled.is_none() {
            return Err(AppError::ForbiddenOperation(format!(
                "student {} is not enrolled in the course for this meeting",
                event.student_id
            )));
        }

        let res = sqlx::query(
            r#"
                INSERT INTO meeting_participants (meeting_id, user_id)
                VALUES ($1, $2)
                ON CONFLICT (meeting_id, user_id) DO NOTHING
            "#,
        )
        .bind(event.meeting_id)
        .bind(event.student_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::ResourceConflict(format!(
                "student {} is already a participant of meeting {}",
                event.student_id, event.meeting_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn cancel(&self, event: CancelMeeting) -> AppResult<()> {
        let mut tx = self.db.begin().await?;
        set_transaction_serializable(&mut tx).await?;

        let meeting: Option<(MeetingId,)> =
            sqlx::query_as("SELECT meeting_id FROM meetings WHERE meeting_id = $1")
                .bind(event.meeting_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(AppError::SpecificOperationError)?;
        if meeting.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "meeting not found with id {}",
                event.meeting_id
            )));
        }

        let student = self
            .find_user_with_role(&mut tx, event.student_id, Role::Student)
            .await?;
        if student.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "student not found with id {}",
                event.student_id
            )));
        }

        let res = sqlx::query(
            "DELETE FROM meeting_participants WHERE meeting_id = $1 AND user_id = $2",
        )
        .bind(event.meeting_id)
        .bind(event.student_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::InvalidState(format!(
                "student {} is not a participant of meeting {}",
                event.student_id, event.meeting_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;
        Ok(())
    }

    async fn find_by_id(&self, meeting_id: MeetingId) -> AppResult<Option<Meeting>> {
        let row: Option<MeetingRow> = sqlx::query_as(
            r#"
                SELECT meeting_id, tutor_id, course_id, start_time, end_time,
                       meeting_type, room_number, meeting_link, address_id
                FROM meetings
                WHERE meeting_id = $1
            "#,
        )
        .bind(meeting_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(Meeting::try_from).transpose()
    }

    async fn find_by_course_id(&self, course_id: CourseId) -> AppResult<Vec<Meeting>> {
        let course: Option<(CourseId,)> =
            sqlx::query_as("SELECT course_id FROM courses WHERE course_id = $1")
                .bind(course_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if course.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {course_id}"
            )));
        }

        let rows: Vec<MeetingRow> = sqlx::query_as(
            r#"
                SELECT meeting_id, tutor_id, course_id, start_time, end_time,
                       meeting_type, room_number, meeting_link, address_id
                FROM meetings
                WHERE course_id = $1
                ORDER BY start_time ASC
            "#,
        )
        .bind(course_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(Meeting::try_from).collect()
    }

    async fn find_participants(&self, meeting_id: MeetingId) -> AppResult<Vec<User>> {
        let meeting: Option<(MeetingId,)> =
            sqlx::query_as("SELECT meeting_id FROM meetings WHERE meeting_id = $1")
                .bind(meeting_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if meeting.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "meeting not found with id {meeting_id}"
            )));
        }

        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT u.user_id, u.user_name, u.email, u.roles, u.verified
                FROM meeting_participants AS mp
                INNER JOIN users AS u ON mp.user_id = u.user_id
                WHERE mp.meeting_id = $1
            "#,
        )
        .bind(meeting_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_for_user(&self, user_id: UserId) -> AppResult<Vec<Meeting>> {
        let user: Option<(UserId,)> =
            sqlx::query_as("SELECT user_id FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        if user.is_none() {
            return Err(AppError::EntityNotFound(format!(
                "user not found with id {user_id}"
            )));
        }

        // Participations first, then meetings scheduled as tutor. A tutor
        // sitting in their own meeting shows up twice, matching the
        // upstream behavior.
        let mut rows: Vec<MeetingRow> = sqlx::query_as(
            r#"
                SELECT m.meeting_id, m.tutor_id, m.course_id, m.start_time,
                       m.end_time, m.meeting_type, m.room_number,
                       m.meeting_link, m.address_id
                FROM meeting_participants AS mp
                INNER JOIN meetings AS m ON mp.meeting_id = m.meeting_id
                WHERE mp.user_id = $1
                ORDER BY m.start_time ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let scheduled: Vec<MeetingRow> = sqlx::query_as(
            r#"
                SELECT meeting_id, tutor_id, course_id, start_time, end_time,
                       meeting_type, room_number, meeting_link, address_id
                FROM meetings
                WHERE tutor_id = $1
                ORDER BY start_time ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.extend(scheduled);
        rows.into_iter().map(Meeting::try_from).collect()
    }
}

impl MeetingRepositoryImpl {
    async fn find_user_with_role(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
        role: Role,
    ) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, roles, verified
                FROM users
                WHERE user_id = $1 AND $2 = ANY(roles)
            "#,
        )
        .bind(user_id)
        .bind(role.as_ref())
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    /// Shared validation for create and update: the tutor must exist, hold
    /// the TUTOR role and be verified; the course must exist and belong to
    /// the tutor; a given address must exist.
    async fn validate_schedule(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        tutor_id: UserId,
        course_id: CourseId,
        address_id: Option<AddressId>,
    ) -> AppResult<()> {
        let tutor = self.find_user_with_role(tx, tutor_id, Role::Tutor).await?;
        let Some(tutor) = tutor else {
            return Err(AppError::EntityNotFound(format!(
                "tutor not found with id {tutor_id}"
            )));
        };
        if !tutor.is_verified_tutor() {
            return Err(AppError::ForbiddenOperation(
                "tutor must be verified to schedule a meeting".into(),
            ));
        }

        let course: Option<CourseRow> = sqlx::query_as(
            r#"
                SELECT course_id, course_name, tutor_id, description, created_at
                FROM courses
                WHERE course_id = $1
            "#,
        )
        .bind(course_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;
        let Some(course) = course else {
            return Err(AppError::EntityNotFound(format!(
                "course not found with id {course_id}"
            )));
        };
        if course.tutor_id != tutor_id {
            return Err(AppError::ForbiddenOperation(format!(
                "tutor {tutor_id} does not own course {course_id}"
            )));
        }

        if let Some(address_id) = address_id {
            let address: Option<(AddressId,)> =
                sqlx::query_as("SELECT address_id FROM addresses WHERE address_id = $1")
                    .bind(address_id)
                    .fetch_optional(&mut **tx)
                    .await
                    .map_err(AppError::SpecificOperationError)?;
            if address.is_none() {
                return Err(AppError::EntityNotFound(format!(
                    "address not found with id {address_id}"
                )));
            }
        }

        Ok(())
    }

    /// Fails with `ResourceConflict` when another meeting already occupies
    /// the slot tuple. NULL addresses compare equal here on purpose; the
    /// unique index alone would let two address-less meetings collide.
    async fn assert_slot_free(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        slot: &MeetingSlot,
        exclude: Option<MeetingId>,
    ) -> AppResult<()> {
        let occupied: Option<(MeetingId,)> = sqlx::query_as(
            r#"
                SELECT meeting_id
                FROM meetings
                WHERE meeting_date = $1
                  AND start_time = $2
                  AND room_number = $3
                  AND address_id IS NOT DISTINCT FROM $4
                  AND ($5::uuid IS NULL OR meeting_id <> $5)
                LIMIT 1
            "#,
        )
        .bind(slot.meeting_date)
        .bind(slot.start_time)
        .bind(&slot.room_number)
        .bind(slot.address_id)
        .bind(exclude.map(MeetingId::raw))
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if occupied.is_some() {
            return Err(AppError::ResourceConflict(format!(
                "another meeting already occupies room {} at {}",
                slot.room_number, slot.start_time
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{enrollment::EnrollmentRepositoryImpl, fixtures};
    use chrono::{TimeZone, Utc};
    use kernel::model::meeting::MeetingType;
    use kernel::repository::enrollment::EnrollmentRepository;

    fn create_event(
        tutor_id: UserId,
        course_id: CourseId,
        room: &str,
    ) -> CreateMeeting {
        CreateMeeting::new(
            tutor_id,
            course_id,
            Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 2, 11, 30, 0).unwrap(),
            MeetingType::Offline,
            Some(room.into()),
            None,
            None,
        )
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn an_unverified_tutor_may_not_schedule(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", false).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let err = repo
            .create(create_event(tutor_id, course_id, "E101"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_tutor_may_only_schedule_their_own_course(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let owner_id = fixtures::tutor(&pool, "owner@example.com", true).await?;
        let other_id = fixtures::tutor(&pool, "other@example.com", true).await?;
        let course_id = fixtures::course(&pool, owner_id, "Analysis I").await?;

        let err = repo
            .create(create_event(other_id, course_id, "E101"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn a_taken_slot_conflicts_but_a_different_room_does_not(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        repo.create(create_event(tutor_id, course_id, "E101")).await?;
        let err = repo
            .create(create_event(tutor_id, course_id, "E101"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ResourceConflict(_)));
        // Same time, different room.
        repo.create(create_event(tutor_id, course_id, "E102")).await?;
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn updating_a_meeting_does_not_conflict_with_itself(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;

        let meeting_id = repo.create(create_event(tutor_id, course_id, "E101")).await?;
        // Keeping the same slot must pass the uniqueness check.
        repo.update(UpdateMeeting::new(
            meeting_id,
            tutor_id,
            course_id,
            Utc.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 6, 2, 12, 0, 0).unwrap(),
            MeetingType::Online,
            Some("E101".into()),
            Some("https://meet.example.com/abc".into()),
            None,
        ))
        .await?;

        let updated = repo.find_by_id(meeting_id).await?.unwrap();
        assert_eq!(updated.meeting_type, MeetingType::Online);
        assert_eq!(updated.duration(), chrono::Duration::minutes(120));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn booking_requires_enrollment_and_cancel_reverses_it(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;
        let meeting_id = repo.create(create_event(tutor_id, course_id, "E101")).await?;

        let err = repo
            .book(BookMeeting::new(meeting_id, student_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ForbiddenOperation(_)));

        enrollments.enroll(student_id, course_id).await?;
        repo.book(BookMeeting::new(meeting_id, student_id)).await?;

        let participants = repo.find_participants(meeting_id).await?;
        assert_eq!(participants.len(), 1);
        assert_eq!(participants[0].user_id, student_id);

        // Double booking is a conflict.
        let err = repo
            .book(BookMeeting::new(meeting_id, student_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ResourceConflict(_)));

        repo.cancel(CancelMeeting::new(meeting_id, student_id)).await?;
        assert!(repo.find_participants(meeting_id).await?.is_empty());

        // Cancelling again is an invalid state, not a silent no-op.
        let err = repo
            .cancel(CancelMeeting::new(meeting_id, student_id))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidState(_)));
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn delete_detaches_participants_with_the_meeting_row(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;
        let meeting_id = repo.create(create_event(tutor_id, course_id, "E101")).await?;

        enrollments.enroll(student_id, course_id).await?;
        repo.book(BookMeeting::new(meeting_id, student_id)).await?;

        repo.delete(DeleteMeeting::new(meeting_id, tutor_id)).await?;

        assert!(repo.find_by_id(meeting_id).await?.is_none());
        let edges: Option<(i32,)> = sqlx::query_as(
            "SELECT 1 FROM meeting_participants WHERE meeting_id = $1",
        )
        .bind(meeting_id)
        .fetch_optional(&pool)
        .await?;
        assert!(edges.is_none());
        assert!(repo.find_for_user(student_id).await?.is_empty());
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn meetings_for_a_user_union_participated_and_scheduled(
        pool: sqlx::PgPool,
    ) -> anyhow::Result<()> {
        let repo = MeetingRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let enrollments = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool.clone()));
        let tutor_id = fixtures::tutor(&pool, "t@example.com", true).await?;
        let student_id = fixtures::student(&pool, "s@example.com").await?;
        let course_id = fixtures::course(&pool, tutor_id, "Analysis I").await?;
        let meeting_id = repo.create(create_event(tutor_id, course_id, "E101")).await?;

        enrollments.enroll(student_id, course_id).await?;
        repo.book(BookMeeting::new(meeting_id, student_id)).await?;

        let for_student = repo.find_for_user(student_id).await?;
        assert_eq!(for_student.len(), 1);
        let for_tutor = repo.find_for_user(tutor_id).await?;
        assert_eq!(for_tutor.len(), 1);
        assert_eq!(for_tutor[0].meeting_id, meeting_id);
        Ok(())
    }
}
