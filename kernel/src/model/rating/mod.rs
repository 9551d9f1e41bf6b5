use crate::model::id::{CourseId, RatingId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

/// At most one of these exists per (student, course) pair; a second
/// submission updates the row in place.
#[derive(Debug, Clone)]
pub struct CourseRating {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub course_id: CourseId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

/// At most one per (student, tutor) pair.
#[derive(Debug, Clone)]
pub struct TutorRating {
    pub rating_id: RatingId,
    pub student_id: UserId,
    pub tutor_id: UserId,
    pub points: f64,
    pub review: String,
    pub created_at: DateTime<Utc>,
}

/// Arithmetic mean of the given points, 0.0 for an empty set. Averages are
/// computed on demand from the current rating rows and never cached.
pub fn average(points: &[f64]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().sum::<f64>() / points.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_an_empty_set_is_zero() {
        assert_eq!(average(&[]), 0.0);
    }

    #[test]
    fn average_is_the_arithmetic_mean() {
        assert_eq!(average(&[4.0, 5.0]), 4.5);
        assert_eq!(average(&[2.0, 5.0]), 3.5);
        assert_eq!(average(&[3.0]), 3.0);
    }
}
