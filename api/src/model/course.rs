use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    course::{event::CreateCourse, Category, Course},
    id::{CategoryId, CourseId, UserId},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    #[garde(length(min = 1))]
    pub course_name: String,
    #[garde(skip)]
    #[serde(default)]
    pub description: String,
    #[garde(skip)]
    #[serde(default)]
    pub categories: Vec<CategoryId>,
}

#[derive(new)]
pub struct CreateCourseRequestWithUserId(UserId, CreateCourseRequest);

impl From<CreateCourseRequestWithUserId> for CreateCourse {
    fn from(value: CreateCourseRequestWithUserId) -> Self {
        let CreateCourseRequestWithUserId(
            tutor_id,
            CreateCourseRequest {
                course_name,
                description,
                categories,
            },
        ) = value;
        CreateCourse {
            course_name,
            tutor_id,
            description,
            categories,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseListQuery {
    pub tutor_id: UserId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub category_id: CategoryId,
    pub category_name: String,
}

impl From<Category> for CategoryResponse {
    fn from(value: Category) -> Self {
        Self {
            category_id: value.category_id,
            category_name: value.category_name,
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[garde(length(min = 1))]
    pub category_name: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub course_id: CourseId,
    pub course_name: String,
    pub tutor_id: UserId,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub categories: Vec<CategoryResponse>,
    /// Mean of the current course ratings, 0.0 when unrated. Computed per
    /// request, never stored.
    pub average_rating: f64,
}

impl CourseResponse {
    pub fn new(
        course: Course,
        categories: Vec<Category>,
        average_rating: f64,
    ) -> Self {
        let Course {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
        } = course;
        Self {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
            categories: categories.into_iter().map(CategoryResponse::from).collect(),
            average_rating,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursesResponse {
    pub items: Vec<CourseSummaryResponse>,
}

/// Listing entry without the per-course rating and category lookups.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseSummaryResponse {
    pub course_id: CourseId,
    pub course_name: String,
    pub tutor_id: UserId,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl From<Course> for CourseSummaryResponse {
    fn from(value: Course) -> Self {
        let Course {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
        } = value;
        Self {
            course_id,
            course_name,
            tutor_id,
            description,
            created_at,
        }
    }
}
