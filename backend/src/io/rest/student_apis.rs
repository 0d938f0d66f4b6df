use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use tracing::{info, warn};

use super::errors::ApiError;
use super::mappers::student_mapper::StudentMapper;
use crate::domain::models::StudentId;
use crate::AppState;
use shared::{CreateStudentRequest, CreateStudentResponse, DeleteStudentRequest, MessageResponse, StudentDto};

/// Create the student API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students).post(add_student))
        .route("/pending", get(list_pending_students))
        .route("/:id", delete(delete_student))
}

/// List every student with their pending fees
pub async fn list_students(State(app_state): State<AppState>) -> Result<Json<Vec<StudentDto>>, ApiError> {
    info!("GET /api/students");

    let views = app_state.fee_ledger_service.list_students().await?;
    Ok(Json(StudentMapper::to_dto_list(views)))
}

/// List only the students that owe something
pub async fn list_pending_students(State(app_state): State<AppState>) -> Result<Json<Vec<StudentDto>>, ApiError> {
    info!("GET /api/students/pending");

    let views = app_state.fee_ledger_service.list_pending().await?;
    info!("{} students with pending fees", views.len());
    Ok(Json(StudentMapper::to_dto_list(views)))
}

/// Enroll a new student
pub async fn add_student(
    State(app_state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<CreateStudentResponse>), ApiError> {
    info!("POST /api/students - name: {:?}", request.name);

    let command = StudentMapper::to_add_command(request);
    let view = app_state.fee_ledger_service.add_student(command).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateStudentResponse {
            message: "Student added successfully".to_string(),
            student: StudentMapper::to_dto(view),
        }),
    ))
}

/// Delete a student and their payments; the admin password confirms it
pub async fn delete_student(
    State(app_state): State<AppState>,
    Path(student_id): Path<StudentId>,
    request: Option<Json<DeleteStudentRequest>>,
) -> Result<Json<MessageResponse>, ApiError> {
    info!("DELETE /api/students/{}", student_id);

    let password = request.and_then(|Json(body)| body.password);
    if !app_state.admin_auth_service.confirm_deletion(password.as_deref()) {
        warn!("Refusing to delete student {}: bad confirmation", student_id);
        return Err(ApiError::Unauthorized("Incorrect password"));
    }

    app_state.fee_ledger_service.delete_student(student_id).await?;

    Ok(Json(MessageResponse {
        message: format!(
            "Student with ID {} and all related payments deleted successfully",
            student_id
        ),
    }))
}
