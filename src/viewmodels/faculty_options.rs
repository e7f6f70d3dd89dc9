// Opciones del desplegable de profesor en el formulario de clases

use crate::models::UserRecord;
use crate::services::ApiError;
use crate::state::{Alert, AppContext};
use crate::utils::constants::FACULTY_PLACEHOLDER;

const FACULTY_PATH: &str = "/users?type=faculty";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacultyOption {
    /// Vacío para el placeholder
    pub id: String,
    pub label: String,
}

impl FacultyOption {
    pub fn placeholder() -> Self {
        Self {
            id: String::new(),
            label: FACULTY_PLACEHOLDER.to_string(),
        }
    }
}

/// Placeholder + un option por profesor
pub fn faculty_select_options(faculty: &[UserRecord]) -> Vec<FacultyOption> {
    std::iter::once(FacultyOption::placeholder())
        .chain(faculty.iter().map(|user| FacultyOption {
            id: user.id.clone(),
            label: user.username.clone(),
        }))
        .collect()
}

/// GET de profesores. En fallo devuelve solo el placeholder y la alerta a mostrar.
pub async fn load_faculty_options(ctx: &AppContext) -> (Vec<FacultyOption>, Option<Alert>) {
    match fetch_faculty(ctx).await {
        Ok(faculty) => {
            log::info!("👩‍🏫 [FACULTY] {} profesores", faculty.len());
            (faculty_select_options(&faculty), None)
        }
        Err(e) => {
            let alert = ctx.surface_error(&e, "Error loading faculties: ");
            (vec![FacultyOption::placeholder()], alert)
        }
    }
}

async fn fetch_faculty(ctx: &AppContext) -> Result<Vec<UserRecord>, ApiError> {
    ctx.api.get(FACULTY_PATH, "Failed to load faculties").await
}
