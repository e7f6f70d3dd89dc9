// ============================================================================
// ROUTES - Tabla de páginas y resolución de rutas relativas
// ============================================================================
// Las rutas se resuelven contra una base que depende de la profundidad de la
// página actual: "" en la raíz, "../" por cada directorio de anidamiento.
// ============================================================================

use crate::models::UserType;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Login,
    Signup,
    AdminDashboard,
    FacultyDashboard,
    StudentDashboard,
    ManageClasses,
    ManageUsers,
}

/// Quién puede ver una página
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    /// Exige ese userType; otro usuario va a su propio dashboard
    Role(UserType),
    /// Pantalla de administración; quien no sea admin vuelve al login
    AdminScreen,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Login,
        Page::Signup,
        Page::AdminDashboard,
        Page::FacultyDashboard,
        Page::StudentDashboard,
        Page::ManageClasses,
        Page::ManageUsers,
    ];

    /// Ruta desde la raíz del sitio
    pub fn root_path(&self) -> &'static str {
        match self {
            Page::Login => "index.html",
            Page::Signup => "signup.html",
            Page::AdminDashboard => "admin-dashboard.html",
            Page::FacultyDashboard => "faculty-dashboard.html",
            Page::StudentDashboard => "student-dashboard.html",
            Page::ManageClasses => "admin/manage-classes.html",
            Page::ManageUsers => "admin/manage-users.html",
        }
    }

    pub fn depth(&self) -> usize {
        self.root_path().matches('/').count()
    }

    pub fn access(&self) -> Access {
        match self {
            Page::Login | Page::Signup => Access::Public,
            Page::AdminDashboard => Access::Role(UserType::Admin),
            Page::FacultyDashboard => Access::Role(UserType::Faculty),
            Page::StudentDashboard => Access::Role(UserType::Student),
            Page::ManageClasses | Page::ManageUsers => Access::AdminScreen,
        }
    }

    pub fn dashboard_for(user_type: UserType) -> Page {
        match user_type {
            UserType::Admin => Page::AdminDashboard,
            UserType::Faculty => Page::FacultyDashboard,
            UserType::Student => Page::StudentDashboard,
        }
    }

    /// Identificar la página a partir de `location.pathname`.
    /// Una ruta desconocida (o "/") se trata como el login.
    pub fn from_pathname(pathname: &str) -> Page {
        let mut segments = pathname.rsplit('/').filter(|s| !s.is_empty());
        let file = segments.next().unwrap_or_default();
        let parent = segments.next().unwrap_or_default();

        Page::ALL
            .into_iter()
            .find(|page| match page.root_path().split_once('/') {
                Some((dir, name)) => dir == parent && name == file,
                None => page.root_path() == file,
            })
            .unwrap_or(Page::Login)
    }
}

/// Tabla de rutas resuelta una vez al arrancar, para la página actual
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    current: Page,
    base: String,
}

impl RouteTable {
    pub fn for_page(current: Page) -> Self {
        Self {
            current,
            base: "../".repeat(current.depth()),
        }
    }

    pub fn current(&self) -> Page {
        self.current
    }

    pub fn base_path(&self) -> &str {
        &self.base
    }

    pub fn url_for(&self, target: Page) -> String {
        format!("{}{}", self.base, target.root_path())
    }

    pub fn dashboard_url(&self, user_type: UserType) -> String {
        self.url_for(Page::dashboard_for(user_type))
    }
}
