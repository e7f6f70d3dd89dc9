// ============================================================================
// PRESENTERS - Lista de recursos -> modelo de vista (sin DOM)
// ============================================================================

use crate::models::{ClassRecord, UserRecord};

pub const NEUTRAL_BADGE: &str = "bg-gray-100 text-gray-800";

const CLASS_STATUS_BADGES: &[(&str, &str)] = &[
    ("active", "bg-green-100 text-green-800"),
    ("inactive", "bg-red-100 text-red-800"),
    ("pending", "bg-yellow-100 text-yellow-800"),
];

const USER_TYPE_BADGES: &[(&str, &str)] = &[
    ("admin", "bg-purple-100 text-purple-800"),
    ("faculty", "bg-blue-100 text-blue-800"),
    ("student", "bg-green-100 text-green-800"),
];

fn lookup_badge(table: &[(&str, &'static str)], value: &str) -> &'static str {
    table
        .iter()
        .find(|(key, _)| *key == value)
        .map(|(_, class)| *class)
        .unwrap_or(NEUTRAL_BADGE)
}

/// Estilo del badge de estado de una clase; valores desconocidos -> neutro
pub fn status_badge(status: &str) -> &'static str {
    lookup_badge(CLASS_STATUS_BADGES, status)
}

/// Estilo del badge de tipo de usuario; valores desconocidos -> neutro
pub fn user_type_badge(user_type: &str) -> &'static str {
    lookup_badge(USER_TYPE_BADGES, user_type)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub class: &'static str,
}

/// Tarjeta de un recurso en la lista
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
    pub title: String,
    /// Líneas secundarias bajo el título
    pub subtitle_lines: Vec<String>,
    /// Líneas del cuerpo de la tarjeta
    pub body_lines: Vec<String>,
    pub badge: Badge,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListView {
    Empty(&'static str),
    Cards(Vec<Card>),
}

pub trait Presentable {
    const EMPTY_MESSAGE: &'static str;

    fn card(&self) -> Card;
}

impl Presentable for ClassRecord {
    const EMPTY_MESSAGE: &'static str = "No classes found.";

    fn card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.name.clone(),
            subtitle_lines: vec![
                format!("Code: {}", self.code),
                format!("Faculty: {}", self.faculty_name),
            ],
            body_lines: vec![
                self.description.clone(),
                format!("Capacity: {}/{}", self.enrolled_students, self.capacity),
            ],
            badge: Badge {
                label: self.status.clone(),
                class: status_badge(&self.status),
            },
        }
    }
}

impl Presentable for UserRecord {
    const EMPTY_MESSAGE: &'static str = "No users found.";

    fn card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.username.clone(),
            subtitle_lines: vec![self.email.clone()],
            body_lines: Vec::new(),
            badge: Badge {
                label: self.user_type.clone(),
                class: user_type_badge(&self.user_type),
            },
        }
    }
}

pub fn present_list<R: Presentable>(items: &[R]) -> ListView {
    if items.is_empty() {
        return ListView::Empty(R::EMPTY_MESSAGE);
    }
    ListView::Cards(items.iter().map(Presentable::card).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_with_status(status: &str) -> ClassRecord {
        ClassRecord {
            id: "c1".into(),
            name: "Chemistry".into(),
            code: "CHE1".into(),
            description: "Labs".into(),
            capacity: 30,
            enrolled_students: 12,
            faculty_id: "f1".into(),
            faculty_name: "Marie".into(),
            status: status.into(),
        }
    }

    #[test]
    fn known_statuses_map_to_their_colors() {
        assert_eq!(status_badge("active"), "bg-green-100 text-green-800");
        assert_eq!(status_badge("inactive"), "bg-red-100 text-red-800");
        assert_eq!(status_badge("pending"), "bg-yellow-100 text-yellow-800");
    }

    #[test]
    fn unknown_values_fall_back_to_neutral() {
        assert_eq!(status_badge("cancelled"), NEUTRAL_BADGE);
        assert_eq!(status_badge(""), NEUTRAL_BADGE);
        assert_eq!(status_badge("Active"), NEUTRAL_BADGE);
        assert_eq!(user_type_badge("janitor"), NEUTRAL_BADGE);
    }

    #[test]
    fn user_types_map_to_their_colors() {
        assert_eq!(user_type_badge("admin"), "bg-purple-100 text-purple-800");
        assert_eq!(user_type_badge("faculty"), "bg-blue-100 text-blue-800");
        assert_eq!(user_type_badge("student"), "bg-green-100 text-green-800");
    }

    #[test]
    fn class_card_shows_enrollment_over_capacity() {
        let card = class_with_status("active").card();
        assert_eq!(card.title, "Chemistry");
        assert!(card.body_lines.contains(&"Capacity: 12/30".to_string()));
        assert!(card.subtitle_lines.contains(&"Faculty: Marie".to_string()));
        assert_eq!(card.badge.label, "active");
    }

    #[test]
    fn unknown_status_keeps_raw_label() {
        let card = class_with_status("archived").card();
        assert_eq!(card.badge, Badge { label: "archived".into(), class: NEUTRAL_BADGE });
    }

    #[test]
    fn empty_lists_show_their_message() {
        assert_eq!(present_list::<ClassRecord>(&[]), ListView::Empty("No classes found."));
        assert_eq!(present_list::<UserRecord>(&[]), ListView::Empty("No users found."));
    }
}
