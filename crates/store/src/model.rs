//! # Store Records
//!
//! Users, projects and reusable components, plus the input structs used to
//! create and partially update them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uiforge_core::{ComponentId, ProjectId, Timestamped, UserId};
use uiforge_ir::ElementKind;

// ============================================================================
// User
// ============================================================================

/// A registered user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub google_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub google_id: Option<String>,
}

impl NewUser {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            google_id: None,
        }
    }

    pub fn with_google_id(mut self, google_id: impl Into<String>) -> Self {
        self.google_id = Some(google_id.into());
        self
    }
}

/// Partial update of a user; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub email: Option<String>,
    pub name: Option<String>,
    /// `Some(None)` clears the Google id
    pub google_id: Option<Option<String>>,
}

// ============================================================================
// Project
// ============================================================================

/// A saved canvas owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub user_id: UserId,
    pub name: String,
    pub description: Option<String>,
    /// Serialized canvas document
    pub canvas_data: String,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether `user_id` may read this project
    pub fn is_readable_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id || self.is_public
    }
}

/// Input for creating a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    /// Initial canvas; the empty document when `None`
    pub canvas_data: Option<String>,
    pub is_public: bool,
}

impl NewProject {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_canvas_data(mut self, canvas_data: impl Into<String>) -> Self {
        self.canvas_data = Some(canvas_data.into());
        self
    }

    pub fn public(mut self) -> Self {
        self.is_public = true;
        self
    }
}

/// Partial update of a project
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    /// `Some(None)` clears the description
    pub description: Option<Option<String>>,
    pub canvas_data: Option<String>,
    pub is_public: Option<bool>,
}

// ============================================================================
// Reusable Component
// ============================================================================

/// A named, reusable property preset for one library element type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReusableComponent {
    pub id: ComponentId,
    pub user_id: UserId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    /// JSON object text
    pub properties: String,
    /// Visible to every user when set
    pub is_global: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a reusable component
#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    pub name: String,
    pub kind: ElementKind,
    pub properties: String,
    pub is_global: bool,
}

impl NewComponent {
    pub fn new(name: impl Into<String>, kind: impl Into<ElementKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            properties: "{}".to_string(),
            is_global: false,
        }
    }

    pub fn with_properties(mut self, properties: impl Into<String>) -> Self {
        self.properties = properties.into();
        self
    }

    pub fn global(mut self) -> Self {
        self.is_global = true;
        self
    }
}

/// Partial update of a reusable component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentUpdate {
    pub name: Option<String>,
    pub kind: Option<ElementKind>,
    pub properties: Option<String>,
    pub is_global: Option<bool>,
}

// ============================================================================
// Timestamps
// ============================================================================

macro_rules! impl_timestamped {
    ($($ty:ty),*) => {$(
        impl Timestamped for $ty {
            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn modified_at(&self) -> DateTime<Utc> {
                self.updated_at
            }

            fn touch(&mut self) {
                self.updated_at = Utc::now();
            }
        }
    )*};
}

impl_timestamped!(User, Project, ReusableComponent);

#[cfg(test)]
mod tests {
    use super::*;

    fn project(owner: UserId, public: bool) -> Project {
        let now = Utc::now();
        Project {
            id: 1,
            user_id: owner,
            name: "Landing".into(),
            description: None,
            canvas_data: "{}".into(),
            is_public: public,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_project_visibility() {
        assert!(project(1, false).is_readable_by(1));
        assert!(!project(1, false).is_readable_by(2));
        assert!(project(1, true).is_readable_by(2));
    }

    #[test]
    fn test_touch_bumps_updated_at() {
        let mut p = project(1, false);
        let before = p.modified_at();
        p.touch();
        assert!(p.modified_at() >= before);
        assert_eq!(p.created_at(), before);
    }

    #[test]
    fn test_component_serializes_type_field() {
        let now = Utc::now();
        let component = ReusableComponent {
            id: 3,
            user_id: 1,
            name: "Primary CTA".into(),
            kind: ElementKind::Button,
            properties: r#"{"variant":"default"}"#.into(),
            is_global: true,
            created_at: now,
            updated_at: now,
        };
        let json = serde_json::to_value(&component).unwrap();
        assert_eq!(json["type"], "button");

        let back: ReusableComponent = serde_json::from_value(json).unwrap();
        assert_eq!(back, component);
    }

    #[test]
    fn test_input_builders() {
        let p = NewProject::new("Shop").with_description("store front").public();
        assert_eq!(p.description.as_deref(), Some("store front"));
        assert!(p.is_public);
        assert!(p.canvas_data.is_none());

        let c = NewComponent::new("Hero", "card").global();
        assert_eq!(c.kind, ElementKind::Card);
        assert_eq!(c.properties, "{}");
        assert!(c.is_global);
    }
}
