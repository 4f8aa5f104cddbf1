//! # In-Memory Store
//!
//! [`MemoryStore`] keeps every record behind one `tokio::sync::RwLock`. When
//! a snapshot path is configured, the whole data set is written to that file
//! as JSON after each successful write and loaded back on [`MemoryStore::open`].
//!
//! Writers stage their change on a copy of the data and swap it in only once
//! the snapshot has been written, so a failed write leaves the store as it was.
//! Ids come from per-table counters and are never reused after a delete.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uiforge_core::{ComponentId, ProjectId, Timestamped, UserId};
use uiforge_ir::{ElementKind, empty_document_json};

use crate::error::{StoreError, StoreResult};
use crate::model::{
    ComponentUpdate, NewComponent, NewProject, NewUser, Project, ProjectUpdate,
    ReusableComponent, User, UserUpdate,
};
use crate::store::{ComponentStore, ProjectStore, UserStore};

// ============================================================================
// Configuration
// ============================================================================

/// Store configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreConfig {
    /// JSON file mirroring the store contents; purely in-memory when `None`
    pub snapshot_path: Option<PathBuf>,
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.snapshot_path = Some(path.into());
        self
    }
}

// ============================================================================
// Data
// ============================================================================

/// Everything the store holds; also the snapshot file format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    users: Vec<User>,
    #[serde(default)]
    projects: Vec<Project>,
    #[serde(default)]
    components: Vec<ReusableComponent>,
    #[serde(default)]
    last_user_id: UserId,
    #[serde(default)]
    last_project_id: ProjectId,
    #[serde(default)]
    last_component_id: ComponentId,
}

/// Advance `last` past every id in use and return the new value
fn next_id(last: &mut i64, ids: impl Iterator<Item = i64>) -> i64 {
    let id = (*last).max(ids.max().unwrap_or(0)) + 1;
    *last = id;
    id
}

impl StoreData {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    fn ensure_user(&self, id: UserId) -> StoreResult<()> {
        self.user(id).map(|_| ()).ok_or(StoreError::UserNotFound(id))
    }

    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.users
            .iter()
            .any(|u| u.email == email && Some(u.id) != except)
    }

    fn owned_project_mut(&mut self, id: ProjectId, owner: UserId) -> StoreResult<&mut Project> {
        self.projects
            .iter_mut()
            .find(|p| p.id == id && p.user_id == owner)
            .ok_or(StoreError::ProjectNotFound(id))
    }

    fn owned_component_mut(
        &mut self,
        id: ComponentId,
        owner: UserId,
    ) -> StoreResult<&mut ReusableComponent> {
        self.components
            .iter_mut()
            .find(|c| c.id == id && c.user_id == owner)
            .ok_or(StoreError::ComponentNotFound(id))
    }
}

// ============================================================================
// Input Validation
// ============================================================================

fn validate_email(email: &str) -> StoreResult<()> {
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidEmail(email.to_string()))
    }
}

/// Component properties must be a JSON object
fn validate_properties(properties: &str) -> StoreResult<()> {
    let value: serde_json::Value = serde_json::from_str(properties)
        .map_err(|e| StoreError::InvalidProperties(e.to_string()))?;
    if value.is_object() {
        Ok(())
    } else {
        Err(StoreError::InvalidProperties(
            "expected a JSON object".to_string(),
        ))
    }
}

fn validate_kind(kind: &ElementKind) -> StoreResult<()> {
    if kind.is_library_type() {
        Ok(())
    } else {
        Err(StoreError::InvalidComponentType(kind.to_string()))
    }
}

// ============================================================================
// Memory Store
// ============================================================================

/// In-process store with optional JSON persistence
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<StoreData>,
    snapshot_path: Option<PathBuf>,
}

impl MemoryStore {
    /// An empty store that never touches the filesystem
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a store, loading the snapshot file if one is configured and exists
    pub async fn open(config: StoreConfig) -> StoreResult<Self> {
        let data = match &config.snapshot_path {
            Some(path) => load_snapshot(path).await?,
            None => StoreData::default(),
        };
        tracing::info!(
            users = data.users.len(),
            projects = data.projects.len(),
            components = data.components.len(),
            "Opened store"
        );
        Ok(Self {
            data: RwLock::new(data),
            snapshot_path: config.snapshot_path,
        })
    }

    /// The configured snapshot file, if any
    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    async fn persist(&self, data: &StoreData) -> StoreResult<()> {
        let Some(path) = &self.snapshot_path else {
            return Ok(());
        };
        let json = serde_json::to_vec_pretty(data)?;
        let io_err = |source| StoreError::Io {
            path: path.clone(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        tokio::fs::write(path, json).await.map_err(io_err)?;
        tracing::debug!(path = %path.display(), "Wrote store snapshot");
        Ok(())
    }

    /// Persist `staged`, then make it the live data
    async fn commit(&self, data: &mut StoreData, staged: StoreData) -> StoreResult<()> {
        self.persist(&staged).await?;
        *data = staged;
        Ok(())
    }
}

async fn load_snapshot(path: &Path) -> StoreResult<StoreData> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoreData::default()),
        Err(source) => Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, input: NewUser) -> StoreResult<User> {
        validate_email(&input.email)?;
        let mut data = self.data.write().await;
        if data.email_taken(&input.email, None) {
            return Err(StoreError::DuplicateEmail(input.email));
        }

        let mut staged = data.clone();
        let now = Utc::now();
        let user = User {
            id: next_id(&mut staged.last_user_id, staged.users.iter().map(|u| u.id)),
            email: input.email,
            name: input.name,
            google_id: input.google_id,
            created_at: now,
            updated_at: now,
        };
        staged.users.push(user.clone());
        self.commit(&mut data, staged).await?;

        tracing::info!(id = user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn user_by_id(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.data.read().await.user(id).cloned())
    }

    async fn user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let data = self.data.read().await;
        Ok(data.users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> StoreResult<User> {
        let mut data = self.data.write().await;
        data.ensure_user(id)?;
        if let Some(email) = &update.email {
            validate_email(email)?;
            if data.email_taken(email, Some(id)) {
                return Err(StoreError::DuplicateEmail(email.clone()));
            }
        }

        let mut staged = data.clone();
        let user = staged
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(StoreError::UserNotFound(id))?;
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(google_id) = update.google_id {
            user.google_id = google_id;
        }
        user.touch();
        let user = user.clone();
        self.commit(&mut data, staged).await?;

        tracing::info!(id, "Updated user");
        Ok(user)
    }
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list_projects(&self, owner_id: UserId) -> StoreResult<Vec<Project>> {
        let data = self.data.read().await;
        Ok(data
            .projects
            .iter()
            .filter(|p| p.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn create_project(&self, owner_id: UserId, input: NewProject) -> StoreResult<Project> {
        let mut data = self.data.write().await;
        data.ensure_user(owner_id)?;

        let mut staged = data.clone();
        let now = Utc::now();
        let project = Project {
            id: next_id(&mut staged.last_project_id, staged.projects.iter().map(|p| p.id)),
            user_id: owner_id,
            name: input.name,
            description: input.description,
            canvas_data: input.canvas_data.unwrap_or_else(empty_document_json),
            is_public: input.is_public,
            created_at: now,
            updated_at: now,
        };
        staged.projects.push(project.clone());
        self.commit(&mut data, staged).await?;

        tracing::info!(id = project.id, owner = owner_id, name = %project.name, "Created project");
        Ok(project)
    }

    async fn load_project(
        &self,
        project_id: ProjectId,
        requester_id: UserId,
    ) -> StoreResult<Option<Project>> {
        let data = self.data.read().await;
        Ok(data
            .projects
            .iter()
            .find(|p| p.id == project_id && p.is_readable_by(requester_id))
            .cloned())
    }

    async fn save_project(
        &self,
        project_id: ProjectId,
        owner_id: UserId,
        canvas_data: String,
    ) -> StoreResult<Project> {
        let mut data = self.data.write().await;
        let mut staged = data.clone();
        let project = staged.owned_project_mut(project_id, owner_id)?;
        project.canvas_data = canvas_data;
        project.touch();
        let project = project.clone();
        self.commit(&mut data, staged).await?;

        tracing::info!(id = project_id, bytes = project.canvas_data.len(), "Saved project");
        Ok(project)
    }

    async fn update_project(
        &self,
        project_id: ProjectId,
        owner_id: UserId,
        update: ProjectUpdate,
    ) -> StoreResult<Project> {
        let mut data = self.data.write().await;
        let mut staged = data.clone();
        let project = staged.owned_project_mut(project_id, owner_id)?;
        if let Some(name) = update.name {
            project.name = name;
        }
        if let Some(description) = update.description {
            project.description = description;
        }
        if let Some(canvas_data) = update.canvas_data {
            project.canvas_data = canvas_data;
        }
        if let Some(is_public) = update.is_public {
            project.is_public = is_public;
        }
        project.touch();
        let project = project.clone();
        self.commit(&mut data, staged).await?;

        tracing::info!(id = project_id, "Updated project");
        Ok(project)
    }

    async fn delete_project(&self, project_id: ProjectId, owner_id: UserId) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        let mut staged = data.clone();
        staged
            .projects
            .retain(|p| !(p.id == project_id && p.user_id == owner_id));
        let deleted = staged.projects.len() < data.projects.len();
        if deleted {
            self.commit(&mut data, staged).await?;
            tracing::info!(id = project_id, "Deleted project");
        }
        Ok(deleted)
    }
}

#[async_trait]
impl ComponentStore for MemoryStore {
    async fn create_component(
        &self,
        owner_id: UserId,
        input: NewComponent,
    ) -> StoreResult<ReusableComponent> {
        validate_kind(&input.kind)?;
        validate_properties(&input.properties)?;
        let mut data = self.data.write().await;
        data.ensure_user(owner_id)?;

        let mut staged = data.clone();
        let now = Utc::now();
        let component = ReusableComponent {
            id: next_id(
                &mut staged.last_component_id,
                staged.components.iter().map(|c| c.id),
            ),
            user_id: owner_id,
            name: input.name,
            kind: input.kind,
            properties: input.properties,
            is_global: input.is_global,
            created_at: now,
            updated_at: now,
        };
        staged.components.push(component.clone());
        self.commit(&mut data, staged).await?;

        tracing::info!(id = component.id, kind = %component.kind, "Created component");
        Ok(component)
    }

    async fn components_for_user(&self, user_id: UserId) -> StoreResult<Vec<ReusableComponent>> {
        let data = self.data.read().await;
        Ok(data
            .components
            .iter()
            .filter(|c| c.user_id == user_id || c.is_global)
            .cloned()
            .collect())
    }

    async fn global_components(&self) -> StoreResult<Vec<ReusableComponent>> {
        let data = self.data.read().await;
        Ok(data
            .components
            .iter()
            .filter(|c| c.is_global)
            .cloned()
            .collect())
    }

    async fn update_component(
        &self,
        component_id: ComponentId,
        owner_id: UserId,
        update: ComponentUpdate,
    ) -> StoreResult<ReusableComponent> {
        if let Some(kind) = &update.kind {
            validate_kind(kind)?;
        }
        if let Some(properties) = &update.properties {
            validate_properties(properties)?;
        }

        let mut data = self.data.write().await;
        let mut staged = data.clone();
        let component = staged.owned_component_mut(component_id, owner_id)?;
        if let Some(name) = update.name {
            component.name = name;
        }
        if let Some(kind) = update.kind {
            component.kind = kind;
        }
        if let Some(properties) = update.properties {
            component.properties = properties;
        }
        if let Some(is_global) = update.is_global {
            component.is_global = is_global;
        }
        component.touch();
        let component = component.clone();
        self.commit(&mut data, staged).await?;

        tracing::info!(id = component_id, "Updated component");
        Ok(component)
    }

    async fn delete_component(
        &self,
        component_id: ComponentId,
        owner_id: UserId,
    ) -> StoreResult<bool> {
        let mut data = self.data.write().await;
        let mut staged = data.clone();
        staged
            .components
            .retain(|c| !(c.id == component_id && c.user_id == owner_id));
        let deleted = staged.components.len() < data.components.len();
        if deleted {
            self.commit(&mut data, staged).await?;
            tracing::info!(id = component_id, "Deleted component");
        }
        Ok(deleted)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    async fn store_with_users() -> (MemoryStore, User, User) {
        let store = MemoryStore::new();
        let alice = store
            .create_user(NewUser::new("alice@example.com", "Alice"))
            .await
            .unwrap();
        let bob = store
            .create_user(NewUser::new("bob@example.com", "Bob"))
            .await
            .unwrap();
        (store, alice, bob)
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("demo@example.com").is_ok());
        assert!(validate_email("demo").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("demo@localhost").is_err());
        assert!(validate_email("a@b@c.com").is_err());
    }

    #[test]
    fn test_validate_properties() {
        assert!(validate_properties(r#"{"text":"Go"}"#).is_ok());
        assert!(validate_properties("{}").is_ok());
        assert!(matches!(
            validate_properties("{not json"),
            Err(StoreError::InvalidProperties(_))
        ));
        assert!(matches!(
            validate_properties("[1,2]"),
            Err(StoreError::InvalidProperties(_))
        ));
    }

    #[tokio::test]
    async fn test_create_user_rejects_duplicate_email() {
        let (store, alice, _) = store_with_users().await;
        assert_eq!(alice.id, 1);

        let err = store
            .create_user(NewUser::new("alice@example.com", "Other Alice"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn test_user_lookup_and_update() {
        let (store, alice, bob) = store_with_users().await;

        let found = store.user_by_email("bob@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(bob.id));
        assert!(store.user_by_email("carol@example.com").await.unwrap().is_none());
        assert!(store.user_by_id(99).await.unwrap().is_none());

        let updated = store
            .update_user(
                alice.id,
                UserUpdate {
                    name: Some("Alice B.".into()),
                    google_id: Some(Some("g-123".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Alice B.");
        assert_eq!(updated.email, "alice@example.com");
        assert_eq!(updated.google_id.as_deref(), Some("g-123"));

        let clash = UserUpdate {
            email: Some("bob@example.com".into()),
            ..Default::default()
        };
        assert!(matches!(
            store.update_user(alice.id, clash).await,
            Err(StoreError::DuplicateEmail(_))
        ));
        assert!(matches!(
            store.update_user(42, UserUpdate::default()).await,
            Err(StoreError::UserNotFound(42))
        ));
    }

    #[tokio::test]
    async fn test_create_project_defaults() {
        let (store, alice, _) = store_with_users().await;
        let project = store
            .create_project(alice.id, NewProject::new("Landing"))
            .await
            .unwrap();

        assert_eq!(project.user_id, alice.id);
        assert_eq!(project.canvas_data, empty_document_json());
        assert!(!project.is_public);
        assert!(project.description.is_none());
    }

    #[tokio::test]
    async fn test_create_project_requires_existing_user() {
        let store = MemoryStore::new();
        let err = store
            .create_project(5, NewProject::new("Orphan"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(5)));
    }

    #[tokio::test]
    async fn test_list_projects_only_returns_owned() {
        let (store, alice, bob) = store_with_users().await;
        store.create_project(alice.id, NewProject::new("A1")).await.unwrap();
        store.create_project(bob.id, NewProject::new("B1")).await.unwrap();
        store.create_project(alice.id, NewProject::new("A2")).await.unwrap();

        let names: Vec<String> = store
            .list_projects(alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["A1", "A2"]);
    }

    #[tokio::test]
    async fn test_load_project_visibility() {
        let (store, alice, bob) = store_with_users().await;
        let private = store
            .create_project(alice.id, NewProject::new("Private"))
            .await
            .unwrap();
        let public = store
            .create_project(alice.id, NewProject::new("Public").public())
            .await
            .unwrap();

        assert!(store.load_project(private.id, alice.id).await.unwrap().is_some());
        assert!(store.load_project(private.id, bob.id).await.unwrap().is_none());
        assert!(store.load_project(public.id, bob.id).await.unwrap().is_some());
        assert!(store.load_project(999, alice.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_project_owner_only() {
        let (store, alice, bob) = store_with_users().await;
        let project = store
            .create_project(alice.id, NewProject::new("Shared").public())
            .await
            .unwrap();

        let saved = store
            .save_project(project.id, alice.id, r#"{"elements":[]}"#.into())
            .await
            .unwrap();
        assert_eq!(saved.canvas_data, r#"{"elements":[]}"#);
        assert!(saved.updated_at >= project.updated_at);

        let err = store
            .save_project(project.id, bob.id, "{}".into())
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::ProjectNotFound(id) if id == project.id));

        let reloaded = store.load_project(project.id, bob.id).await.unwrap().unwrap();
        assert_eq!(reloaded.canvas_data, r#"{"elements":[]}"#);
    }

    #[tokio::test]
    async fn test_update_project_partial() {
        let (store, alice, _) = store_with_users().await;
        let project = store
            .create_project(alice.id, NewProject::new("Draft").with_description("wip"))
            .await
            .unwrap();

        let updated = store
            .update_project(
                project.id,
                alice.id,
                ProjectUpdate {
                    name: Some("Final".into()),
                    description: Some(None),
                    is_public: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Final");
        assert!(updated.description.is_none());
        assert!(updated.is_public);
        assert_eq!(updated.canvas_data, project.canvas_data);
    }

    #[tokio::test]
    async fn test_delete_project() {
        let (store, alice, bob) = store_with_users().await;
        let project = store
            .create_project(alice.id, NewProject::new("Temp"))
            .await
            .unwrap();

        assert!(!store.delete_project(project.id, bob.id).await.unwrap());
        assert!(store.delete_project(project.id, alice.id).await.unwrap());
        assert!(!store.delete_project(project.id, alice.id).await.unwrap());
        assert!(store.list_projects(alice.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let (store, alice, _) = store_with_users().await;
        let first = store
            .create_project(alice.id, NewProject::new("First"))
            .await
            .unwrap();
        let newest = store
            .create_project(alice.id, NewProject::new("Newest"))
            .await
            .unwrap();
        assert!(store.delete_project(newest.id, alice.id).await.unwrap());

        let next = store
            .create_project(alice.id, NewProject::new("Next"))
            .await
            .unwrap();
        assert_eq!(next.id, newest.id + 1);
        assert!(next.id > first.id);

        let card = store
            .create_component(alice.id, NewComponent::new("Card", "card"))
            .await
            .unwrap();
        assert!(store.delete_component(card.id, alice.id).await.unwrap());
        let again = store
            .create_component(alice.id, NewComponent::new("Card again", "card"))
            .await
            .unwrap();
        assert_eq!(again.id, card.id + 1);
    }

    #[tokio::test]
    async fn test_component_validation() {
        let (store, alice, _) = store_with_users().await;

        let err = store
            .create_component(alice.id, NewComponent::new("Nav", "menu"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidComponentType(_)));

        let err = store
            .create_component(
                alice.id,
                NewComponent::new("Broken", "button").with_properties("{oops"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidProperties(_)));

        let err = store
            .create_component(99, NewComponent::new("Ghost", "button"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UserNotFound(99)));
    }

    #[tokio::test]
    async fn test_global_components_visible_to_all() {
        let (store, alice, bob) = store_with_users().await;
        store
            .create_component(alice.id, NewComponent::new("Alice private", "card"))
            .await
            .unwrap();
        store
            .create_component(alice.id, NewComponent::new("Shared CTA", "button").global())
            .await
            .unwrap();
        store
            .create_component(bob.id, NewComponent::new("Bob private", "input"))
            .await
            .unwrap();

        let names = |list: Vec<ReusableComponent>| -> Vec<String> {
            list.into_iter().map(|c| c.name).collect()
        };
        assert_eq!(
            names(store.components_for_user(bob.id).await.unwrap()),
            vec!["Shared CTA", "Bob private"]
        );
        assert_eq!(
            names(store.global_components().await.unwrap()),
            vec!["Shared CTA"]
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_component_owner_only() {
        let (store, alice, bob) = store_with_users().await;
        let component = store
            .create_component(alice.id, NewComponent::new("Hero", "card").global())
            .await
            .unwrap();

        let denied = store
            .update_component(component.id, bob.id, ComponentUpdate::default())
            .await;
        assert!(matches!(denied, Err(StoreError::ComponentNotFound(_))));

        let updated = store
            .update_component(
                component.id,
                alice.id,
                ComponentUpdate {
                    kind: Some(ElementKind::Container),
                    properties: Some(r#"{"padding":"8px"}"#.into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.kind, ElementKind::Container);
        assert_eq!(updated.name, "Hero");

        assert!(!store.delete_component(component.id, bob.id).await.unwrap());
        assert!(store.delete_component(component.id, alice.id).await.unwrap());
        assert!(store.global_components().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("store.json");
        let config = StoreConfig::new().with_snapshot_path(&path);

        {
            let store = MemoryStore::open(config.clone()).await.unwrap();
            let user = store
                .create_user(NewUser::new("demo@example.com", "Demo User"))
                .await
                .unwrap();
            store
                .create_project(user.id, NewProject::new("Persisted"))
                .await
                .unwrap();
        }
        assert!(path.exists());

        let store = MemoryStore::open(config).await.unwrap();
        let user = store.user_by_email("demo@example.com").await.unwrap().unwrap();
        let projects = store.list_projects(user.id).await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "Persisted");

        // ids keep counting from the loaded data
        let second = store
            .create_project(user.id, NewProject::new("Second"))
            .await
            .unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_failed_snapshot_write_keeps_store_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        let store = MemoryStore::open(StoreConfig::new().with_snapshot_path(&path))
            .await
            .unwrap();
        let alice = store
            .create_user(NewUser::new("alice@example.com", "Alice"))
            .await
            .unwrap();
        let project = store
            .create_project(alice.id, NewProject::new("Landing"))
            .await
            .unwrap();

        // a directory in place of the snapshot file makes every write fail
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        let created = store
            .create_user(NewUser::new("bob@example.com", "Bob"))
            .await;
        assert!(matches!(created, Err(StoreError::Io { .. })));
        assert!(store.user_by_email("bob@example.com").await.unwrap().is_none());

        let created = store
            .create_project(alice.id, NewProject::new("Retry me"))
            .await;
        assert!(created.is_err());
        assert_eq!(store.list_projects(alice.id).await.unwrap().len(), 1);

        let saved = store
            .save_project(project.id, alice.id, "{}".to_string())
            .await;
        assert!(saved.is_err());
        let loaded = store.load_project(project.id, alice.id).await.unwrap().unwrap();
        assert_eq!(loaded.canvas_data, project.canvas_data);

        assert!(store.delete_project(project.id, alice.id).await.is_err());
        assert_eq!(store.list_projects(alice.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        let result = MemoryStore::open(StoreConfig::new().with_snapshot_path(&path)).await;
        assert!(matches!(result, Err(StoreError::Json(_))));
    }
}
