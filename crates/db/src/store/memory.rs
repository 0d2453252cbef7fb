use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use survey_core::equipment::KNOWN_EQUIPMENT;
use survey_core::project::ProjectDraft;
use survey_core::status::ProjectStatus;
use survey_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;

use super::{LookupStore, ProjectStore, StoreError};
use crate::models::lookup::{Equipment, Status, User};
use crate::models::project::Project;

/// Users seeded into a fresh store.
const SEED_USERS: &[&str] = &["管理者"];

/// In-process store with the same contract as [`super::PgStore`].
///
/// Data lives only as long as the process.
pub struct MemoryStore {
    state: RwLock<State>,
    equipment: Vec<Equipment>,
    statuses: Vec<Status>,
    users: Vec<User>,
}

struct State {
    next_id: DbId,
    last_stamp: Option<Timestamp>,
    projects: BTreeMap<DbId, Project>,
}

impl State {
    /// Strictly increasing clock so `updated_at` ordering is total.
    fn stamp(&mut self) -> Timestamp {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty project table with seeded master data.
    pub fn new() -> Self {
        let equipment = KNOWN_EQUIPMENT
            .iter()
            .zip(1..)
            .map(|(name, id)| Equipment {
                id,
                name: (*name).to_string(),
            })
            .collect();

        let statuses = ProjectStatus::ALL
            .iter()
            .zip(1..)
            .map(|(status, id)| Status {
                id,
                name: status.as_str().to_string(),
                sort_order: status.sort_order(),
            })
            .collect();

        let users = SEED_USERS
            .iter()
            .zip(1..)
            .map(|(name, id)| User {
                id,
                name: (*name).to_string(),
            })
            .collect();

        Self {
            state: RwLock::new(State {
                next_id: 1,
                last_stamp: None,
                projects: BTreeMap::new(),
            }),
            equipment,
            statuses,
            users,
        }
    }
}

fn apply(project: &mut Project, draft: &ProjectDraft) {
    project.status = draft.status;
    project.company_name = draft.company_name.clone();
    project.site_name = draft.site_name.clone();
    project.equipment = draft.equipment.clone();
    project.client_contact = draft.client_contact.clone();
    project.photographer = draft.photographer.clone();
    project.shoot_period = draft.shoot_period.clone();
    project.start_date = draft.start_date;
    project.end_date = draft.end_date;
    project.drawing_model = draft.drawing_model.clone();
    project.remarks = draft.remarks.clone();
    project.site_address = draft.site_address.clone();
}

#[async_trait]
impl ProjectStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        let state = self.state.read().await;
        let mut projects: Vec<Project> = state.projects.values().cloned().collect();
        projects.sort_by(|a, b| b.updated_at.cmp(&a.updated_at).then(b.id.cmp(&a.id)));
        Ok(projects)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(self.state.read().await.projects.get(&id).cloned())
    }

    async fn create(&self, draft: &ProjectDraft, created_by: &str) -> Result<Project, StoreError> {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let now = state.stamp();

        let mut project = Project {
            id,
            status: draft.status,
            company_name: String::new(),
            site_name: String::new(),
            equipment: String::new(),
            client_contact: None,
            photographer: None,
            shoot_period: None,
            start_date: None,
            end_date: None,
            drawing_model: None,
            remarks: None,
            site_address: None,
            created_at: now,
            updated_at: now,
            created_by: created_by.to_string(),
            updated_by: created_by.to_string(),
        };
        apply(&mut project, draft);

        state.projects.insert(id, project.clone());
        tracing::debug!(project_id = id, "Project stored in memory");
        Ok(project)
    }

    async fn update(
        &self,
        id: DbId,
        draft: &ProjectDraft,
        updated_by: &str,
    ) -> Result<Option<Project>, StoreError> {
        let mut state = self.state.write().await;
        if !state.projects.contains_key(&id) {
            tracing::debug!(project_id = id, "Update matched no project");
            return Ok(None);
        }
        let now = state.stamp();

        let Some(project) = state.projects.get_mut(&id) else {
            return Ok(None);
        };
        apply(project, draft);
        project.updated_by = updated_by.to_string();
        project.updated_at = now;
        Ok(Some(project.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, StoreError> {
        let removed = self.state.write().await.projects.remove(&id).is_some();
        if !removed {
            tracing::debug!(project_id = id, "Delete matched no project");
        }
        Ok(removed)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[async_trait]
impl LookupStore for MemoryStore {
    async fn list_equipment(&self) -> Result<Vec<Equipment>, StoreError> {
        Ok(self.equipment.clone())
    }

    async fn list_statuses(&self) -> Result<Vec<Status>, StoreError> {
        Ok(self.statuses.clone())
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.users.clone())
    }
}
