//! In-memory local repository implementation.
//!
//! All data lives in `Vec`s behind a single `RwLock`, preserving insertion
//! order. Every mutation (including the read-merge-write of a cold-room
//! update) happens under one write-lock acquisition, so concurrent updates on
//! the same record apply one after the other instead of overwriting each
//! other's fields.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use log::debug;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::db::fixtures::{self, Fixtures};
use crate::db::repository::*;
use crate::models::{
    ColdRoom, ColdRoomId, ColdRoomPatch, DateRange, MaintenanceId, MaintenanceRecord,
    MaintenanceStatus, NewMaintenanceRecord, Report, ReportFormat, ReportId, ReportType, User,
    UserId, UserRole,
};

/// In-memory local repository.
///
/// Cloning is cheap and shares the underlying store.
///
/// # Example
/// ```
/// use coldroom_rust::db::{ColdRoomRepository, LocalRepository};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let repo = LocalRepository::seeded();
/// let rooms = repo.list_cold_rooms().await.unwrap();
/// assert_eq!(rooms.len(), 2);
/// # }
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    users: Vec<User>,
    cold_rooms: Vec<ColdRoom>,
    maintenance: Vec<MaintenanceRecord>,
    reports: Vec<Report>,

    // ID counters
    next_user_id: usize,
    next_maintenance_id: usize,
    next_report_id: usize,
}

impl From<Fixtures> for LocalData {
    fn from(f: Fixtures) -> Self {
        Self {
            next_user_id: f.users.len() + 1,
            next_maintenance_id: f.maintenance.len() + 1,
            next_report_id: f.reports.len() + 1,
            users: f.users,
            cold_rooms: f.cold_rooms,
            maintenance: f.maintenance,
            reports: f.reports,
        }
    }
}

impl Default for LocalData {
    fn default() -> Self {
        Fixtures {
            users: Vec::new(),
            cold_rooms: Vec::new(),
            maintenance: Vec::new(),
            reports: Vec::new(),
        }
        .into()
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData::default())),
        }
    }

    /// Create a repository pre-populated with the fixture data set.
    pub fn seeded() -> Self {
        Self::with_fixtures(fixtures::seed(Utc::now()))
    }

    /// Create a repository holding exactly `fixtures`.
    pub fn with_fixtures(fixtures: Fixtures) -> Self {
        Self {
            data: Arc::new(RwLock::new(fixtures.into())),
        }
    }

    /// Add a cold room directly, bypassing the service layer.
    ///
    /// Used for setting up data; an existing room with the same id is replaced.
    pub fn insert_cold_room(&self, room: ColdRoom) -> RepositoryResult<()> {
        let mut data = self.write()?;
        match data.cold_rooms.iter_mut().find(|r| r.id == room.id) {
            Some(existing) => *existing = room,
            None => data.cold_rooms.push(room),
        }
        Ok(())
    }

    /// Clear all data from the repository and reset the id counters.
    pub fn clear(&self) -> RepositoryResult<()> {
        *self.write()? = LocalData::default();
        Ok(())
    }

    /// Get the number of cold rooms stored.
    pub fn cold_room_count(&self) -> usize {
        self.read().map(|d| d.cold_rooms.len()).unwrap_or(0)
    }

    fn read(&self) -> RepositoryResult<RwLockReadGuard<'_, LocalData>> {
        self.data
            .read()
            .map_err(|_| RepositoryError::InternalError("Store lock poisoned".to_string()))
    }

    fn write(&self) -> RepositoryResult<RwLockWriteGuard<'_, LocalData>> {
        self.data
            .write()
            .map_err(|_| RepositoryError::InternalError("Store lock poisoned".to_string()))
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for LocalRepository {
    async fn find_user_by_email(&self, email: &str) -> RepositoryResult<User> {
        let data = self.read()?;
        data.users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("No user with email {}", email)))
    }

    async fn insert_user(&self, email: &str, name: &str, role: UserRole) -> RepositoryResult<User> {
        let mut data = self.write()?;
        let now = Utc::now();
        let user = User {
            id: UserId::from(data.next_user_id),
            email: email.to_string(),
            name: name.to_string(),
            role,
            permissions: Default::default(),
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        data.next_user_id += 1;
        data.users.push(user.clone());
        debug!("Stored user {} ({})", user.id, user.email);
        Ok(user)
    }

    async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }
}

#[async_trait]
impl ColdRoomRepository for LocalRepository {
    async fn list_cold_rooms(&self) -> RepositoryResult<Vec<ColdRoom>> {
        Ok(self.read()?.cold_rooms.clone())
    }

    async fn get_cold_room(&self, id: &ColdRoomId) -> RepositoryResult<ColdRoom> {
        let data = self.read()?;
        data.cold_rooms
            .iter()
            .find(|r| &r.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Cold room {} not found", id)))
    }

    async fn update_cold_room(
        &self,
        id: &ColdRoomId,
        patch: ColdRoomPatch,
    ) -> RepositoryResult<ColdRoom> {
        let mut data = self.write()?;
        let room = data
            .cold_rooms
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Cold room {} not found", id)))?;
        room.apply_patch(patch);
        debug!("Merged patch into cold room {}", id);
        Ok(room.clone())
    }
}

#[async_trait]
impl MaintenanceRepository for LocalRepository {
    async fn list_maintenance(&self) -> RepositoryResult<Vec<MaintenanceRecord>> {
        Ok(self.read()?.maintenance.clone())
    }

    async fn maintenance_for_cold_room(
        &self,
        cold_room_id: &ColdRoomId,
    ) -> RepositoryResult<Vec<MaintenanceRecord>> {
        let data = self.read()?;
        Ok(data
            .maintenance
            .iter()
            .filter(|m| &m.cold_room_id == cold_room_id)
            .cloned()
            .collect())
    }

    async fn insert_maintenance(
        &self,
        record: NewMaintenanceRecord,
    ) -> RepositoryResult<MaintenanceRecord> {
        let mut data = self.write()?;
        let id = MaintenanceId::from(data.next_maintenance_id);
        data.next_maintenance_id += 1;
        let record = record.into_record(id, Utc::now());
        data.maintenance.push(record.clone());
        debug!(
            "Stored maintenance record {} for cold room {}",
            record.id, record.cold_room_id
        );
        Ok(record)
    }

    async fn set_maintenance_status(
        &self,
        id: &MaintenanceId,
        status: MaintenanceStatus,
        on: NaiveDate,
    ) -> RepositoryResult<MaintenanceRecord> {
        let mut data = self.write()?;
        let record = data
            .maintenance
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| {
                RepositoryError::NotFound(format!("Maintenance record {} not found", id))
            })?;
        record.completed_date = match status {
            MaintenanceStatus::Completed => record.completed_date.or(Some(on)),
            _ => None,
        };
        record.status = status;
        record.updated_at = Utc::now();
        debug!("Maintenance record {} is now {}", id, status);
        Ok(record.clone())
    }
}

#[async_trait]
impl ReportRepository for LocalRepository {
    async fn list_reports(&self) -> RepositoryResult<Vec<Report>> {
        Ok(self.read()?.reports.clone())
    }

    async fn insert_report(
        &self,
        report_type: ReportType,
        format: ReportFormat,
        date_range: DateRange,
        generated_by: &str,
    ) -> RepositoryResult<Report> {
        let mut data = self.write()?;
        let report = Report {
            id: ReportId::from(data.next_report_id),
            report_type,
            format,
            date_range,
            generated_by: generated_by.to_string(),
            created_at: Utc::now(),
            download_url: Some("#".to_string()),
        };
        data.next_report_id += 1;
        data.reports.push(report.clone());
        debug!("Stored {} report {} as {}", report_type, report.id, format);
        Ok(report)
    }
}
