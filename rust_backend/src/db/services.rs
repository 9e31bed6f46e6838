//! High-level service layer.
//!
//! The service layer is what views call. Each operation waits the configured
//! artificial latency and then delegates to the repository; not-found
//! failures come back as [`RepositoryError::NotFound`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Callers (dashboard binary, session, tests)              │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                             │
//! │  - Artificial latency per operation kind                 │
//! │  - Auth / ColdRoom / Maintenance / Report operation sets │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!          ┌──────────▼──────────────┐
//!          │ Local Repository        │
//!          │ (in-memory, seeded)     │
//!          └─────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use coldroom_rust::db::{services::ColdStoreApi, LatencyProfile, LocalRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = ColdStoreApi::new(LocalRepository::seeded(), LatencyProfile::default());
//!
//!     let rooms = api.cold_rooms().get_all().await?;
//!     println!("Found {} cold rooms", rooms.len());
//!
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use chrono::{Months, Utc};
use log::{info, warn};

use super::latency::{LatencyProfile, OperationKind};
use super::repository::{FullRepository, RepositoryError, RepositoryResult};
use crate::models::{
    ColdRoom, ColdRoomId, ColdRoomPatch, DateRange, MaintenanceId, MaintenanceRecord,
    MaintenanceStatus, NewMaintenanceRecord, Report, ReportFormat, ReportType, User, UserRole,
};

/// Name recorded on reports generated without a signed-in user.
pub const DEFAULT_REPORT_AUTHOR: &str = "Current User";

/// Entry point to the per-entity operation sets.
///
/// Cloning is cheap; clones share the repository.
#[derive(Clone)]
pub struct ColdStoreApi {
    repo: Arc<dyn FullRepository>,
    latency: LatencyProfile,
}

impl ColdStoreApi {
    pub fn new<R: FullRepository + 'static>(repo: R, latency: LatencyProfile) -> Self {
        Self::from_shared(Arc::new(repo), latency)
    }

    pub fn from_shared(repo: Arc<dyn FullRepository>, latency: LatencyProfile) -> Self {
        Self { repo, latency }
    }

    pub fn latency(&self) -> &LatencyProfile {
        &self.latency
    }

    pub fn repository(&self) -> &Arc<dyn FullRepository> {
        &self.repo
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { api: self }
    }

    pub fn cold_rooms(&self) -> ColdRoomApi<'_> {
        ColdRoomApi { api: self }
    }

    pub fn maintenance(&self) -> MaintenanceApi<'_> {
        MaintenanceApi { api: self }
    }

    pub fn reports(&self) -> ReportApi<'_> {
        ReportApi { api: self }
    }

    async fn wait(&self, op: OperationKind) {
        self.latency.wait(op).await;
    }
}

fn log_not_found(op: &'static str) -> impl FnOnce(&RepositoryError) {
    move |e| {
        if e.is_not_found() {
            warn!("Service layer: {} failed: {}", op, e);
        }
    }
}

// ==================== Auth ====================

pub struct AuthApi<'a> {
    api: &'a ColdStoreApi,
}

impl AuthApi<'_> {
    /// Look up the user registered under `email`.
    ///
    /// The password is accepted but never checked.
    ///
    /// # Returns
    /// * `Ok(User)` - The matching user
    /// * `Err(RepositoryError::NotFound)` - If no user has that email
    pub async fn login(&self, email: &str, _password: &str) -> RepositoryResult<User> {
        info!("Service layer: login for {}", email);
        self.api.wait(OperationKind::Write).await;
        self.api
            .repo
            .find_user_by_email(email)
            .await
            .inspect_err(log_not_found("login"))
    }

    /// Register a new user with empty permissions. Never fails on valid input;
    /// duplicate emails are accepted.
    pub async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
        role: UserRole,
    ) -> RepositoryResult<User> {
        info!("Service layer: registering {} as {}", email, role);
        self.api.wait(OperationKind::Write).await;
        self.api.repo.insert_user(email, name, role).await
    }
}

// ==================== Cold Rooms ====================

pub struct ColdRoomApi<'a> {
    api: &'a ColdStoreApi,
}

impl ColdRoomApi<'_> {
    pub async fn get_all(&self) -> RepositoryResult<Vec<ColdRoom>> {
        info!("Service layer: listing cold rooms");
        self.api.wait(OperationKind::List).await;
        self.api.repo.list_cold_rooms().await
    }

    /// Retrieve a cold room by id.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    pub async fn get_by_id(&self, id: impl Into<ColdRoomId>) -> RepositoryResult<ColdRoom> {
        let id = id.into();
        info!("Service layer: loading cold room {}", id);
        self.api.wait(OperationKind::Lookup).await;
        self.api
            .repo
            .get_cold_room(&id)
            .await
            .inspect_err(log_not_found("get cold room"))
    }

    /// Shallow-merge `patch` into the cold room. Any `updated_at` in the patch
    /// is dropped.
    ///
    /// # Returns
    /// * `Ok(ColdRoom)` - The record after the merge
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    pub async fn update(
        &self,
        id: impl Into<ColdRoomId>,
        patch: ColdRoomPatch,
    ) -> RepositoryResult<ColdRoom> {
        let id = id.into();
        info!("Service layer: updating cold room {}", id);
        if patch.updated_at.is_some() {
            warn!("Service layer: ignoring updatedAt in patch for cold room {}", id);
        }
        self.api.wait(OperationKind::Write).await;
        self.api
            .repo
            .update_cold_room(&id, patch)
            .await
            .inspect_err(log_not_found("update cold room"))
    }

    /// Same as [`update`](Self::update), with the patch given as JSON.
    ///
    /// # Returns
    /// * `Err(RepositoryError::ValidationError)` - If the JSON is not a valid patch
    pub async fn update_json(
        &self,
        id: impl Into<ColdRoomId>,
        json: &str,
    ) -> RepositoryResult<ColdRoom> {
        let patch = ColdRoomPatch::from_json(json).map_err(RepositoryError::ValidationError)?;
        self.update(id, patch).await
    }
}

// ==================== Maintenance ====================

pub struct MaintenanceApi<'a> {
    api: &'a ColdStoreApi,
}

impl MaintenanceApi<'_> {
    pub async fn get_all(&self) -> RepositoryResult<Vec<MaintenanceRecord>> {
        info!("Service layer: listing maintenance records");
        self.api.wait(OperationKind::List).await;
        self.api.repo.list_maintenance().await
    }

    /// Records for one cold room; empty when the room has no history.
    pub async fn get_by_cold_room(
        &self,
        cold_room_id: impl Into<ColdRoomId>,
    ) -> RepositoryResult<Vec<MaintenanceRecord>> {
        let cold_room_id = cold_room_id.into();
        info!(
            "Service layer: loading maintenance for cold room {}",
            cold_room_id
        );
        self.api.wait(OperationKind::Lookup).await;
        self.api.repo.maintenance_for_cold_room(&cold_room_id).await
    }

    /// Schedule a new maintenance record.
    pub async fn create(&self, record: NewMaintenanceRecord) -> RepositoryResult<MaintenanceRecord> {
        info!(
            "Service layer: scheduling maintenance for cold room {} on {}",
            record.cold_room_id, record.scheduled_date
        );
        self.api.wait(OperationKind::Write).await;
        self.api.repo.insert_maintenance(record).await
    }

    /// Move a record to `status`. Any status may follow any other.
    ///
    /// # Returns
    /// * `Err(RepositoryError::NotFound)` - If the id is unknown
    pub async fn update_status(
        &self,
        id: impl Into<MaintenanceId>,
        status: MaintenanceStatus,
    ) -> RepositoryResult<MaintenanceRecord> {
        let id = id.into();
        info!("Service layer: setting maintenance {} to {}", id, status);
        self.api.wait(OperationKind::Write).await;
        self.api
            .repo
            .set_maintenance_status(&id, status, Utc::now().date_naive())
            .await
            .inspect_err(log_not_found("update maintenance status"))
    }

    /// Mark a record completed today.
    pub async fn mark_complete(
        &self,
        id: impl Into<MaintenanceId>,
    ) -> RepositoryResult<MaintenanceRecord> {
        self.update_status(id, MaintenanceStatus::Completed).await
    }
}

// ==================== Reports ====================

pub struct ReportApi<'a> {
    api: &'a ColdStoreApi,
}

impl ReportApi<'_> {
    pub async fn get_all(&self) -> RepositoryResult<Vec<Report>> {
        info!("Service layer: listing reports");
        self.api.wait(OperationKind::List).await;
        self.api.repo.list_reports().await
    }

    /// Generate a report covering the month up to now, attributed to
    /// [`DEFAULT_REPORT_AUTHOR`].
    pub async fn generate(
        &self,
        report_type: ReportType,
        format: ReportFormat,
    ) -> RepositoryResult<Report> {
        self.generate_as(report_type, format, DEFAULT_REPORT_AUTHOR)
            .await
    }

    /// Generate a report covering the month up to now, attributed to `author`.
    ///
    /// Only a descriptor with a placeholder link is produced.
    pub async fn generate_as(
        &self,
        report_type: ReportType,
        format: ReportFormat,
        author: &str,
    ) -> RepositoryResult<Report> {
        info!(
            "Service layer: generating {} report as {} for {}",
            report_type, format, author
        );
        self.api.wait(OperationKind::Generate).await;
        let range = trailing_month(Utc::now());
        self.api
            .repo
            .insert_report(report_type, format, range, author)
            .await
    }
}

/// One-month window ending at `end`. Day-of-month is clamped, so
/// March 31 goes back to the last day of February.
pub fn trailing_month(end: chrono::DateTime<Utc>) -> DateRange {
    DateRange {
        start: end.checked_sub_months(Months::new(1)).unwrap_or(end),
        end,
    }
}
