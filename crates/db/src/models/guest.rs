//! Guest entity model.

use lateshow_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `guests` table. Serializes directly as the guest summary
/// used in list responses and nested appearance payloads.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Guest {
    pub id: DbId,
    pub name: String,
    pub occupation: String,
}

/// DTO for creating a new guest (seed binary and test setup only).
///
/// Name and occupation content is not trimmed or validated; any non-empty
/// assignment succeeds.
#[derive(Debug, Clone)]
pub struct CreateGuest {
    pub name: String,
    pub occupation: String,
}
