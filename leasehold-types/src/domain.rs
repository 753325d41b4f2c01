/*
 * Copyright 2025 Leasehold Software
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Closed portal enumerations.
//!
//! These mirror the CHECK constraints in the database schema; the string
//! forms here and the values accepted by the constraints must stay in
//! lockstep.

use serde::{Deserialize, Serialize};

/// Account role. The schema accepts exactly these two values.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Tenant,
    Landlord,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Tenant => "tenant",
            UserRole::Landlord => "landlord",
        }
    }
}

/// Maintenance request lifecycle state.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaintenanceStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl MaintenanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::InProgress => "In Progress",
            MaintenanceStatus::Resolved => "Resolved",
            MaintenanceStatus::Closed => "Closed",
        }
    }
}

/// Maintenance request priority.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl MaintenancePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaintenancePriority::Low => "Low",
            MaintenancePriority::Medium => "Medium",
            MaintenancePriority::High => "High",
            MaintenancePriority::Urgent => "Urgent",
        }
    }
}

/// Monthly rent payment status.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Partial,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&UserRole::Landlord).unwrap(), "\"landlord\"");
        let parsed: UserRole = serde_json::from_str("\"tenant\"").unwrap();
        assert_eq!(parsed, UserRole::Tenant);
    }

    #[test]
    fn in_progress_keeps_the_space() {
        assert_eq!(MaintenanceStatus::InProgress.as_str(), "In Progress");
        assert_eq!(
            serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(serde_json::from_str::<MaintenanceStatus>("\"Pending\"").is_err());
    }
}
