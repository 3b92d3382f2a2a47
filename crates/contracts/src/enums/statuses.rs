use serde::{Deserialize, Serialize};

/// Processing state of a licensing application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Stable key used for filtering and the wire format
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::UnderReview => "under_review",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "Pending",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Badge colour for the UI
    pub fn color(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "#f59e0b",
            ApplicationStatus::UnderReview => "#3b82f6",
            ApplicationStatus::Approved => "#16a34a",
            ApplicationStatus::Rejected => "#dc2626",
        }
    }

    pub fn all() -> Vec<ApplicationStatus> {
        vec![
            ApplicationStatus::Pending,
            ApplicationStatus::UnderReview,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pending" => Some(ApplicationStatus::Pending),
            "under_review" => Some(ApplicationStatus::UnderReview),
            "approved" => Some(ApplicationStatus::Approved),
            "rejected" => Some(ApplicationStatus::Rejected),
            _ => None,
        }
    }
}

/// Lifecycle state of an issued license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LicenseStatus {
    Active,
    RenewalDue,
    Expired,
    Suspended,
}

impl LicenseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "active",
            LicenseStatus::RenewalDue => "renewal_due",
            LicenseStatus::Expired => "expired",
            LicenseStatus::Suspended => "suspended",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "Active",
            LicenseStatus::RenewalDue => "Renewal Due",
            LicenseStatus::Expired => "Expired",
            LicenseStatus::Suspended => "Suspended",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            LicenseStatus::Active => "#16a34a",
            LicenseStatus::RenewalDue => "#f59e0b",
            LicenseStatus::Expired => "#6b7280",
            LicenseStatus::Suspended => "#dc2626",
        }
    }

    pub fn all() -> Vec<LicenseStatus> {
        vec![
            LicenseStatus::Active,
            LicenseStatus::RenewalDue,
            LicenseStatus::Expired,
            LicenseStatus::Suspended,
        ]
    }
}

/// State of a field inspection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionStatus {
    Scheduled,
    InProgress,
    Completed,
    Overdue,
}

impl InspectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionStatus::Scheduled => "scheduled",
            InspectionStatus::InProgress => "in_progress",
            InspectionStatus::Completed => "completed",
            InspectionStatus::Overdue => "overdue",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InspectionStatus::Scheduled => "Scheduled",
            InspectionStatus::InProgress => "In Progress",
            InspectionStatus::Completed => "Completed",
            InspectionStatus::Overdue => "Overdue",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            InspectionStatus::Scheduled => "#3b82f6",
            InspectionStatus::InProgress => "#f59e0b",
            InspectionStatus::Completed => "#16a34a",
            InspectionStatus::Overdue => "#dc2626",
        }
    }

    pub fn all() -> Vec<InspectionStatus> {
        vec![
            InspectionStatus::Scheduled,
            InspectionStatus::InProgress,
            InspectionStatus::Completed,
            InspectionStatus::Overdue,
        ]
    }
}

/// Notification severity (drives the badge colour)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Severity::Info => "#3b82f6",
            Severity::Warning => "#f59e0b",
            Severity::Critical => "#dc2626",
        }
    }
}

/// Operational state of an office site shown on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteStatus {
    Operational,
    Attention,
    Offline,
}

impl SiteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SiteStatus::Operational => "operational",
            SiteStatus::Attention => "attention",
            SiteStatus::Offline => "offline",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SiteStatus::Operational => "Operational",
            SiteStatus::Attention => "Needs Attention",
            SiteStatus::Offline => "Offline",
        }
    }

    /// Marker colour on the office map
    pub fn color(&self) -> &'static str {
        match self {
            SiteStatus::Operational => "#16a34a",
            SiteStatus::Attention => "#f59e0b",
            SiteStatus::Offline => "#dc2626",
        }
    }
}
