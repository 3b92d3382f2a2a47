use serde::{Deserialize, Serialize};

/// Portal role — selects the dashboard and menu a user sees
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Applicant,
    Inspector,
    Supervisor,
    Customer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Applicant => "applicant",
            Role::Inspector => "inspector",
            Role::Supervisor => "supervisor",
            Role::Customer => "customer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Applicant => "Applicant",
            Role::Inspector => "Inspector",
            Role::Supervisor => "Supervisor",
            Role::Customer => "Customer",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::Admin,
            Role::Applicant,
            Role::Inspector,
            Role::Supervisor,
            Role::Customer,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "admin" => Some(Role::Admin),
            "applicant" => Some(Role::Applicant),
            "inspector" => Some(Role::Inspector),
            "supervisor" => Some(Role::Supervisor),
            "customer" => Some(Role::Customer),
            _ => None,
        }
    }
}

/// Officer rank labels. Display strings only — there is no modeled
/// hierarchy behind these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OfficerRank {
    AC,
    ILM,
    DC,
    JC,
    CLM,
}

impl OfficerRank {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfficerRank::AC => "AC",
            OfficerRank::ILM => "ILM",
            OfficerRank::DC => "DC",
            OfficerRank::JC => "JC",
            OfficerRank::CLM => "CLM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OfficerRank::AC => "Assistant Controller",
            OfficerRank::ILM => "Inspector of Legal Metrology",
            OfficerRank::DC => "Deputy Controller",
            OfficerRank::JC => "Joint Controller",
            OfficerRank::CLM => "Controller of Legal Metrology",
        }
    }
}
