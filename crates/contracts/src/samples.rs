//! Sample datasets backing the register pages, the backend registry, and
//! the unit tests. The portal has no persistence; these arrays are the
//! data.

use chrono::NaiveDate;

use crate::domain::application::Application;
use crate::domain::district::{District, Zone};
use crate::domain::inspection::Inspection;
use crate::domain::license::License;
use crate::domain::notification::Notification;
use crate::domain::user::UserAccount;
use crate::enums::role::{OfficerRank, Role};
use crate::enums::statuses::{
    ApplicationStatus, InspectionStatus, LicenseStatus, Severity, SiteStatus,
};
use crate::shared::geo::MapPoint;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid sample date")
}

/// The application register: 12 records, of which exactly three —
/// AP001, AP002, AP003 — are pending.
pub fn sample_applications() -> Vec<Application> {
    fn app(
        id: &str,
        applicant: &str,
        establishment: &str,
        category: &str,
        district: &str,
        mandal: &str,
        officer: &str,
        status: ApplicationStatus,
        submitted_on: NaiveDate,
        sla_days: u32,
        fee: &str,
    ) -> Application {
        Application {
            id: id.to_string(),
            applicant: applicant.to_string(),
            establishment: establishment.to_string(),
            category: category.to_string(),
            district: district.to_string(),
            mandal: mandal.to_string(),
            officer: officer.to_string(),
            status,
            submitted_on,
            sla_days,
            fee: fee.to_string(),
        }
    }

    vec![
        app(
            "AP001",
            "D. Suresh Kumar",
            "Sri Venkateswara Traders",
            "Dealer License",
            "Guntur",
            "Tenali",
            "K. Ramesh",
            ApplicationStatus::Pending,
            date(2026, 7, 28),
            30,
            "₹2,500",
        ),
        app(
            "AP002",
            "G. Padmavathi",
            "Padma Weighing Systems",
            "Manufacturer License",
            "Krishna",
            "Vijayawada Urban",
            "S. Lakshmi Devi",
            ApplicationStatus::Pending,
            date(2026, 7, 30),
            45,
            "₹5,000",
        ),
        app(
            "AP003",
            "T. Nageswara Rao",
            "Sai Balaji Rice Mill",
            "Weighbridge Registration",
            "Visakhapatnam",
            "Gajuwaka",
            "P. Venkat Rao",
            ApplicationStatus::Pending,
            date(2026, 8, 1),
            30,
            "₹10,000",
        ),
        app(
            "AP004",
            "V. Ramana",
            "Ramana Scales & Service",
            "Repairer License",
            "Guntur",
            "Mangalagiri",
            "K. Ramesh",
            ApplicationStatus::UnderReview,
            date(2026, 7, 15),
            30,
            "₹1,500",
        ),
        app(
            "AP005",
            "S. Harish",
            "Harish Petro Services",
            "Dealer License",
            "Chittoor",
            "Tirupati Urban",
            "M. Anjali",
            ApplicationStatus::UnderReview,
            date(2026, 7, 18),
            30,
            "₹2,500",
        ),
        app(
            "AP006",
            "P. Lavanya",
            "Lavanya Gold House",
            "Dealer License",
            "Krishna",
            "Machilipatnam",
            "S. Lakshmi Devi",
            ApplicationStatus::Approved,
            date(2026, 6, 20),
            30,
            "₹2,500",
        ),
        app(
            "AP007",
            "N. Prasad",
            "Prasad Packers",
            "Packer Registration",
            "East Godavari",
            "Kakinada Urban",
            "B. Srinivas",
            ApplicationStatus::Approved,
            date(2026, 6, 25),
            45,
            "₹3,000",
        ),
        app(
            "AP008",
            "M. Farooq",
            "Farooq Hardware",
            "Dealer License",
            "Kurnool",
            "Adoni",
            "M. Anjali",
            ApplicationStatus::Approved,
            date(2026, 6, 28),
            30,
            "₹2,500",
        ),
        app(
            "AP009",
            "Ch. Ravi Teja",
            "Teja Agro Industries",
            "Weighbridge Registration",
            "Guntur",
            "Ponnur",
            "K. Ramesh",
            ApplicationStatus::Approved,
            date(2026, 7, 2),
            30,
            "₹10,000",
        ),
        app(
            "AP010",
            "B. Mallikarjun",
            "Mallikarjun Metals",
            "Manufacturer License",
            "Kurnool",
            "Nandyal",
            "M. Anjali",
            ApplicationStatus::Rejected,
            date(2026, 7, 5),
            45,
            "₹5,000",
        ),
        app(
            "AP011",
            "K. Swapna",
            "Swapna Super Bazar",
            "Dealer License",
            "Visakhapatnam",
            "Anakapalle",
            "P. Venkat Rao",
            ApplicationStatus::UnderReview,
            date(2026, 7, 22),
            30,
            "₹2,500",
        ),
        app(
            "AP012",
            "Y. Govind",
            "Govind Oil Depot",
            "Dealer License",
            "East Godavari",
            "Rajahmundry",
            "B. Srinivas",
            ApplicationStatus::Approved,
            date(2026, 7, 10),
            30,
            "₹2,500",
        ),
    ]
}

/// The license register.
pub fn sample_licenses() -> Vec<License> {
    fn lic(
        id: &str,
        licensee: &str,
        establishment: &str,
        category: &str,
        district: &str,
        mandal: &str,
        status: LicenseStatus,
        issued_on: NaiveDate,
        valid_until: NaiveDate,
    ) -> License {
        License {
            id: id.to_string(),
            licensee: licensee.to_string(),
            establishment: establishment.to_string(),
            category: category.to_string(),
            district: district.to_string(),
            mandal: mandal.to_string(),
            status,
            issued_on,
            valid_until,
        }
    }

    vec![
        lic(
            "LIC001",
            "P. Lavanya",
            "Lavanya Gold House",
            "Dealer",
            "Krishna",
            "Machilipatnam",
            LicenseStatus::Active,
            date(2025, 7, 1),
            date(2026, 6, 30),
        ),
        lic(
            "LIC002",
            "N. Prasad",
            "Prasad Packers",
            "Manufacturer",
            "East Godavari",
            "Kakinada Urban",
            LicenseStatus::Active,
            date(2025, 9, 12),
            date(2026, 9, 11),
        ),
        lic(
            "LIC003",
            "M. Farooq",
            "Farooq Hardware",
            "Dealer",
            "Kurnool",
            "Adoni",
            LicenseStatus::RenewalDue,
            date(2024, 8, 20),
            date(2026, 8, 19),
        ),
        lic(
            "LIC004",
            "Ch. Ravi Teja",
            "Teja Agro Industries",
            "Dealer",
            "Guntur",
            "Ponnur",
            LicenseStatus::Active,
            date(2025, 11, 3),
            date(2026, 11, 2),
        ),
        lic(
            "LIC005",
            "R. Bhaskar",
            "Bhaskar Weighbridge",
            "Repairer",
            "Visakhapatnam",
            "Gajuwaka",
            LicenseStatus::Expired,
            date(2024, 5, 15),
            date(2025, 5, 14),
        ),
        lic(
            "LIC006",
            "S. Meena",
            "Meena Provision Stores",
            "Dealer",
            "Chittoor",
            "Madanapalle",
            LicenseStatus::Suspended,
            date(2025, 2, 10),
            date(2026, 2, 9),
        ),
        lic(
            "LIC007",
            "Y. Govind",
            "Govind Oil Depot",
            "Dealer",
            "East Godavari",
            "Rajahmundry",
            LicenseStatus::Active,
            date(2026, 1, 8),
            date(2027, 1, 7),
        ),
        lic(
            "LIC008",
            "V. Ramana",
            "Ramana Scales & Service",
            "Repairer",
            "Guntur",
            "Mangalagiri",
            LicenseStatus::RenewalDue,
            date(2024, 9, 1),
            date(2026, 8, 31),
        ),
    ]
}

/// The inspection schedule.
pub fn sample_inspections() -> Vec<Inspection> {
    fn ins(
        id: &str,
        establishment: &str,
        district: &str,
        mandal: &str,
        officer: &str,
        status: InspectionStatus,
        scheduled_on: NaiveDate,
        compliant: Option<bool>,
    ) -> Inspection {
        Inspection {
            id: id.to_string(),
            establishment: establishment.to_string(),
            district: district.to_string(),
            mandal: mandal.to_string(),
            officer: officer.to_string(),
            status,
            scheduled_on,
            compliant,
        }
    }

    vec![
        ins(
            "INS001",
            "Sri Venkateswara Traders",
            "Guntur",
            "Tenali",
            "K. Ramesh",
            InspectionStatus::Completed,
            date(2026, 7, 20),
            Some(true),
        ),
        ins(
            "INS002",
            "Padma Weighing Systems",
            "Krishna",
            "Vijayawada Urban",
            "S. Lakshmi Devi",
            InspectionStatus::Completed,
            date(2026, 7, 22),
            Some(false),
        ),
        ins(
            "INS003",
            "Sai Balaji Rice Mill",
            "Visakhapatnam",
            "Gajuwaka",
            "P. Venkat Rao",
            InspectionStatus::Scheduled,
            date(2026, 8, 10),
            None,
        ),
        ins(
            "INS004",
            "Harish Petro Services",
            "Chittoor",
            "Tirupati Urban",
            "M. Anjali",
            InspectionStatus::InProgress,
            date(2026, 8, 5),
            None,
        ),
        ins(
            "INS005",
            "Farooq Hardware",
            "Kurnool",
            "Adoni",
            "M. Anjali",
            InspectionStatus::Overdue,
            date(2026, 7, 25),
            None,
        ),
        ins(
            "INS006",
            "Prasad Packers",
            "East Godavari",
            "Kakinada Urban",
            "B. Srinivas",
            InspectionStatus::Completed,
            date(2026, 7, 28),
            Some(true),
        ),
        ins(
            "INS007",
            "Govind Oil Depot",
            "East Godavari",
            "Rajahmundry",
            "B. Srinivas",
            InspectionStatus::Scheduled,
            date(2026, 8, 12),
            None,
        ),
        ins(
            "INS008",
            "Lavanya Gold House",
            "Krishna",
            "Machilipatnam",
            "S. Lakshmi Devi",
            InspectionStatus::Completed,
            date(2026, 7, 30),
            Some(true),
        ),
    ]
}

/// Portal user accounts.
pub fn sample_users() -> Vec<UserAccount> {
    fn user(
        id: &str,
        name: &str,
        role: Role,
        rank: Option<OfficerRank>,
        district: &str,
        email: &str,
        active: bool,
        last_login: Option<NaiveDate>,
    ) -> UserAccount {
        UserAccount {
            id: id.to_string(),
            name: name.to_string(),
            role,
            rank,
            district: district.to_string(),
            email: email.to_string(),
            active,
            last_login,
        }
    }

    vec![
        user(
            "USR001",
            "A. Chandrasekhar",
            Role::Admin,
            Some(OfficerRank::CLM),
            "Krishna",
            "clm@apmetrology.gov.in",
            true,
            Some(date(2026, 8, 5)),
        ),
        user(
            "USR002",
            "R. Jayalakshmi",
            Role::Supervisor,
            Some(OfficerRank::JC),
            "Guntur",
            "jc.guntur@apmetrology.gov.in",
            true,
            Some(date(2026, 8, 4)),
        ),
        user(
            "USR003",
            "K. Ramesh",
            Role::Inspector,
            Some(OfficerRank::ILM),
            "Guntur",
            "ilm.guntur@apmetrology.gov.in",
            true,
            Some(date(2026, 8, 5)),
        ),
        user(
            "USR004",
            "S. Lakshmi Devi",
            Role::Inspector,
            Some(OfficerRank::ILM),
            "Krishna",
            "ilm.krishna@apmetrology.gov.in",
            true,
            Some(date(2026, 8, 3)),
        ),
        user(
            "USR005",
            "P. Venkat Rao",
            Role::Inspector,
            Some(OfficerRank::ILM),
            "Visakhapatnam",
            "ilm.vizag@apmetrology.gov.in",
            false,
            Some(date(2026, 7, 18)),
        ),
        user(
            "USR006",
            "M. Anjali",
            Role::Inspector,
            Some(OfficerRank::AC),
            "Chittoor",
            "ac.chittoor@apmetrology.gov.in",
            true,
            Some(date(2026, 8, 2)),
        ),
        user(
            "USR007",
            "D. Suresh Kumar",
            Role::Applicant,
            None,
            "Guntur",
            "suresh.traders@example.com",
            true,
            Some(date(2026, 7, 29)),
        ),
        user(
            "USR008",
            "L. Kavya",
            Role::Customer,
            None,
            "Krishna",
            "kavya@example.com",
            true,
            None,
        ),
    ]
}

/// Districts with their mandals and headquarters coordinates.
pub fn sample_districts() -> Vec<District> {
    fn district(
        id: &str,
        name: &str,
        zone: &str,
        mandals: &[&str],
        lat: f64,
        lng: f64,
    ) -> District {
        District {
            id: id.to_string(),
            name: name.to_string(),
            zone: zone.to_string(),
            mandals: mandals.iter().map(|m| m.to_string()).collect(),
            lat,
            lng,
        }
    }

    vec![
        district(
            "DST01",
            "Guntur",
            "Coastal Andhra",
            &["Tenali", "Mangalagiri", "Ponnur"],
            16.3067,
            80.4365,
        ),
        district(
            "DST02",
            "Krishna",
            "Coastal Andhra",
            &["Vijayawada Urban", "Machilipatnam", "Gudivada"],
            16.5062,
            80.6480,
        ),
        district(
            "DST03",
            "Visakhapatnam",
            "North Coastal",
            &["Gajuwaka", "Anakapalle", "Bheemunipatnam"],
            17.6868,
            83.2185,
        ),
        district(
            "DST04",
            "East Godavari",
            "North Coastal",
            &["Kakinada Urban", "Rajahmundry", "Amalapuram"],
            16.9891,
            82.2475,
        ),
        district(
            "DST05",
            "Chittoor",
            "Rayalaseema",
            &["Tirupati Urban", "Madanapalle", "Srikalahasti"],
            13.2172,
            79.1003,
        ),
        district(
            "DST06",
            "Kurnool",
            "Rayalaseema",
            &["Adoni", "Nandyal", "Dhone"],
            15.8281,
            78.0373,
        ),
    ]
}

pub fn sample_zones() -> Vec<Zone> {
    [
        ("Z01", "Coastal Andhra"),
        ("Z02", "North Coastal"),
        ("Z03", "Rayalaseema"),
    ]
    .iter()
    .map(|(id, name)| Zone {
        id: id.to_string(),
        name: name.to_string(),
    })
    .collect()
}

/// Notifications shown in the bell menu and the notifications page.
pub fn sample_notifications() -> Vec<Notification> {
    fn note(
        id: &str,
        title: &str,
        body: &str,
        severity: Severity,
        created_on: NaiveDate,
        read: bool,
    ) -> Notification {
        Notification {
            id: id.to_string(),
            title: title.to_string(),
            body: body.to_string(),
            severity,
            created_on,
            read,
        }
    }

    vec![
        note(
            "NTF001",
            "Renewal window open",
            "License renewals for 2026-27 are now being accepted.",
            Severity::Info,
            date(2026, 8, 1),
            false,
        ),
        note(
            "NTF002",
            "Inspection overdue",
            "INS005 (Farooq Hardware, Adoni) passed its scheduled date.",
            Severity::Critical,
            date(2026, 7, 26),
            false,
        ),
        note(
            "NTF003",
            "Stamping camp scheduled",
            "Weighbridge stamping camp at Gajuwaka on 18 Aug.",
            Severity::Info,
            date(2026, 7, 24),
            true,
        ),
        note(
            "NTF004",
            "SLA breach risk",
            "3 applications in Guntur are within 5 days of their SLA target.",
            Severity::Warning,
            date(2026, 7, 31),
            false,
        ),
        note(
            "NTF005",
            "Office maintenance",
            "Kurnool district office reports verification bench downtime.",
            Severity::Warning,
            date(2026, 7, 20),
            true,
        ),
    ]
}

/// District office sites plotted on the map.
pub fn office_sites() -> Vec<MapPoint> {
    fn site(id: &str, label: &str, lat: f64, lng: f64, status: SiteStatus) -> MapPoint {
        MapPoint {
            id: id.to_string(),
            label: label.to_string(),
            lat,
            lng,
            status,
        }
    }

    vec![
        site(
            "OFF01",
            "Guntur District Office",
            16.3067,
            80.4365,
            SiteStatus::Operational,
        ),
        site(
            "OFF02",
            "Krishna District Office",
            16.5062,
            80.6480,
            SiteStatus::Operational,
        ),
        site(
            "OFF03",
            "Visakhapatnam District Office",
            17.6868,
            83.2185,
            SiteStatus::Attention,
        ),
        site(
            "OFF04",
            "East Godavari District Office",
            16.9891,
            82.2475,
            SiteStatus::Operational,
        ),
        site(
            "OFF05",
            "Chittoor District Office",
            13.2172,
            79.1003,
            SiteStatus::Offline,
        ),
        site(
            "OFF06",
            "Kurnool District Office",
            15.8281,
            78.0373,
            SiteStatus::Attention,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::statuses::ApplicationStatus;

    #[test]
    fn register_has_twelve_applications_three_pending() {
        let records = sample_applications();
        assert_eq!(records.len(), 12);
        let pending: Vec<&str> = records
            .iter()
            .filter(|a| a.status == ApplicationStatus::Pending)
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(pending, vec!["AP001", "AP002", "AP003"]);
    }

    #[test]
    fn every_application_district_has_a_district_record() {
        let districts = sample_districts();
        for application in sample_applications() {
            assert!(
                districts.iter().any(|d| d.name == application.district),
                "unknown district {}",
                application.district
            );
        }
    }

    #[test]
    fn one_office_site_per_district() {
        assert_eq!(office_sites().len(), sample_districts().len());
    }
}
