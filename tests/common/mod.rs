//! Record builders shared by the integration tests.

#![allow(dead_code)]

use asterism::domain::{ProjectMember, ProjectPermission};
use asterism::{LegalCase, Project, ProjectPriority, ProjectStatus};
use chrono::NaiveDate;

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn case(id: &str, court: &str) -> LegalCase {
    LegalCase {
        id: id.to_string(),
        case_number: format!("T {}-23", id),
        title: format!("Mål {}", id),
        court: court.to_string(),
        date: day(2023, 6, 1),
        legal_area: "Civilrätt".to_string(),
        summary: String::new(),
        background: String::new(),
        decision: Vec::new(),
        ruling: Vec::new(),
        keywords: Vec::new(),
    }
}

pub fn case_with_keywords(id: &str, keywords: &[&str]) -> LegalCase {
    LegalCase {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        ..case(id, "Högsta domstolen")
    }
}

pub fn project(id: &str, priority: ProjectPriority) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Projekt {}", id),
        description: None,
        case_number: None,
        status: ProjectStatus::Active,
        priority,
        owner_id: "user-1".to_string(),
        members: vec![ProjectMember {
            user_id: "user-1".to_string(),
            permission: ProjectPermission::Owner,
        }],
        artefacts: Vec::new(),
        created_at: day(2024, 1, 15),
        updated_at: day(2024, 1, 15),
    }
}
