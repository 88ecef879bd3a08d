use serde::{Deserialize, Serialize};

use crate::upload::UploadRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relevance {
    High,
    Medium,
    Low,
}

impl Relevance {
    pub fn label(&self) -> &'static str {
        match self {
            Relevance::High => "High",
            Relevance::Medium => "Medium",
            Relevance::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawReference {
    pub title: String,
    pub sections: Vec<String>,
    pub relevance: Relevance,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Precedent {
    pub case: String,
    pub court: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lawyer {
    pub name: String,
    pub specialization: String,
    pub experience_years: u8,
    pub location: String,
    pub rating: f32,
    pub reviews: u32,
    pub available: bool,
    pub verified: bool,
    pub initials: String,
    pub consultation_fee: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub when: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub name: String,
    pub uploaded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseStep {
    pub name: String,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DossierSection {
    pub title: String,
    pub pages: String,
}

/// Everything the dossier screen exports as a JSON case summary.
#[derive(Debug, Clone, Serialize)]
pub struct CaseSummary {
    pub statement: String,
    pub evidence: Vec<UploadRecord>,
    pub checklist: Vec<ChecklistItem>,
    pub applicable_laws: Vec<LawReference>,
    pub precedents: Vec<Precedent>,
}
