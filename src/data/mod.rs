mod demo;
mod types;

pub use demo::DemoCaseData;
pub use types::{
    CaseStep, CaseSummary, ChecklistItem, DossierSection, LawReference, Lawyer, Precedent,
    Relevance, StepStatus, TimelineEvent,
};

/// Read interface for case content. The screens render whatever this
/// returns; the demo build serves bundled data, a real deployment would
/// implement it against a backend.
pub trait CaseDataProvider {
    fn lawyers(&self) -> Vec<Lawyer>;
    fn applicable_laws(&self) -> Vec<LawReference>;
    fn precedents(&self) -> Vec<Precedent>;
    fn timeline(&self) -> Vec<TimelineEvent>;
    fn evidence_checklist(&self) -> Vec<ChecklistItem>;
    fn case_steps(&self) -> Vec<CaseStep>;
    fn dossier_sections(&self) -> Vec<DossierSection>;
    fn intake_greeting(&self) -> String;
    fn intake_statement(&self) -> String;
    fn intake_reply(&self) -> String;

    /// Case-insensitive match over lawyer name and specialization.
    fn search_lawyers(&self, query: &str) -> Vec<Lawyer> {
        let query = query.to_lowercase();
        self.lawyers()
            .into_iter()
            .filter(|lawyer| {
                lawyer.name.to_lowercase().contains(&query)
                    || lawyer.specialization.to_lowercase().contains(&query)
            })
            .collect()
    }
}
