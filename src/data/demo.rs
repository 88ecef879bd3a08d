use super::types::{
    CaseStep, ChecklistItem, DossierSection, LawReference, Lawyer, Precedent, Relevance,
    StepStatus, TimelineEvent,
};
use super::CaseDataProvider;

/// Bundled demo content: one land-encroachment case, mid-analysis.
#[derive(Debug, Clone, Default)]
pub struct DemoCaseData;

fn lawyer(
    name: &str,
    specialization: &str,
    experience_years: u8,
    location: &str,
    rating: f32,
    reviews: u32,
    available: bool,
    initials: &str,
    consultation_fee: &str,
) -> Lawyer {
    Lawyer {
        name: name.to_string(),
        specialization: specialization.to_string(),
        experience_years,
        location: location.to_string(),
        rating,
        reviews,
        available,
        verified: true,
        initials: initials.to_string(),
        consultation_fee: consultation_fee.to_string(),
    }
}

impl CaseDataProvider for DemoCaseData {
    fn lawyers(&self) -> Vec<Lawyer> {
        vec![
            lawyer("Adv. Priya Sharma", "Property & Land Disputes", 15, "Delhi", 4.9, 127, true, "PS", "₹2,000/consultation"),
            lawyer("Adv. Rajesh Gupta", "Civil Litigation", 12, "Gurgaon", 4.7, 89, true, "RG", "₹1,500/consultation"),
            lawyer("Adv. Meera Patel", "Property Law", 8, "Noida", 4.8, 64, false, "MP", "₹1,800/consultation"),
            lawyer("Adv. Sunil Kumar", "Land & Revenue", 20, "Delhi", 4.9, 203, true, "SK", "₹2,500/consultation"),
        ]
    }

    fn applicable_laws(&self) -> Vec<LawReference> {
        vec![
            LawReference {
                title: "Transfer of Property Act, 1882".to_string(),
                sections: vec![
                    "Section 53A - Part Performance".to_string(),
                    "Section 54 - Sale of Immovable Property".to_string(),
                ],
                relevance: Relevance::High,
            },
            LawReference {
                title: "Indian Evidence Act, 1872".to_string(),
                sections: vec![
                    "Section 3 - Evidence".to_string(),
                    "Section 65B - Electronic Records".to_string(),
                ],
                relevance: Relevance::Medium,
            },
            LawReference {
                title: "Limitation Act, 1963".to_string(),
                sections: vec!["Article 64 - For possession of immovable property".to_string()],
                relevance: Relevance::High,
            },
        ]
    }

    fn precedents(&self) -> Vec<Precedent> {
        vec![
            Precedent {
                case: "Suraj Lamp & Industries vs State Of Haryana (2012)".to_string(),
                court: "Supreme Court of India".to_string(),
                summary: "Clarified rights of buyers in property disputes and validity of sale agreements.".to_string(),
            },
            Precedent {
                case: "Ramesh Chand vs Anil Panjwani (2018)".to_string(),
                court: "Delhi High Court".to_string(),
                summary: "Established criteria for proving adverse possession in land encroachment cases.".to_string(),
            },
        ]
    }

    fn timeline(&self) -> Vec<TimelineEvent> {
        let event = |when: &str, title: &str| TimelineEvent {
            when: when.to_string(),
            title: title.to_string(),
        };
        vec![
            event("Today, 2:30 PM", "Voice statement recorded"),
            event("Today, 2:35 PM", "Land documents uploaded"),
            event("Today, 2:40 PM", "AI analysis started"),
            event("Today, 2:45 PM", "Draft being prepared"),
        ]
    }

    fn evidence_checklist(&self) -> Vec<ChecklistItem> {
        let item = |name: &str, uploaded: bool| ChecklistItem {
            name: name.to_string(),
            uploaded,
        };
        vec![
            item("Land ownership documents", true),
            item("Survey/plot map", true),
            item("Property tax receipts", false),
            item("Neighbor's encroachment photos", true),
            item("Previous correspondence", false),
        ]
    }

    fn case_steps(&self) -> Vec<CaseStep> {
        let step = |name: &str, status: StepStatus| CaseStep {
            name: name.to_string(),
            status,
        };
        vec![
            step("Intake", StepStatus::Completed),
            step("Evidence", StepStatus::Completed),
            step("Draft", StepStatus::Current),
            step("Dossier", StepStatus::Pending),
            step("Lawyer", StepStatus::Pending),
        ]
    }

    fn dossier_sections(&self) -> Vec<DossierSection> {
        let section = |title: &str, pages: &str| DossierSection {
            title: title.to_string(),
            pages: pages.to_string(),
        };
        vec![
            section("Case Overview", "1-3"),
            section("Complainant Statement", "4-6"),
            section("Evidence Summary", "7-12"),
            section("Legal Framework", "13-18"),
            section("Precedent Analysis", "19-24"),
            section("Prayer/Relief Sought", "25-26"),
        ]
    }

    fn intake_greeting(&self) -> String {
        "Hello! I'm PRAMAAN AI. Please describe your legal issue in your own words. \
         I'm listening..."
            .to_string()
    }

    fn intake_statement(&self) -> String {
        "I have a land dispute with my neighbor. They have encroached on my property \
         and built a fence. I have the land documents but they are refusing to \
         acknowledge my ownership."
            .to_string()
    }

    fn intake_reply(&self) -> String {
        "I understand you have a land dispute. Based on your description, this appears \
         to be a civil matter under the Indian Transfer of Property Act. Let me ask \
         you a few questions to better understand your case..."
            .to_string()
    }
}
