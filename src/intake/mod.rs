mod transcriber;

pub use transcriber::{
    ChatMessage, IntakeEvent, Role, Transcriber, TranscriberConfig,
};

/// Languages offered by the intake screen. Selection is UI state only;
/// the demo statement is always the bundled one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [Language; 6] = [
    Language { code: "en", name: "English" },
    Language { code: "hi", name: "हिन्दी (Hindi)" },
    Language { code: "ta", name: "தமிழ் (Tamil)" },
    Language { code: "te", name: "తెలుగు (Telugu)" },
    Language { code: "mr", name: "मराठी (Marathi)" },
    Language { code: "bn", name: "বাংলা (Bengali)" },
];
