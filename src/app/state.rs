use std::time::{Duration, Instant};

use crate::intake::{Language, LANGUAGES};
use crate::upload::{Category, Rejection};

/// How long the dossier screen pretends to assemble the draft.
pub const DOSSIER_PREPARE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Intake,
    Upload,
    Dashboard,
    Dossier,
    Lawyers,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Intake,
        Screen::Upload,
        Screen::Dashboard,
        Screen::Dossier,
        Screen::Lawyers,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Intake => "Voice Intake",
            Screen::Upload => "Evidence",
            Screen::Dashboard => "Dashboard",
            Screen::Dossier => "Dossier",
            Screen::Lawyers => "Lawyers",
        }
    }
}

pub struct UploadScreen {
    pub selected_category: Category,
    /// Rejections from the most recent batch, shown until the next drop.
    pub rejections: Vec<Rejection>,
}

impl Default for UploadScreen {
    fn default() -> Self {
        Self {
            selected_category: Category::Land,
            rejections: Vec::new(),
        }
    }
}

pub struct IntakeScreen {
    pub language: Language,
}

impl Default for IntakeScreen {
    fn default() -> Self {
        let english = LANGUAGES
            .iter()
            .find(|l| l.code == "en")
            .copied()
            .unwrap_or(LANGUAGES[0]);
        Self { language: english }
    }
}

#[derive(Default)]
pub struct LawyersScreen {
    pub query: String,
    pub callback_note: Option<String>,
}

#[derive(Default)]
pub struct DossierScreen {
    /// Set the first time the screen is opened; preparation runs once.
    pub requested_at: Option<Instant>,
    pub status: Option<String>,
}

impl DossierScreen {
    pub fn is_ready(&self) -> bool {
        self.requested_at
            .map(|at| at.elapsed() >= DOSSIER_PREPARE)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dossier_is_not_ready_until_opened() {
        let screen = DossierScreen::default();
        assert!(!screen.is_ready());
    }

    #[test]
    fn dossier_ripens_after_the_preparation_delay() {
        let mut screen = DossierScreen::default();
        screen.requested_at = Some(Instant::now());
        assert!(!screen.is_ready());

        screen.requested_at = Instant::now().checked_sub(DOSSIER_PREPARE * 2);
        assert!(screen.requested_at.is_some());
        assert!(screen.is_ready());
    }

    #[test]
    fn every_screen_has_a_nav_title() {
        for screen in Screen::ALL {
            assert!(!screen.title().is_empty());
        }
    }
}
