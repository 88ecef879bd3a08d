mod state;
mod ui;

use std::path::Path;
use std::time::{Duration, Instant};

use eframe::{egui, App, CreationContext};
use tokio::runtime::Runtime;
use tracing::{error, info};

use crate::data::{CaseDataProvider, CaseSummary, DemoCaseData};
use crate::intake::{ChatMessage, Role, Transcriber, TranscriberConfig};
use crate::upload::{RawFile, SimulatorConfig, UploadPolicy, UploadSimulator};
use crate::utils::mime::{sniff_mime, sniff_mime_bytes};

pub use state::{DossierScreen, IntakeScreen, LawyersScreen, Screen, UploadScreen};

pub struct PramaanApp {
    // kept alive for the engines' background tasks
    _runtime: Runtime,
    provider: DemoCaseData,
    simulator: UploadSimulator,
    transcriber: Transcriber,
    screen: Screen,
    upload_screen: UploadScreen,
    intake_screen: IntakeScreen,
    lawyers_screen: LawyersScreen,
    dossier_screen: DossierScreen,
}

impl PramaanApp {
    pub fn new(_cc: &CreationContext<'_>) -> Self {
        info!("starting the PRAMAAN demo shell");
        let runtime = Runtime::new().expect("failed to start the background runtime");
        let provider = DemoCaseData;
        let simulator = UploadSimulator::new(
            UploadPolicy::default(),
            SimulatorConfig::default(),
            runtime.handle().clone(),
        );
        let transcriber = Transcriber::new(
            TranscriberConfig::default(),
            runtime.handle().clone(),
            ChatMessage::assistant(provider.intake_greeting()),
        );

        Self {
            _runtime: runtime,
            provider,
            simulator,
            transcriber,
            screen: Screen::Home,
            upload_screen: UploadScreen::default(),
            intake_screen: IntakeScreen::default(),
            lawyers_screen: LawyersScreen::default(),
            dossier_screen: DossierScreen::default(),
        }
    }

    fn open(&mut self, screen: Screen) {
        if screen == Screen::Dossier && self.dossier_screen.requested_at.is_none() {
            self.dossier_screen.requested_at = Some(Instant::now());
        }
        self.screen = screen;
    }

    /// Hands a batch to the simulator under the currently selected
    /// category; rejections replace the previous batch's notices.
    fn ingest(&mut self, files: Vec<RawFile>) {
        let accepted = self
            .simulator
            .accept(files, self.upload_screen.selected_category);
        self.upload_screen.rejections = accepted.rejected;
    }

    fn browse_files(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("Evidence", &["pdf", "doc", "docx", "jpg", "jpeg", "png", "mp4"])
            .pick_files();
        if let Some(paths) = picked {
            let files = paths.iter().map(|p| raw_file_from_path(p)).collect();
            self.ingest(files);
        }
    }

    fn collect_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }
        let files: Vec<RawFile> = dropped.iter().filter_map(raw_file_from_dropped).collect();
        if !files.is_empty() {
            self.ingest(files);
        }
    }

    fn export_summary(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_file_name("pramaan-case-summary.json")
            .add_filter("JSON", &["json"])
            .save_file();
        let Some(path) = picked else { return };

        match self.write_summary(&path) {
            Ok(()) => {
                info!(path = %path.display(), "exported case summary");
                self.dossier_screen.status = Some(format!("Saved to {}", path.display()));
            }
            Err(e) => {
                error!(error = %e, "case summary export failed");
                self.dossier_screen.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    fn write_summary(&self, path: &Path) -> Result<(), String> {
        // prefer what was actually dictated over the bundled statement
        let statement = self
            .transcriber
            .messages()
            .iter()
            .rev()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.clone())
            .unwrap_or_else(|| self.provider.intake_statement());

        let summary = CaseSummary {
            statement,
            evidence: self.simulator.records().to_vec(),
            checklist: self.provider.evidence_checklist(),
            applicable_laws: self.provider.applicable_laws(),
            precedents: self.provider.precedents(),
        };

        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("could not encode the summary: {e}"))?;
        std::fs::write(path, json).map_err(|e| format!("could not write {}: {e}", path.display()))
    }

    fn update_state(&mut self, ctx: &egui::Context) {
        let mut changed = self.simulator.poll();
        changed |= self.transcriber.poll();
        if changed {
            ctx.request_repaint();
        }

        if self.simulator.is_active() || self.transcriber.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        if self.screen == Screen::Dossier && !self.dossier_screen.is_ready() {
            ctx.request_repaint_after(Duration::from_millis(200));
        }
    }
}

impl App for PramaanApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        if self.screen == Screen::Upload {
            self.collect_dropped_files(ctx);
        }
        self.render(ctx);
    }
}

fn raw_file_from_path(path: &Path) -> RawFile {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    let size_bytes = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    RawFile {
        name,
        size_bytes,
        mime_type: sniff_mime(path),
    }
}

fn raw_file_from_dropped(file: &egui::DroppedFile) -> Option<RawFile> {
    if let Some(path) = &file.path {
        return Some(raw_file_from_path(path));
    }
    // web/native drops without a path carry the bytes instead
    let bytes = file.bytes.as_ref()?;
    Some(RawFile {
        name: file.name.clone(),
        size_bytes: bytes.len() as u64,
        mime_type: sniff_mime_bytes(&file.name, bytes),
    })
}
