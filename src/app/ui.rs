use eframe::egui::{self, Color32, RichText};

use crate::data::{CaseDataProvider, Relevance, StepStatus};
use crate::intake::{Role, LANGUAGES};
use crate::upload::Category;
use crate::utils::color::ColorExt;
use crate::utils::file_size::format_size;

use super::{PramaanApp, Screen};

const SUCCESS: Color32 = Color32::from_rgb(0, 180, 0);
const DANGER: Color32 = Color32::from_rgb(220, 50, 50);
const ACCENT: Color32 = Color32::from_rgb(245, 158, 11);

fn muted(ui: &egui::Ui, text: &str) -> RichText {
    RichText::new(text).color(ui.visuals().text_color().gamma_multiply(0.7))
}

fn relevance_color(relevance: Relevance) -> Color32 {
    match relevance {
        Relevance::High => DANGER,
        Relevance::Medium => ACCENT,
        Relevance::Low => Color32::from_rgb(150, 150, 150),
    }
}

impl PramaanApp {
    pub(super) fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚖ PRAMAAN").strong());
                ui.separator();
                for screen in Screen::ALL {
                    if ui
                        .selectable_label(self.screen == screen, screen.title())
                        .clicked()
                    {
                        self.open(screen);
                    }
                }
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(16.0);
                match self.screen {
                    Screen::Home => self.render_home(ui),
                    Screen::Intake => self.render_intake(ui),
                    Screen::Upload => self.render_upload(ui),
                    Screen::Dashboard => self.render_dashboard(ui),
                    Screen::Dossier => self.render_dossier(ui),
                    Screen::Lawyers => self.render_lawyers(ui),
                }
                ui.add_space(24.0);
            });
        });
    }

    fn render_home(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.heading(RichText::new("Justice, Simplified.").size(28.0));
            ui.add_space(8.0);
            ui.label(muted(
                ui,
                "Describe your issue, upload your evidence, and get a court-ready \
                 dossier, in your own language.",
            ));
            ui.add_space(24.0);

            ui.label("🎙 Speak your complaint in your own words");
            ui.label("📂 Upload documents, photos and records");
            ui.label("📜 Receive a dossier and connect with a lawyer");
            ui.add_space(24.0);

            let button = egui::Button::new("Start Your Case ➡").min_size(egui::vec2(200.0, 40.0));
            if ui.add(button).clicked() {
                self.open(Screen::Intake);
            }

            ui.add_space(16.0);
            ui.label(muted(ui, "Demo build. Nothing leaves this device."));
        });
    }

    fn render_intake(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Tell Us What Happened");
            ui.label(muted(ui, "Speak in your own words, in your own language."));
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label("🌐");
            egui::ComboBox::from_id_source("intake_language")
                .selected_text(self.intake_screen.language.name)
                .show_ui(ui, |ui| {
                    for language in LANGUAGES {
                        ui.selectable_value(
                            &mut self.intake_screen.language,
                            language,
                            language.name,
                        );
                    }
                });
        });
        ui.add_space(12.0);

        let recording = self.transcriber.is_recording();
        ui.vertical_centered(|ui| {
            let label = if recording {
                "🛑 Tap to stop recording"
            } else {
                "🎙 Tap to start speaking"
            };
            let button = egui::Button::new(label).min_size(egui::vec2(240.0, 48.0));
            if ui.add(button).clicked() {
                if recording {
                    let reply = self.provider.intake_reply();
                    self.transcriber.stop(reply);
                } else {
                    let statement = self.provider.intake_statement();
                    self.transcriber.start(statement);
                }
            }
            ui.add_space(4.0);
            ui.label(muted(
                ui,
                if recording {
                    "Listening..."
                } else {
                    "Your voice will be converted to text"
                },
            ));
        });
        ui.add_space(12.0);

        if recording || !self.transcriber.transcript().is_empty() {
            ui.group(|ui| {
                ui.label(muted(ui, "🔊 Live Transcript"));
                ui.add_space(4.0);
                ui.label(self.transcriber.transcript());
            });
            ui.add_space(8.0);
        }

        for message in self.transcriber.messages() {
            let icon = match message.role {
                Role::User => "🧑",
                Role::Assistant => "⚖",
            };
            ui.horizontal_wrapped(|ui| {
                ui.label(icon);
                ui.label(&message.content);
            });
            ui.add_space(4.0);
        }
        if self.transcriber.is_processing() {
            ui.horizontal(|ui| {
                ui.label("⚖");
                ui.spinner();
            });
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button("Continue to Evidence Upload ➡").clicked() {
                self.open(Screen::Upload);
            }
        });
    }

    fn render_upload(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Upload Your Evidence");
            ui.label(muted(ui, "Add supporting documents, photos, and records."));
        });
        ui.add_space(12.0);

        ui.horizontal_wrapped(|ui| {
            for category in Category::ALL {
                let selected = self.upload_screen.selected_category == category;
                if ui.selectable_label(selected, category.label()).clicked() {
                    self.upload_screen.selected_category = category;
                }
            }
        });
        ui.add_space(8.0);

        ui.group(|ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("📂 Drag & drop files here");
                ui.label(muted(ui, "or browse from your device"));
                ui.add_space(8.0);
                if ui.button("📁 Browse Files").clicked() {
                    self.browse_files();
                }
                ui.add_space(8.0);
                ui.label(muted(ui, "Supports PDF, DOC, JPG, PNG, MP4 (Max 50MB each)"));
                ui.add_space(16.0);
            });
        });

        if !self.upload_screen.rejections.is_empty() {
            ui.add_space(8.0);
            let rejections = self.upload_screen.rejections.clone();
            for rejection in &rejections {
                ui.colored_label(
                    DANGER,
                    format!("❌ {} - {}", rejection.name, rejection.reason),
                );
            }
        }

        let records = self.simulator.records().to_vec();
        if !records.is_empty() {
            ui.add_space(12.0);
            ui.label(
                RichText::new(format!(
                    "Uploaded Evidence ({}, {} complete)",
                    records.len(),
                    self.simulator.completed_count()
                ))
                .strong(),
            );
            ui.add_space(4.0);

            for record in &records {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(if record.is_image() { "🖼" } else { "📄" });

                        ui.vertical(|ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&record.name).strong());
                                ui.label(muted(ui, &format_size(record.size_bytes)));
                                let accent = Color32::from_hex(record.category.accent_hex())
                                    .unwrap_or(Color32::GRAY);
                                ui.colored_label(accent, record.category.label());
                            });

                            if record.completed {
                                ui.colored_label(SUCCESS, "✅ Complete");
                            } else {
                                let bar = egui::ProgressBar::new(record.progress / 100.0)
                                    .text(format!("{}%", record.progress.round() as u32));
                                ui.add(bar);
                            }
                        });

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("🗑").clicked() {
                                    self.simulator.remove(record.id);
                                }
                            },
                        );
                    });
                });
                ui.add_space(4.0);
            }
        }

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button("Continue to Dashboard ➡").clicked() {
                self.open(Screen::Dashboard);
            }
        });
    }

    fn render_dashboard(&mut self, ui: &mut egui::Ui) {
        let steps = self.provider.case_steps();
        let timeline = self.provider.timeline();
        let checklist = self.provider.evidence_checklist();
        let laws = self.provider.applicable_laws();
        let precedents = self.provider.precedents();

        ui.group(|ui| {
            ui.horizontal(|ui| {
                for (index, step) in steps.iter().enumerate() {
                    if index > 0 {
                        ui.label(muted(ui, "—"));
                    }
                    match step.status {
                        StepStatus::Completed => {
                            ui.colored_label(SUCCESS, format!("✅ {}", step.name));
                        }
                        StepStatus::Current => {
                            ui.colored_label(ACCENT, format!("🔶 {}", step.name));
                        }
                        StepStatus::Pending => {
                            ui.label(muted(ui, &step.name));
                        }
                    }
                }
            });
        });
        ui.add_space(12.0);

        ui.label(RichText::new("🕒 Case Timeline").strong());
        ui.group(|ui| {
            for event in &timeline {
                ui.horizontal(|ui| {
                    ui.label(muted(ui, &event.when));
                    ui.label(&event.title);
                });
            }
        });
        ui.add_space(12.0);

        ui.label(RichText::new("📋 Evidence Checklist").strong());
        ui.group(|ui| {
            for item in &checklist {
                if item.uploaded {
                    ui.colored_label(SUCCESS, format!("✅ {}", item.name));
                } else {
                    ui.label(muted(ui, &format!("⬜ {}", item.name)));
                }
            }
        });
        ui.add_space(12.0);

        ui.label(RichText::new("⚖ Applicable Laws").strong());
        for law in &laws {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&law.title).strong());
                    ui.colored_label(
                        relevance_color(law.relevance),
                        format!("{} relevance", law.relevance.label()),
                    );
                });
                for section in &law.sections {
                    ui.label(muted(ui, section));
                }
            });
            ui.add_space(4.0);
        }
        ui.add_space(8.0);

        ui.label(RichText::new("🏛 Precedents").strong());
        for precedent in &precedents {
            ui.group(|ui| {
                ui.label(RichText::new(&precedent.case).strong());
                ui.label(muted(ui, &precedent.court));
                ui.label(&precedent.summary);
            });
            ui.add_space(4.0);
        }

        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            if ui.button("Continue to Dossier ➡").clicked() {
                self.open(Screen::Dossier);
            }
        });
    }

    fn render_dossier(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Your Legal Dossier");
            ui.label(muted(ui, "Court-ready documentation for your case."));
        });
        ui.add_space(12.0);

        let ready = self.dossier_screen.is_ready();
        ui.vertical_centered(|ui| {
            if ready {
                ui.colored_label(SUCCESS, "✅ Human Verified Draft");
            } else {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.colored_label(ACCENT, "Preparing Dossier...");
                });
            }
        });
        ui.add_space(12.0);

        let sections = self.provider.dossier_sections();
        ui.group(|ui| {
            egui::Grid::new("dossier_sections")
                .num_columns(2)
                .spacing([24.0, 6.0])
                .show(ui, |ui| {
                    for section in &sections {
                        ui.label(&section.title);
                        ui.label(muted(ui, &format!("pages {}", section.pages)));
                        ui.end_row();
                    }
                });
        });
        ui.add_space(12.0);

        ui.vertical_centered(|ui| {
            ui.add_enabled_ui(ready, |ui| {
                if ui.button("⬇ Download JSON Summary").clicked() {
                    self.export_summary();
                }
            });
            if let Some(status) = self.dossier_screen.status.clone() {
                ui.add_space(6.0);
                ui.label(muted(ui, &status));
            }
        });

        ui.add_space(16.0);
        ui.vertical_centered(|ui| {
            if ui.button("Connect with a Lawyer ➡").clicked() {
                self.open(Screen::Lawyers);
            }
        });
    }

    fn render_lawyers(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Connect with a Lawyer");
            ui.label(muted(ui, "Verified legal professionals ready to help."));
        });
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label("🔎");
            ui.text_edit_singleline(&mut self.lawyers_screen.query);
        });
        ui.add_space(8.0);

        if let Some(note) = self.lawyers_screen.callback_note.clone() {
            ui.colored_label(SUCCESS, note);
            ui.add_space(8.0);
        }

        let results = self.provider.search_lawyers(&self.lawyers_screen.query);
        if results.is_empty() {
            ui.label(muted(ui, "No lawyers match your search."));
        }

        for lawyer in &results {
            ui.group(|ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(&lawyer.initials).strong());

                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&lawyer.name).strong());
                            if lawyer.verified {
                                ui.colored_label(SUCCESS, "✔ Verified");
                            }
                            if !lawyer.available {
                                ui.label(muted(ui, "Currently unavailable"));
                            }
                        });
                        ui.label(&lawyer.specialization);
                        ui.label(muted(
                            ui,
                            &format!(
                                "{} yrs · {} · ⭐ {:.1} ({} reviews) · {}",
                                lawyer.experience_years,
                                lawyer.location,
                                lawyer.rating,
                                lawyer.reviews,
                                lawyer.consultation_fee
                            ),
                        ));
                    });

                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            ui.add_enabled_ui(lawyer.available, |ui| {
                                if ui.button("📞 Request Callback").clicked() {
                                    self.lawyers_screen.callback_note = Some(format!(
                                        "{} will call you back shortly.",
                                        lawyer.name
                                    ));
                                }
                            });
                        },
                    );
                });
            });
            ui.add_space(4.0);
        }
    }
}
