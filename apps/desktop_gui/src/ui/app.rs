use std::path::PathBuf;

use article_store::{ArticleStore, Settings};
use eframe::egui;
use shared::domain::{Article, ArticleField};

use crate::controller::events::{UiAction, UiError};
use crate::controller::orchestration::{dispatch_intent, summary_line};
use crate::controller::reducer::intent_for;

const DELETE_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);
const EDIT_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub window_title: String,
    pub seed_path: Option<PathBuf>,
    pub initial_search: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self::from_settings(Settings::default(), None, None)
    }
}

impl StartupConfig {
    /// Command-line values win over the settings file.
    pub fn from_settings(
        settings: Settings,
        seed_override: Option<PathBuf>,
        search_override: Option<String>,
    ) -> Self {
        Self {
            window_title: settings.window_title,
            seed_path: seed_override.or(settings.seed_path),
            initial_search: search_override.unwrap_or(settings.initial_search),
        }
    }
}

#[derive(Debug, Clone)]
struct StatusBanner {
    message: String,
}

pub struct ArticleManagerApp {
    store: ArticleStore,
    status: String,
    status_banner: Option<StatusBanner>,
    // Set when a draft opens so the title field grabs focus once.
    focus_title: bool,
}

impl ArticleManagerApp {
    pub fn bootstrap(
        store: ArticleStore,
        startup: &StartupConfig,
        startup_errors: Vec<UiError>,
    ) -> Self {
        let mut app = Self {
            store,
            status: "Ready".to_string(),
            status_banner: None,
            focus_title: false,
        };
        if !startup.initial_search.is_empty() {
            app.apply(UiAction::Search(startup.initial_search.clone()));
        }
        for err in &startup_errors {
            app.show_error(err);
        }
        app
    }

    fn show_error(&mut self, err: &UiError) {
        tracing::warn!(
            category = ?err.category(),
            context = ?err.context(),
            "{}",
            err.message()
        );
        let text = err.banner_text();
        match &mut self.status_banner {
            // Startup can report both a config and a seed problem.
            Some(banner) => {
                if !banner.message.contains(&text) {
                    banner.message.push('\n');
                    banner.message.push_str(&text);
                }
            }
            None => self.status_banner = Some(StatusBanner { message: text }),
        }
    }

    fn apply(&mut self, action: UiAction) {
        if action == UiAction::DismissBanner {
            self.status_banner = None;
            return;
        }
        let opens_draft = matches!(action, UiAction::Edit(_));
        match intent_for(&self.store, action) {
            Ok(Some(intent)) => {
                dispatch_intent(&mut self.store, intent, &mut self.status);
                if opens_draft && self.store.is_editing() {
                    self.focus_title = true;
                }
            }
            Ok(None) => {}
            Err(err) => self.show_error(&err),
        }
    }

    fn show_status_banner(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let Some(banner) = &self.status_banner else {
            return;
        };
        egui::Frame::NONE
            .fill(egui::Color32::from_rgb(111, 53, 53))
            .stroke(egui::Stroke::new(
                1.0,
                egui::Color32::from_rgb(175, 96, 96),
            ))
            .corner_radius(8.0)
            .inner_margin(egui::Margin::symmetric(10, 8))
            .show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            actions.push(UiAction::DismissBanner);
                        }
                    });
                });
            });
        ui.add_space(8.0);
    }

    fn show_search_bar(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let mut term = self.store.search_term().to_string();
        let edit = egui::TextEdit::singleline(&mut term)
            .id_salt("article_search")
            .hint_text("Search articles...")
            .desired_width(f32::INFINITY);
        let response = ui.add_sized([ui.available_width(), 32.0], edit);
        if response.changed() {
            actions.push(UiAction::Search(term));
        }
    }

    fn show_articles_table(&self, ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        let rows = self.store.filtered();
        if rows.is_empty() {
            ui.add_space(12.0);
            ui.weak("No articles match your search.");
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("articles_table")
                    .num_columns(4)
                    .striped(true)
                    .spacing([24.0, 10.0])
                    .show(ui, |ui| {
                        for heading in ["ID", "TITLE", "CONTENT", "ACTIONS"] {
                            ui.label(egui::RichText::new(heading).small().strong().weak());
                        }
                        ui.end_row();

                        for article in rows {
                            article_row(ui, article, actions);
                            ui.end_row();
                        }
                    });
            });
    }

    fn show_edit_window(&mut self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        let Some(draft) = self.store.editing().cloned() else {
            return;
        };
        let focus_title = std::mem::take(&mut self.focus_title);
        let mut open = true;

        egui::Window::new("Update Article")
            .id(egui::Id::new("update_article_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.set_min_width(380.0);

                ui.label(egui::RichText::new(ArticleField::Titre.label()).strong());
                let mut titre = draft.titre.clone();
                let title_response = ui.add(
                    egui::TextEdit::singleline(&mut titre)
                        .id_salt("draft_titre")
                        .hint_text("Enter title")
                        .desired_width(f32::INFINITY),
                );
                if focus_title {
                    title_response.request_focus();
                }
                if title_response.changed() {
                    actions.push(UiAction::Field {
                        field: ArticleField::Titre,
                        value: titre,
                    });
                }
                let submitted = title_response.lost_focus()
                    && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.add_space(6.0);
                ui.label(egui::RichText::new(ArticleField::Contenu.label()).strong());
                let mut contenu = draft.contenu.clone();
                let content_response = ui.add(
                    egui::TextEdit::multiline(&mut contenu)
                        .id_salt("draft_contenu")
                        .hint_text("Enter content")
                        .desired_rows(6)
                        .desired_width(f32::INFINITY),
                );
                if content_response.changed() {
                    actions.push(UiAction::Field {
                        field: ArticleField::Contenu,
                        value: contenu,
                    });
                }

                ui.add_space(10.0);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let save = egui::Button::new(
                        egui::RichText::new("Save Changes").color(egui::Color32::WHITE),
                    )
                    .fill(EDIT_BLUE);
                    if ui.add(save).clicked() || submitted {
                        actions.push(UiAction::Save);
                    }
                    if ui.button("Cancel").clicked() {
                        actions.push(UiAction::Cancel);
                    }
                });
            });

        if !open || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            actions.push(UiAction::Cancel);
        }
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.small(summary_line(&self.store));
                ui.separator();
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });
    }
}

fn article_row(ui: &mut egui::Ui, article: &Article, actions: &mut Vec<UiAction>) {
    ui.label(egui::RichText::new(article.id.to_string()).weak());
    ui.label(&article.titre);
    ui.label(&article.contenu);
    ui.horizontal(|ui| {
        let edit = egui::Button::new(egui::RichText::new("Edit").color(EDIT_BLUE)).frame(false);
        if ui.add(edit).on_hover_text("Edit article").clicked() {
            actions.push(UiAction::Edit(article.id));
        }
        let delete =
            egui::Button::new(egui::RichText::new("Delete").color(DELETE_RED)).frame(false);
        if ui.add(delete).on_hover_text("Delete article").clicked() {
            actions.push(UiAction::Delete(article.id));
        }
    });
}

impl eframe::App for ArticleManagerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut actions = Vec::new();
        let editing = self.store.is_editing();

        self.show_status_bar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui, &mut actions);
            // The edit window is modal: the list underneath is inert while it is open.
            ui.add_enabled_ui(!editing, |ui| {
                self.show_search_bar(ui, &mut actions);
                ui.add_space(12.0);
                self.show_articles_table(ui, &mut actions);
            });
        });
        self.show_edit_window(ctx, &mut actions);

        for action in actions {
            self.apply(action);
        }
    }
}
