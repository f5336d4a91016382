//! Application shell: state ownership and the frame update loop.

use std::time::Duration;

use crate::api::{ApiRequest, ApiWorker};
use crate::config::AppConfig;
use crate::editor::EditorState;
use crate::handlers;
use crate::message::{Message, NavMessage, Route, SessionMessage};
use crate::model::{
    Dataset, EntityId, Notification, Project, ProjectType, QuotaUsage, TrainingJob, Workspace,
};
use crate::session::SessionContext;
use crate::state::ToastCenter;
use crate::{theme, views};

/// Widget-local state: text buffers and combo selections the views mutate
/// directly while building widgets. Submitted values travel as messages.
#[derive(Default)]
pub struct Forms {
    pub login_email: String,
    pub login_password: String,
    pub workspace_name: String,
    pub project_name: String,
    pub project_type: ProjectType,
    pub dataset_name: String,
    pub job_name: String,
    pub job_dataset: Option<EntityId>,
    pub settings_base_url: String,
    pub settings_asset_url: String,
}

/// The application: all client-side state plus the API worker handle.
pub struct VisionDeskApp {
    pub(crate) config: AppConfig,
    pub(crate) session: SessionContext,
    pub(crate) worker: ApiWorker,
    pub(crate) route: Route,
    pub(crate) toasts: ToastCenter,

    // Dashboard caches, replaced wholesale by load events.
    pub(crate) workspaces: Vec<Workspace>,
    pub(crate) projects: Vec<Project>,
    pub(crate) datasets: Vec<Dataset>,
    pub(crate) jobs: Vec<TrainingJob>,
    pub(crate) notifications: Vec<Notification>,
    pub(crate) quota: Vec<QuotaUsage>,

    pub(crate) selected_project: Option<EntityId>,
    pub(crate) selected_dataset: Option<EntityId>,

    pub(crate) editor: EditorState,
    pub(crate) forms: Forms,
}

impl VisionDeskApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
    ) -> Result<Self, std::io::Error> {
        let session = SessionContext::restore();
        theme::apply(&cc.egui_ctx, config.preferences.dark_theme);

        let repaint_ctx = cc.egui_ctx.clone();
        let worker = ApiWorker::spawn(
            &config.api.base_url,
            &config.api.asset_base_url,
            &session,
            Box::new(move || repaint_ctx.request_repaint()),
        )?;

        let route = if session.is_authenticated() {
            Route::Workspaces
        } else {
            Route::Login
        };

        let forms = Forms {
            settings_base_url: config.api.base_url.clone(),
            settings_asset_url: config.api.asset_base_url.clone(),
            ..Forms::default()
        };

        let app = Self {
            config,
            session,
            worker,
            route,
            toasts: ToastCenter::new(),
            workspaces: Vec::new(),
            projects: Vec::new(),
            datasets: Vec::new(),
            jobs: Vec::new(),
            notifications: Vec::new(),
            quota: Vec::new(),
            selected_project: None,
            selected_dataset: None,
            editor: EditorState::new(),
            forms,
        };

        if app.session.is_authenticated() {
            app.worker.request(ApiRequest::LoadWorkspaces);
            app.worker.request(ApiRequest::LoadNotifications);
            if let Some(workspace_id) = app.session.active_workspace {
                app.worker.request(ApiRequest::LoadProjects { workspace_id });
                app.worker.request(ApiRequest::LoadDatasets { workspace_id });
                app.worker.request(ApiRequest::LoadQuota { workspace_id });
            }
        }

        Ok(app)
    }

    fn top_bar(&mut self, ctx: &egui::Context, messages: &mut Vec<Message>) {
        egui::TopBottomPanel::top("top-bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("VisionDesk");
                ui.separator();

                if !self.session.is_authenticated() {
                    ui.label(self.route.title());
                    return;
                }

                let unread = self
                    .notifications
                    .iter()
                    .filter(|notification| !notification.read)
                    .count();
                let tabs: [(Route, String); 7] = [
                    (Route::Workspaces, "Workspaces".to_string()),
                    (Route::Projects, "Projects".to_string()),
                    (Route::Datasets, "Datasets".to_string()),
                    (Route::Images, "Images".to_string()),
                    (Route::Jobs, "Jobs".to_string()),
                    (Route::Notifications, format!("Notifications ({unread})")),
                    (Route::Settings, "Settings".to_string()),
                ];
                for (route, label) in tabs {
                    if ui
                        .selectable_label(self.route == route, label)
                        .clicked()
                    {
                        messages.push(Message::Nav(NavMessage::Go(route)));
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Sign Out").clicked() {
                        messages.push(Message::Session(SessionMessage::SignOut));
                    }
                    if let Some(user) = self.session.user() {
                        ui.label(&user.email);
                    }
                });
            });
        });
    }
}

impl eframe::App for VisionDeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.toasts.prune();
        if !self.toasts.is_empty() {
            // Keep repainting while toasts are up so they expire on time.
            ctx.request_repaint_after(Duration::from_millis(250));
        }

        for event in self.worker.drain() {
            handlers::handle_api_event(self, event);
        }

        let mut messages: Vec<Message> = Vec::new();

        self.top_bar(ctx, &mut messages);

        egui::CentralPanel::default().show(ctx, |ui| match self.route {
            Route::Login => views::login::view(ui, &mut self.forms, &mut messages),
            Route::Workspaces => views::workspaces::view(
                ui,
                &self.workspaces,
                &self.quota,
                self.session.active_workspace,
                &mut self.forms,
                &mut messages,
            ),
            Route::Projects => views::projects::view(
                ui,
                &self.projects,
                self.selected_project,
                &mut self.forms,
                &mut messages,
            ),
            Route::Datasets => views::datasets::view(
                ui,
                &self.datasets,
                self.selected_dataset,
                &mut self.forms,
                &mut messages,
            ),
            Route::Images => views::images::view(
                ui,
                &self.editor.navigator,
                self.config.preferences.page_size,
                &mut messages,
            ),
            Route::Annotate => views::annotate::view(ui, &mut self.editor, &mut messages),
            Route::Jobs => {
                views::jobs::view(ui, &self.jobs, &self.datasets, &mut self.forms, &mut messages)
            }
            Route::Notifications => {
                views::notifications::view(ui, &self.notifications, &mut messages)
            }
            Route::Settings => {
                views::settings::view(ui, &self.config, &mut self.forms, &mut messages)
            }
        });

        views::helpers::show_toasts(ctx, &self.toasts, &mut messages);

        for message in messages {
            handlers::handle_message(self, message, ctx);
        }
    }
}
