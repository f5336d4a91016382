//! Message and API-event handlers.
//!
//! Each handler processes one category of messages, keeping the main
//! update loop in `app.rs` flat. Handlers mutate state synchronously and
//! express every side effect as a request to the API worker; completed
//! requests come back through [`handle_api_event`].

use crate::api::{ApiEvent, ApiRequest};
use crate::app::VisionDeskApp;
use crate::editor::{EditorState, ViewScale};
use crate::message::{
    DatasetMessage, EditorMessage, ImageMessage, JobMessage, Message, NavMessage, NoticeMessage,
    ProjectMessage, Route, SessionMessage, SettingsMessage, WorkspaceMessage,
};
use crate::model::{Annotation, AnnotationTool, EntityId};
use crate::{config::AppConfig, theme};

/// Apply one UI message.
pub fn handle_message(app: &mut VisionDeskApp, message: Message, ctx: &egui::Context) {
    match message {
        Message::Nav(msg) => handle_nav(app, msg),
        Message::Session(msg) => handle_session(app, msg),
        Message::Workspace(msg) => handle_workspace(app, msg),
        Message::Project(msg) => handle_project(app, msg),
        Message::Dataset(msg) => handle_dataset(app, msg),
        Message::Image(msg) => handle_image(app, msg),
        Message::Editor(msg) => handle_editor(app, msg),
        Message::Job(msg) => handle_job(app, msg),
        Message::Notice(msg) => handle_notice(app, msg),
        Message::Settings(msg) => handle_settings(app, msg, ctx),
        Message::DismissToast(index) => app.toasts.dismiss(index),
    }
}

fn handle_nav(app: &mut VisionDeskApp, msg: NavMessage) {
    match msg {
        NavMessage::Go(route) => {
            log::debug!("Switching to view: {:?}", route);
            app.route = route;
            // Views whose data goes stale quickly refresh on entry.
            match route {
                Route::Jobs => {
                    if let (Some(workspace_id), Some(project_id)) =
                        (app.session.active_workspace, app.selected_project)
                    {
                        app.worker.request(ApiRequest::LoadJobs {
                            workspace_id,
                            project_id,
                        });
                    }
                }
                Route::Notifications => {
                    app.worker.request(ApiRequest::LoadNotifications);
                }
                _ => {}
            }
        }
    }
}

fn handle_session(app: &mut VisionDeskApp, msg: SessionMessage) {
    match msg {
        SessionMessage::LoginSubmitted { email, password } => {
            if email.trim().is_empty() || password.is_empty() {
                app.toasts.error("Email and password are required");
                return;
            }
            app.worker.request(ApiRequest::Login { email, password });
        }
        SessionMessage::SignOut => {
            app.worker.request(ApiRequest::SignOut);
        }
    }
}

fn handle_workspace(app: &mut VisionDeskApp, msg: WorkspaceMessage) {
    match msg {
        WorkspaceMessage::Refresh => {
            app.worker.request(ApiRequest::LoadWorkspaces);
            if let Some(workspace_id) = app.session.active_workspace {
                app.worker.request(ApiRequest::LoadQuota { workspace_id });
            }
        }
        WorkspaceMessage::Create { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                app.toasts.error("Workspace name is required");
                return;
            }
            app.forms.workspace_name.clear();
            app.worker.request(ApiRequest::CreateWorkspace { name });
        }
        WorkspaceMessage::Delete { workspace_id } => {
            app.worker.request(ApiRequest::DeleteWorkspace { workspace_id });
        }
        WorkspaceMessage::Open { workspace_id } => {
            app.session.active_workspace = Some(workspace_id);
            app.session.persist();
            clear_workspace_scope(app);
            app.worker.request(ApiRequest::LoadProjects { workspace_id });
            app.worker.request(ApiRequest::LoadDatasets { workspace_id });
            app.worker.request(ApiRequest::LoadQuota { workspace_id });
            app.route = Route::Projects;
        }
    }
}

fn handle_project(app: &mut VisionDeskApp, msg: ProjectMessage) {
    let Some(workspace_id) = app.session.active_workspace else {
        app.toasts.error("Open a workspace first");
        return;
    };
    match msg {
        ProjectMessage::Refresh => {
            app.worker.request(ApiRequest::LoadProjects { workspace_id });
        }
        ProjectMessage::Create { name, project_type } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                app.toasts.error("Project name is required");
                return;
            }
            app.forms.project_name.clear();
            app.worker.request(ApiRequest::CreateProject {
                workspace_id,
                name,
                project_type,
            });
        }
        ProjectMessage::Delete { project_id } => {
            app.worker.request(ApiRequest::DeleteProject {
                workspace_id,
                project_id,
            });
        }
        ProjectMessage::Open { project_id } => {
            app.selected_project = Some(project_id);
            app.editor.categories.clear();
            app.editor.selected_category = None;
            app.worker.request(ApiRequest::LoadCategories {
                workspace_id,
                project_id,
            });
            app.worker.request(ApiRequest::LoadJobs {
                workspace_id,
                project_id,
            });
            app.route = Route::Datasets;
        }
    }
}

fn handle_dataset(app: &mut VisionDeskApp, msg: DatasetMessage) {
    let Some(workspace_id) = app.session.active_workspace else {
        app.toasts.error("Open a workspace first");
        return;
    };
    match msg {
        DatasetMessage::Refresh => {
            app.worker.request(ApiRequest::LoadDatasets { workspace_id });
        }
        DatasetMessage::Create { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                app.toasts.error("Dataset name is required");
                return;
            }
            app.forms.dataset_name.clear();
            app.worker.request(ApiRequest::CreateDataset { workspace_id, name });
        }
        DatasetMessage::Delete { dataset_id } => {
            app.worker.request(ApiRequest::DeleteDataset {
                workspace_id,
                dataset_id,
            });
        }
        DatasetMessage::Open { dataset_id } => {
            app.selected_dataset = Some(dataset_id);
            app.editor.navigator.clear();
            app.worker.request(ApiRequest::LoadImages {
                workspace_id,
                dataset_id,
                page: 1,
                limit: app.config.preferences.page_size,
            });
            app.route = Route::Images;
        }
    }
}

fn handle_image(app: &mut VisionDeskApp, msg: ImageMessage) {
    match msg {
        ImageMessage::LoadPage { page } => {
            let (Some(workspace_id), Some(dataset_id)) =
                (app.session.active_workspace, app.selected_dataset)
            else {
                return;
            };
            app.worker.request(ApiRequest::LoadImages {
                workspace_id,
                dataset_id,
                page: page.max(1),
                limit: app.config.preferences.page_size,
            });
        }
        ImageMessage::Open { index } => {
            if app.selected_project.is_none() {
                app.toasts.error("Open a project before annotating");
                return;
            }
            if app.editor.navigator.select(index) {
                app.route = Route::Annotate;
                load_current_image(app);
            }
        }
    }
}

fn handle_editor(app: &mut VisionDeskApp, msg: EditorMessage) {
    match msg {
        EditorMessage::ToolSelected(tool) => {
            if tool != app.editor.tool {
                // Switching tools discards any in-progress shape.
                app.editor.store.drawing_mut().cancel();
                app.editor.tool = tool;
            }
        }
        EditorMessage::CategorySelected(category_id) => {
            app.editor.selected_category = Some(category_id);
        }
        EditorMessage::PointerDown(point) => {
            if !app.editor.tool.is_drawing_tool() {
                return;
            }
            if app.editor.selected_category.is_none() {
                app.toasts.error("Select a category before drawing");
                return;
            }
            match app.editor.tool {
                AnnotationTool::BoundingBox => {
                    app.editor.store.drawing_mut().start_bbox(point);
                }
                AnnotationTool::Polygon => {
                    app.editor.store.drawing_mut().push_vertex(point);
                }
                AnnotationTool::Select => {}
            }
        }
        EditorMessage::PointerMoved(point) => {
            app.editor.store.drawing_mut().update_bbox(point);
        }
        EditorMessage::PointerUp => {
            let finished = app.editor.store.drawing_mut().finish_bbox();
            if let Some(bbox) = finished {
                if let Some(category_id) = app.editor.selected_category {
                    app.editor.store.commit_box(bbox, category_id);
                }
            }
        }
        EditorMessage::FinishPolygon => {
            let Some(category_id) = app.editor.selected_category else {
                app.toasts.error("Select a category before finishing");
                return;
            };
            let finished = app.editor.store.drawing_mut().finish_polygon();
            match finished {
                Some(polygon) => {
                    app.editor.store.commit_polygon(polygon, category_id);
                }
                None => {
                    if app.editor.store.drawing().is_drawing() {
                        app.toasts.error("A polygon needs at least 3 points");
                    }
                }
            }
        }
        EditorMessage::ZoomIn => app.editor.scale = app.editor.scale.zoom_in(),
        EditorMessage::ZoomOut => app.editor.scale = app.editor.scale.zoom_out(),
        EditorMessage::ResetZoom => app.editor.scale = ViewScale::default(),
        EditorMessage::NextImage => {
            if app.editor.navigator.next() {
                load_current_image(app);
            }
        }
        EditorMessage::PrevImage => {
            if app.editor.navigator.prev() {
                load_current_image(app);
            }
        }
        EditorMessage::Save => {
            let (Some(workspace_id), Some(project_id), Some(image_id)) = (
                app.session.active_workspace,
                app.selected_project,
                app.editor.navigator.current_id(),
            ) else {
                app.toasts.error("No image to save");
                return;
            };
            app.worker.request(ApiRequest::SaveAnnotations {
                workspace_id,
                project_id,
                image_id,
                annotations: app.editor.store.to_annotations(),
            });
        }
        EditorMessage::RequestClearAll => {
            app.editor.confirm_clear_open = true;
        }
        EditorMessage::ConfirmClearAll => {
            app.editor.store.clear_all();
            app.editor.confirm_clear_open = false;
        }
        EditorMessage::CancelClearAll => {
            app.editor.confirm_clear_open = false;
        }
    }
}

fn handle_job(app: &mut VisionDeskApp, msg: JobMessage) {
    let (Some(workspace_id), Some(project_id)) =
        (app.session.active_workspace, app.selected_project)
    else {
        app.toasts.error("Open a project first");
        return;
    };
    match msg {
        JobMessage::Refresh => {
            app.worker.request(ApiRequest::LoadJobs {
                workspace_id,
                project_id,
            });
        }
        JobMessage::Create { name, dataset_id } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                app.toasts.error("Job name is required");
                return;
            }
            app.forms.job_name.clear();
            app.worker.request(ApiRequest::CreateJob {
                workspace_id,
                project_id,
                name,
                dataset_id,
            });
        }
    }
}

fn handle_notice(app: &mut VisionDeskApp, msg: NoticeMessage) {
    match msg {
        NoticeMessage::Refresh => app.worker.request(ApiRequest::LoadNotifications),
        NoticeMessage::MarkRead { notification_id } => {
            app.worker
                .request(ApiRequest::MarkNotificationRead { notification_id });
        }
    }
}

fn handle_settings(app: &mut VisionDeskApp, msg: SettingsMessage, ctx: &egui::Context) {
    match msg {
        SettingsMessage::SetDarkTheme(dark) => {
            app.config.preferences.dark_theme = dark;
            theme::apply(ctx, dark);
            save_config(app);
        }
        SettingsMessage::SetLogLevel(level) => {
            app.config.preferences.log_level = level;
            log::set_max_level(level.to_level_filter());
            save_config(app);
        }
        SettingsMessage::Apply => {
            app.config.api.base_url = app.forms.settings_base_url.trim().to_string();
            app.config.api.asset_base_url = app.forms.settings_asset_url.trim().to_string();
            save_config(app);
            app.toasts
                .info("Endpoint changes take effect after a restart");
        }
        SettingsMessage::ExportConfig => {
            let Some(path) = rfd::FileDialog::new()
                .set_file_name("visiondesk-config.json")
                .save_file()
            else {
                return;
            };
            match app.config.export(&path) {
                Ok(()) => app.toasts.success("Configuration exported"),
                Err(e) => app.toasts.error(format!("Export failed: {e}")),
            }
        }
        SettingsMessage::ImportConfig => {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .pick_file()
            else {
                return;
            };
            match AppConfig::import(&path) {
                Ok(config) => {
                    app.config = config;
                    app.forms.settings_base_url = app.config.api.base_url.clone();
                    app.forms.settings_asset_url = app.config.api.asset_base_url.clone();
                    theme::apply(ctx, app.config.preferences.dark_theme);
                    log::set_max_level(app.config.preferences.log_level.to_level_filter());
                    save_config(app);
                    app.toasts.success("Configuration imported");
                }
                Err(e) => app.toasts.error(format!("Import failed: {e}")),
            }
        }
    }
}

fn save_config(app: &mut VisionDeskApp) {
    if let Err(e) = app.config.save() {
        log::error!("Failed to save config: {}", e);
        app.toasts.error("Could not save configuration");
    }
}

/// Reset everything scoped to the active workspace.
fn clear_workspace_scope(app: &mut VisionDeskApp) {
    app.projects.clear();
    app.datasets.clear();
    app.jobs.clear();
    app.quota.clear();
    app.selected_project = None;
    app.selected_dataset = None;
    app.editor = EditorState::new();
}

/// Discard per-image editor state and fetch the newly selected image's
/// annotations and pixels.
fn load_current_image(app: &mut VisionDeskApp) {
    let (Some(workspace_id), Some(project_id)) =
        (app.session.active_workspace, app.selected_project)
    else {
        return;
    };
    let Some(image) = app.editor.navigator.current() else {
        return;
    };
    let image_id = image.id;
    let relative_path = image.relative_path.clone();

    app.editor.reset_for_image_change();
    app.worker.request(ApiRequest::LoadAnnotations {
        workspace_id,
        project_id,
        image_id,
    });
    app.worker.request(ApiRequest::LoadImageData {
        image_id,
        relative_path,
    });
}

// ============================================================================
// API events
// ============================================================================

/// Apply one completed API request.
pub fn handle_api_event(app: &mut VisionDeskApp, event: ApiEvent) {
    match event {
        ApiEvent::LoggedIn(Ok((token, user))) => {
            app.forms.login_password.clear();
            app.toasts.success(format!("Signed in as {}", user.email));
            app.session.begin(token, user);
            app.session.persist();
            app.route = Route::Workspaces;
            app.worker.request(ApiRequest::LoadWorkspaces);
            app.worker.request(ApiRequest::LoadNotifications);
        }
        ApiEvent::LoggedIn(Err(e)) => {
            log::warn!("Login failed: {}", e);
            app.toasts.error(format!("Sign-in failed: {e}"));
        }
        ApiEvent::SignedOut => {
            app.session.end();
            app.session.persist();
            app.workspaces.clear();
            app.notifications.clear();
            clear_workspace_scope(app);
            app.route = Route::Login;
        }

        ApiEvent::WorkspacesLoaded(result) => {
            app.workspaces = unwrap_or_empty(result, "workspaces");
        }
        ApiEvent::WorkspaceCreated(Ok(workspace)) => {
            app.toasts.success(format!("Workspace {:?} created", workspace.name));
            app.workspaces.push(workspace);
        }
        ApiEvent::WorkspaceCreated(Err(e)) => {
            app.toasts.error(format!("Could not create workspace: {e}"));
        }
        ApiEvent::WorkspaceDeleted(Ok(workspace_id)) => {
            app.workspaces.retain(|workspace| workspace.id != workspace_id);
            if app.session.active_workspace == Some(workspace_id) {
                app.session.active_workspace = None;
                app.session.persist();
                clear_workspace_scope(app);
            }
            app.toasts.success("Workspace deleted");
        }
        ApiEvent::WorkspaceDeleted(Err(e)) => {
            app.toasts.error(format!("Could not delete workspace: {e}"));
        }

        ApiEvent::ProjectsLoaded(result) => {
            app.projects = unwrap_or_empty(result, "projects");
        }
        ApiEvent::ProjectCreated(Ok(project)) => {
            app.toasts.success(format!("Project {:?} created", project.name));
            app.projects.push(project);
        }
        ApiEvent::ProjectCreated(Err(e)) => {
            app.toasts.error(format!("Could not create project: {e}"));
        }
        ApiEvent::ProjectDeleted(Ok(project_id)) => {
            app.projects.retain(|project| project.id != project_id);
            if app.selected_project == Some(project_id) {
                app.selected_project = None;
                app.jobs.clear();
                app.editor = EditorState::new();
            }
            app.toasts.success("Project deleted");
        }
        ApiEvent::ProjectDeleted(Err(e)) => {
            app.toasts.error(format!("Could not delete project: {e}"));
        }

        ApiEvent::DatasetsLoaded(result) => {
            app.datasets = unwrap_or_empty(result, "datasets");
        }
        ApiEvent::DatasetCreated(Ok(dataset)) => {
            app.toasts.success(format!("Dataset {:?} created", dataset.name));
            app.datasets.push(dataset);
        }
        ApiEvent::DatasetCreated(Err(e)) => {
            app.toasts.error(format!("Could not create dataset: {e}"));
        }
        ApiEvent::DatasetDeleted(Ok(dataset_id)) => {
            app.datasets.retain(|dataset| dataset.id != dataset_id);
            if app.selected_dataset == Some(dataset_id) {
                app.selected_dataset = None;
                app.editor.navigator.clear();
            }
            app.toasts.success("Dataset deleted");
        }
        ApiEvent::DatasetDeleted(Err(e)) => {
            app.toasts.error(format!("Could not delete dataset: {e}"));
        }

        ApiEvent::ImagesLoaded {
            dataset_id,
            page,
            result,
        } => {
            if app.selected_dataset != Some(dataset_id) {
                log::debug!("Discarding image page for non-current dataset {dataset_id}");
                return;
            }
            match result {
                Ok(image_page) => {
                    app.editor
                        .navigator
                        .set_page(image_page.images, page, image_page.total);
                }
                Err(e) => {
                    log::error!("Failed to load images: {}", e);
                    app.editor.navigator.clear();
                }
            }
        }
        ApiEvent::ImageDataLoaded { image_id, result } => {
            apply_image_data_loaded(&mut app.editor, image_id, result);
        }

        ApiEvent::CategoriesLoaded(result) => {
            app.editor.categories = unwrap_or_empty(result, "categories");
            if let Some(selected) = app.editor.selected_category {
                if !app.editor.categories.iter().any(|c| c.id == selected) {
                    app.editor.selected_category = None;
                }
            }
        }

        ApiEvent::AnnotationsLoaded { image_id, result } => {
            apply_annotations_loaded(&mut app.editor, image_id, result);
        }
        ApiEvent::AnnotationsSaved { image_id, result } => match result {
            Ok(count) => {
                app.toasts.success(format!("Saved {count} annotation(s)"));
                if app.editor.navigator.current_id() == Some(image_id) {
                    app.editor.store.mark_saved();
                }
            }
            Err(e) => {
                // Local shapes are left untouched so the user can retry.
                app.toasts.error(format!("Save failed: {e}"));
            }
        },

        ApiEvent::JobsLoaded(result) => {
            app.jobs = unwrap_or_empty(result, "jobs");
        }
        ApiEvent::JobCreated(Ok(job)) => {
            app.toasts.success(format!("Training job {:?} queued", job.name));
            app.jobs.push(job);
        }
        ApiEvent::JobCreated(Err(e)) => {
            app.toasts.error(format!("Could not create job: {e}"));
        }

        ApiEvent::NotificationsLoaded(result) => {
            app.notifications = unwrap_or_empty(result, "notifications");
        }
        ApiEvent::NotificationMarkedRead(Ok(notification_id)) => {
            if let Some(notification) = app
                .notifications
                .iter_mut()
                .find(|notification| notification.id == notification_id)
            {
                notification.read = true;
            }
        }
        ApiEvent::NotificationMarkedRead(Err(e)) => {
            app.toasts.error(format!("Could not mark notification read: {e}"));
        }

        ApiEvent::QuotaLoaded(result) => {
            app.quota = unwrap_or_empty(result, "quota");
        }
    }
}

/// Load failures degrade to an empty list with a log line; the page stays
/// interactive and shows its placeholder.
fn unwrap_or_empty<T>(result: Result<Vec<T>, crate::api::ApiError>, what: &str) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            log::error!("Failed to load {}: {}", what, e);
            Vec::new()
        }
    }
}

/// Install a fetched annotation set, unless it is stale.
///
/// Rapid navigation can leave a fetch for a previous image in flight; a
/// response tagged with an image that is no longer current is discarded so
/// it cannot populate another image's shape lists.
fn apply_annotations_loaded(
    editor: &mut EditorState,
    image_id: EntityId,
    result: Result<Vec<Annotation>, crate::api::ApiError>,
) {
    if editor.navigator.current_id() != Some(image_id) {
        log::debug!("Discarding stale annotation response for image {image_id}");
        return;
    }
    match result {
        Ok(annotations) => {
            log::info!(
                "Loaded {} annotation(s) for image {}",
                annotations.len(),
                image_id
            );
            editor.store.replace_from(annotations);
        }
        Err(e) => {
            // Fail safe to an empty canvas; there is no automatic retry.
            log::error!("Failed to load annotations for image {}: {}", image_id, e);
            editor.store.replace_from(Vec::new());
        }
    }
}

/// Install fetched image bytes, unless they are stale.
fn apply_image_data_loaded(
    editor: &mut EditorState,
    image_id: EntityId,
    result: Result<Vec<u8>, crate::api::ApiError>,
) {
    if editor.navigator.current_id() != Some(image_id) {
        log::debug!("Discarding stale image binary for image {image_id}");
        return;
    }
    match result {
        Ok(bytes) => match image::load_from_memory(&bytes) {
            Ok(decoded) => {
                editor.raw_image = Some(decoded);
                editor.raw_image_id = Some(image_id);
                editor.texture = None;
            }
            Err(e) => {
                log::error!("Failed to decode image {}: {}", image_id, e);
            }
        },
        Err(e) => {
            log::error!("Failed to fetch image {}: {}", image_id, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use crate::model::{BoundingBox, ImageRef, Point, Polygon, Shape};

    fn image(id: EntityId) -> ImageRef {
        ImageRef {
            id,
            file_name: format!("img{id}.jpg"),
            relative_path: format!("ds/img{id}.jpg"),
            width: 640,
            height: 480,
        }
    }

    fn editor_with_images() -> EditorState {
        let mut editor = EditorState::new();
        editor.navigator.set_page(vec![image(100), image(101)], 1, 2);
        editor
    }

    fn sample_annotations() -> Vec<Annotation> {
        vec![Annotation::new(
            1,
            Shape::BoundingBox(BoundingBox::new(10.0, 10.0, 40.0, 50.0)),
        )]
    }

    #[test]
    fn test_stale_annotation_response_is_discarded() {
        // Fetch for image 100 is pending; the user has already moved on to
        // image 101. The late response must not touch image 101's store.
        let mut editor = editor_with_images();
        editor.navigator.select(1);

        apply_annotations_loaded(&mut editor, 100, Ok(sample_annotations()));

        assert!(editor.store.is_empty());
    }

    #[test]
    fn test_current_annotation_response_is_applied() {
        let mut editor = editor_with_images();
        editor.navigator.select(1);

        apply_annotations_loaded(&mut editor, 101, Ok(sample_annotations()));

        assert_eq!(editor.store.len(), 1);
        assert!(!editor.store.is_dirty());
    }

    #[test]
    fn test_fetch_failure_clears_to_empty_canvas() {
        let mut editor = editor_with_images();
        editor.store.replace_from(vec![Annotation::new(
            2,
            Shape::Polygon(Polygon::new(vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(5.0, 10.0),
            ])),
        )]);
        assert_eq!(editor.store.len(), 1);

        apply_annotations_loaded(
            &mut editor,
            100,
            Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            }),
        );

        assert!(editor.store.is_empty());
    }

    #[test]
    fn test_stale_image_binary_is_discarded() {
        let mut editor = editor_with_images();
        editor.navigator.select(1);

        apply_image_data_loaded(&mut editor, 100, Ok(vec![1, 2, 3]));

        assert!(editor.raw_image.is_none());
        assert!(editor.raw_image_id.is_none());
    }

    #[test]
    fn test_undecodable_image_leaves_canvas_empty() {
        let mut editor = editor_with_images();

        apply_image_data_loaded(&mut editor, 100, Ok(vec![0xde, 0xad, 0xbe, 0xef]));

        assert!(editor.raw_image.is_none());
    }
}
