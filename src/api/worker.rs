//! Background worker for platform API calls.
//!
//! The UI thread never blocks on the network: requests go over a channel to
//! a dedicated worker thread that owns the [`VisionClient`], and results
//! come back as [`ApiEvent`]s drained once per frame. Requests are executed
//! in order; nothing is cancelable or deduplicated once issued, so events
//! that can go stale (annotation and image fetches) carry the image id they
//! were issued for and the handlers drop mismatches.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread;

use crate::model::{
    Annotation, Category, Dataset, EntityId, Notification, Project, ProjectType, QuotaUsage,
    TrainingJob, User, Workspace,
};
use crate::session::SessionContext;

use super::client::VisionClient;
use super::error::ApiError;
use super::schema::ImagePage;

/// A request the UI enqueues for the worker thread.
#[derive(Debug, Clone)]
pub enum ApiRequest {
    Login {
        email: String,
        password: String,
    },
    SignOut,
    LoadWorkspaces,
    CreateWorkspace {
        name: String,
    },
    DeleteWorkspace {
        workspace_id: EntityId,
    },
    LoadProjects {
        workspace_id: EntityId,
    },
    CreateProject {
        workspace_id: EntityId,
        name: String,
        project_type: ProjectType,
    },
    DeleteProject {
        workspace_id: EntityId,
        project_id: EntityId,
    },
    LoadDatasets {
        workspace_id: EntityId,
    },
    CreateDataset {
        workspace_id: EntityId,
        name: String,
    },
    DeleteDataset {
        workspace_id: EntityId,
        dataset_id: EntityId,
    },
    LoadImages {
        workspace_id: EntityId,
        dataset_id: EntityId,
        page: u32,
        limit: u32,
    },
    LoadImageData {
        image_id: EntityId,
        relative_path: String,
    },
    LoadCategories {
        workspace_id: EntityId,
        project_id: EntityId,
    },
    LoadAnnotations {
        workspace_id: EntityId,
        project_id: EntityId,
        image_id: EntityId,
    },
    SaveAnnotations {
        workspace_id: EntityId,
        project_id: EntityId,
        image_id: EntityId,
        annotations: Vec<Annotation>,
    },
    LoadJobs {
        workspace_id: EntityId,
        project_id: EntityId,
    },
    CreateJob {
        workspace_id: EntityId,
        project_id: EntityId,
        name: String,
        dataset_id: EntityId,
    },
    LoadNotifications,
    MarkNotificationRead {
        notification_id: EntityId,
    },
    LoadQuota {
        workspace_id: EntityId,
    },
}

/// A completed request, delivered back to the UI thread.
#[derive(Debug)]
pub enum ApiEvent {
    LoggedIn(Result<(String, User), ApiError>),
    SignedOut,
    WorkspacesLoaded(Result<Vec<Workspace>, ApiError>),
    WorkspaceCreated(Result<Workspace, ApiError>),
    WorkspaceDeleted(Result<EntityId, ApiError>),
    ProjectsLoaded(Result<Vec<Project>, ApiError>),
    ProjectCreated(Result<Project, ApiError>),
    ProjectDeleted(Result<EntityId, ApiError>),
    DatasetsLoaded(Result<Vec<Dataset>, ApiError>),
    DatasetCreated(Result<Dataset, ApiError>),
    DatasetDeleted(Result<EntityId, ApiError>),
    ImagesLoaded {
        dataset_id: EntityId,
        page: u32,
        result: Result<ImagePage, ApiError>,
    },
    /// Raw image bytes, tagged with the image they were fetched for.
    ImageDataLoaded {
        image_id: EntityId,
        result: Result<Vec<u8>, ApiError>,
    },
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    /// Tagged with the image the fetch was issued for; the handler ignores
    /// events whose image is no longer current.
    AnnotationsLoaded {
        image_id: EntityId,
        result: Result<Vec<Annotation>, ApiError>,
    },
    AnnotationsSaved {
        image_id: EntityId,
        result: Result<usize, ApiError>,
    },
    JobsLoaded(Result<Vec<TrainingJob>, ApiError>),
    JobCreated(Result<TrainingJob, ApiError>),
    NotificationsLoaded(Result<Vec<Notification>, ApiError>),
    NotificationMarkedRead(Result<EntityId, ApiError>),
    QuotaLoaded(Result<Vec<QuotaUsage>, ApiError>),
}

/// Handle to the worker thread.
pub struct ApiWorker {
    requests: Sender<ApiRequest>,
    events: Receiver<ApiEvent>,
}

impl ApiWorker {
    /// Spawn the worker thread. `notify` is called after every completed
    /// request so the UI can schedule a repaint.
    pub fn spawn(
        base_url: &str,
        asset_base_url: &str,
        session: &SessionContext,
        notify: Box<dyn Fn() + Send>,
    ) -> std::io::Result<Self> {
        let (request_tx, request_rx) = channel::<ApiRequest>();
        let (event_tx, event_rx) = channel::<ApiEvent>();
        let mut client = VisionClient::new(base_url, asset_base_url, session);

        thread::Builder::new()
            .name("api-worker".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    let event = execute(&mut client, request);
                    if event_tx.send(event).is_err() {
                        break;
                    }
                    notify();
                }
                log::debug!("API worker shutting down");
            })?;

        Ok(Self {
            requests: request_tx,
            events: event_rx,
        })
    }

    /// Enqueue a request. Dropped silently if the worker is gone; the next
    /// drain will simply produce nothing, which degrades like any other
    /// network failure.
    pub fn request(&self, request: ApiRequest) {
        if self.requests.send(request).is_err() {
            log::error!("API worker is gone, dropping request");
        }
    }

    /// Drain all events that completed since the last frame.
    pub fn drain(&self) -> Vec<ApiEvent> {
        let mut events = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

fn execute(client: &mut VisionClient, request: ApiRequest) -> ApiEvent {
    match request {
        ApiRequest::Login { email, password } => {
            let result = client.login(&email, &password);
            if let Ok((token, _)) = &result {
                client.set_token(Some(token.clone()));
            }
            ApiEvent::LoggedIn(result)
        }
        ApiRequest::SignOut => {
            client.set_token(None);
            ApiEvent::SignedOut
        }
        ApiRequest::LoadWorkspaces => ApiEvent::WorkspacesLoaded(client.workspaces()),
        ApiRequest::CreateWorkspace { name } => {
            ApiEvent::WorkspaceCreated(client.create_workspace(&name))
        }
        ApiRequest::DeleteWorkspace { workspace_id } => ApiEvent::WorkspaceDeleted(
            client.delete_workspace(workspace_id).map(|_| workspace_id),
        ),
        ApiRequest::LoadProjects { workspace_id } => {
            ApiEvent::ProjectsLoaded(client.projects(workspace_id))
        }
        ApiRequest::CreateProject {
            workspace_id,
            name,
            project_type,
        } => ApiEvent::ProjectCreated(client.create_project(workspace_id, &name, project_type)),
        ApiRequest::DeleteProject {
            workspace_id,
            project_id,
        } => ApiEvent::ProjectDeleted(
            client
                .delete_project(workspace_id, project_id)
                .map(|_| project_id),
        ),
        ApiRequest::LoadDatasets { workspace_id } => {
            ApiEvent::DatasetsLoaded(client.datasets(workspace_id))
        }
        ApiRequest::CreateDataset { workspace_id, name } => {
            ApiEvent::DatasetCreated(client.create_dataset(workspace_id, &name))
        }
        ApiRequest::DeleteDataset {
            workspace_id,
            dataset_id,
        } => ApiEvent::DatasetDeleted(
            client
                .delete_dataset(workspace_id, dataset_id)
                .map(|_| dataset_id),
        ),
        ApiRequest::LoadImages {
            workspace_id,
            dataset_id,
            page,
            limit,
        } => ApiEvent::ImagesLoaded {
            dataset_id,
            page,
            result: client.list_images(workspace_id, dataset_id, page, limit),
        },
        ApiRequest::LoadImageData {
            image_id,
            relative_path,
        } => ApiEvent::ImageDataLoaded {
            image_id,
            result: client.fetch_image_bytes(&relative_path),
        },
        ApiRequest::LoadCategories {
            workspace_id,
            project_id,
        } => ApiEvent::CategoriesLoaded(client.categories(workspace_id, project_id)),
        ApiRequest::LoadAnnotations {
            workspace_id,
            project_id,
            image_id,
        } => ApiEvent::AnnotationsLoaded {
            image_id,
            result: client.annotations(workspace_id, project_id, image_id),
        },
        ApiRequest::SaveAnnotations {
            workspace_id,
            project_id,
            image_id,
            annotations,
        } => ApiEvent::AnnotationsSaved {
            image_id,
            result: client.save_annotations(workspace_id, project_id, image_id, &annotations),
        },
        ApiRequest::LoadJobs {
            workspace_id,
            project_id,
        } => ApiEvent::JobsLoaded(client.jobs(workspace_id, project_id)),
        ApiRequest::CreateJob {
            workspace_id,
            project_id,
            name,
            dataset_id,
        } => ApiEvent::JobCreated(client.create_job(workspace_id, project_id, &name, dataset_id)),
        ApiRequest::LoadNotifications => ApiEvent::NotificationsLoaded(client.notifications()),
        ApiRequest::MarkNotificationRead { notification_id } => ApiEvent::NotificationMarkedRead(
            client
                .mark_notification_read(notification_id)
                .map(|_| notification_id),
        ),
        ApiRequest::LoadQuota { workspace_id } => ApiEvent::QuotaLoaded(client.quota(workspace_id)),
    }
}
