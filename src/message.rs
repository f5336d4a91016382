//! Application message types.
//!
//! All UI actions are represented as messages in the Elm architecture
//! style: views collect them while building widgets, and `handlers`
//! applies them after the frame's widgets are laid out. Widget-local state
//! (text buffers, combo selections) lives in [`crate::app::Forms`] and is
//! mutated directly; messages carry only submitted intent.

use crate::config::LogLevel;
use crate::model::{AnnotationTool, CategoryId, EntityId, Point, ProjectType};

/// The routed views of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Login,
    Workspaces,
    Projects,
    Datasets,
    Images,
    Annotate,
    Jobs,
    Notifications,
    Settings,
}

impl Route {
    /// Title shown in the top bar.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Sign In",
            Route::Workspaces => "Workspaces",
            Route::Projects => "Projects",
            Route::Datasets => "Datasets",
            Route::Images => "Images",
            Route::Annotate => "Annotate",
            Route::Jobs => "Training Jobs",
            Route::Notifications => "Notifications",
            Route::Settings => "Settings",
        }
    }
}

/// Messages that can be sent to update application state.
#[derive(Debug, Clone)]
pub enum Message {
    Nav(NavMessage),
    Session(SessionMessage),
    Workspace(WorkspaceMessage),
    Project(ProjectMessage),
    Dataset(DatasetMessage),
    Image(ImageMessage),
    Editor(EditorMessage),
    Job(JobMessage),
    Notice(NoticeMessage),
    Settings(SettingsMessage),
    /// Dismiss the toast at this position.
    DismissToast(usize),
}

#[derive(Debug, Clone)]
pub enum NavMessage {
    /// Switch the central panel to another view.
    Go(Route),
}

#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Credentials submitted from the login form.
    LoginSubmitted { email: String, password: String },
    SignOut,
}

#[derive(Debug, Clone)]
pub enum WorkspaceMessage {
    Refresh,
    Create { name: String },
    Delete { workspace_id: EntityId },
    /// Make this the active workspace and load its contents.
    Open { workspace_id: EntityId },
}

#[derive(Debug, Clone)]
pub enum ProjectMessage {
    Refresh,
    Create {
        name: String,
        project_type: ProjectType,
    },
    Delete {
        project_id: EntityId,
    },
    /// Select this project for annotation and training.
    Open {
        project_id: EntityId,
    },
}

#[derive(Debug, Clone)]
pub enum DatasetMessage {
    Refresh,
    Create { name: String },
    Delete { dataset_id: EntityId },
    /// Browse this dataset's images.
    Open { dataset_id: EntityId },
}

#[derive(Debug, Clone)]
pub enum ImageMessage {
    /// Fetch one page of the selected dataset's image list.
    LoadPage { page: u32 },
    /// Open the editor on the image at this index of the current page.
    Open { index: usize },
}

/// Editor actions. Pointer positions arrive already inverse-scaled into
/// image pixels by the annotate view.
#[derive(Debug, Clone)]
pub enum EditorMessage {
    ToolSelected(AnnotationTool),
    CategorySelected(CategoryId),
    PointerDown(Point),
    PointerMoved(Point),
    PointerUp,
    /// Explicit polygon finish; there is no implicit finish.
    FinishPolygon,
    ZoomIn,
    ZoomOut,
    ResetZoom,
    NextImage,
    PrevImage,
    Save,
    /// Open the clear-all confirmation dialog.
    RequestClearAll,
    ConfirmClearAll,
    CancelClearAll,
}

#[derive(Debug, Clone)]
pub enum JobMessage {
    Refresh,
    Create {
        name: String,
        dataset_id: EntityId,
    },
}

#[derive(Debug, Clone)]
pub enum NoticeMessage {
    Refresh,
    MarkRead { notification_id: EntityId },
}

#[derive(Debug, Clone)]
pub enum SettingsMessage {
    SetDarkTheme(bool),
    SetLogLevel(LogLevel),
    /// Persist the endpoint/preference edits from the settings form.
    Apply,
    ExportConfig,
    ImportConfig,
}
