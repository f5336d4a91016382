//! Client-side state: the annotation store, image navigation, and the
//! transient toast channel.

mod navigator;
mod notifications;
mod store;

pub use navigator::ImageNavigator;
pub use notifications::{Toast, ToastCenter, ToastLevel, MAX_TOASTS, TOAST_LIFETIME};
pub use store::{AnnotationStore, BoxEntry, PolygonEntry};
