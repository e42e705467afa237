//! Skycast widget controller
//!
//! UI-framework-agnostic: hosts implement [`RenderSink`] and call
//! [`WeatherWidget::refresh`] / [`WeatherWidget::toggle_unit`] from their
//! own event handlers.

pub mod view;
pub mod widget;

pub use view::{RenderSink, ViewModel, ViewState};
pub use widget::WeatherWidget;
