mod settings;
mod sse;
mod validate;
mod version;

pub(super) use settings::{get_settings, update_settings};
pub(super) use sse::sse_events;
pub(super) use validate::validate_brick;
pub(super) use version::get_version;
