mod alert;
mod fields;
mod footer;
mod header;
mod popup;
pub(super) mod toolbar;

pub use alert::{alert_height, render_alert};
pub use fields::render_fields;
pub use footer::render_footer;
pub use header::render_header;
pub use popup::render_popup;
pub use toolbar::render_toolbar;
