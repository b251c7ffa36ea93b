mod form_window;
mod main_view;
mod notice;

pub(crate) use form_window::render_form_window;
pub(crate) use main_view::{render_table, render_toolbar};
pub(crate) use notice::render_notice_window;
