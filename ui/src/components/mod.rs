pub mod app;
pub mod create_modal;
pub mod post_form;
pub mod shared_state;
pub mod timeline;
