mod console_view;

pub use console_view::{
    render_help, render_notification, render_status, render_unknown_action, UserAction,
};
