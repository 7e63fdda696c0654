//! Shell counters.

use metrics::counter;

pub fn track_login_success(role: &str) {
    counter!("shell_logins_total", "role" => role.to_string(), "status" => "success").increment(1);
}

pub fn track_login_failure(reason: &str) {
    counter!("shell_logins_total", "role" => "unknown", "status" => "failure", "reason" => reason.to_string())
        .increment(1);
}

pub fn track_logout(role: &str) {
    counter!("shell_logouts_total", "role" => role.to_string()).increment(1);
}

pub fn track_view_selected(view: &str) {
    counter!("shell_view_selections_total", "view" => view.to_string()).increment(1);
}

pub fn track_language_toggled(language: &str) {
    counter!("shell_language_toggles_total", "language" => language.to_string()).increment(1);
}
