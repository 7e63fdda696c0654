mod common;

use common::{demo, demo_shell, signed_in_shell};
use rawda::{NavState, Screen};
use rawda_core::NavigationError;
use rawda_i18n::{Direction, Edge, Language};
use rawda_models::{FALLBACK_AVATAR, Icon, Role, View};

fn dashboard(screen: Screen) -> rawda::DashboardScreen {
    match screen {
        Screen::Dashboard(dashboard) => dashboard,
        Screen::Login(_) => panic!("expected dashboard screen"),
    }
}

#[test]
fn test_parent_flow() {
    let shell = signed_in_shell(demo::PARENT);
    let screen = dashboard(shell.render());

    assert_eq!(screen.active_view, View::ParentView);
    let ids: Vec<View> = screen.sidebar.entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![View::ParentView]);
    assert_eq!(screen.sidebar.entries[0].label, "My Child");
    assert_eq!(screen.sidebar.entries[0].icon, Icon::Home);
    assert_eq!(screen.sidebar.profile.role_label, "Parent");
    assert_eq!(screen.sidebar.profile.avatar, FALLBACK_AVATAR);
}

#[test]
fn test_teacher_cannot_open_admin_views() {
    let mut shell = signed_in_shell(demo::TEACHER);
    shell.select_view(View::Students).unwrap();
    let before = shell.navigation().state();

    for view in [View::Classes, View::Users, View::ParentView] {
        assert!(matches!(
            shell.select_view(view),
            Err(NavigationError::ViewNotPermitted { .. })
        ));
        assert_eq!(shell.navigation().state(), before);
    }
}

#[test]
fn test_view_selection_closes_mobile_menu() {
    let mut shell = signed_in_shell(demo::ADMIN);
    shell.toggle_mobile_menu(true).unwrap();
    assert!(dashboard(shell.render()).sidebar.mobile_open);

    shell.select_view(View::Classes).unwrap();
    let screen = dashboard(shell.render());
    assert!(!screen.sidebar.mobile_open);
    assert_eq!(screen.active_view, View::Classes);
    let active: Vec<View> = screen
        .sidebar
        .entries
        .iter()
        .filter(|e| e.active)
        .map(|e| e.id)
        .collect();
    assert_eq!(active, vec![View::Classes]);
}

#[test]
fn test_profile_view_marks_footer_active() {
    let mut shell = signed_in_shell(demo::TEACHER);
    shell.open_profile().unwrap();
    let screen = dashboard(shell.render());
    assert_eq!(screen.active_view, View::Profile);
    assert!(screen.sidebar.profile.active);
    assert!(screen.sidebar.entries.iter().all(|e| !e.active));
}

#[test]
fn test_logout_then_login_resets_navigation() {
    let mut first = signed_in_shell(demo::ADMIN);
    let initial = first.navigation().state();

    first.select_view(View::Users).unwrap();
    first.toggle_mobile_menu(true).unwrap();
    first.logout();
    assert_eq!(first.navigation().state(), NavState::Unauthenticated);
    assert!(first.session().is_none());

    first.submit_login(demo::ADMIN.0, demo::ADMIN.1).unwrap();
    assert_eq!(first.navigation().state(), initial);
}

#[test]
fn test_switching_users_recomputes_menu() {
    let mut shell = signed_in_shell(demo::ADMIN);
    assert_eq!(shell.menu().len(), 6);
    shell.logout();
    shell.submit_login(demo::PARENT.0, demo::PARENT.1).unwrap();
    assert_eq!(shell.menu().len(), 1);
    assert_eq!(shell.session().map(|s| s.role()), Some(Role::Parent));
}

#[test]
fn test_arabic_dashboard_is_right_to_left() {
    let mut shell = signed_in_shell(demo::ADMIN);
    shell.toggle_language();
    let screen = dashboard(shell.render());

    assert_eq!(screen.language, Language::Ar);
    assert_eq!(screen.direction, Direction::Rtl);
    assert_eq!(screen.sidebar.anchor, Edge::Right);
    assert_eq!(screen.sidebar.entries[0].label, "لوحة التحكم");
    assert_eq!(screen.sidebar.profile.role_label, "مدير");
    assert_eq!(screen.sidebar.language_switch, "English");

    shell.toggle_language();
    let screen = dashboard(shell.render());
    assert_eq!(screen.direction, Direction::Ltr);
    assert_eq!(screen.sidebar.anchor, Edge::Left);
    assert_eq!(screen.sidebar.entries[0].label, "Dashboard");
}

#[test]
fn test_language_survives_session_changes() {
    let mut shell = demo_shell(Language::Ar);
    shell.submit_login(demo::TEACHER.0, demo::TEACHER.1).unwrap();
    shell.logout();
    assert_eq!(shell.render().direction(), Direction::Rtl);
}

#[test]
fn test_rendered_screen_never_contains_password() {
    let shell = signed_in_shell(demo::ADMIN);
    let json = serde_json::to_string(&shell.render()).unwrap();
    assert!(json.contains(r#""screen":"dashboard""#));
    assert!(!json.contains(demo::ADMIN.1));
}

#[test]
fn test_login_screen_fields() {
    let shell = demo_shell(Language::En);
    let json = serde_json::to_value(shell.render()).unwrap();
    let mut fields: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    fields.sort_unstable();
    assert_eq!(
        fields,
        [
            "app_title",
            "direction",
            "error",
            "language",
            "language_switch",
            "login_title",
            "password_label",
            "screen",
            "submit_label",
            "username_label",
        ]
    );
}
