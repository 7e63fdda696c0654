//! The shell controller.
//!
//! [`Shell`] owns every piece of interactive state: the locale, the session,
//! navigation, the pending login error and the install offer. The view layer
//! gets a [`Screen`] from [`Shell::render`] and reports user actions back
//! through the transition methods. All transitions run synchronously.

use rawda_auth::{LoginRequest, Session, authenticate};
use rawda_config::{ConfigError, ShellConfig};
use rawda_core::{AuthError, NavigationError};
use rawda_i18n::LocaleService;
use rawda_models::{Directory, MenuItem, View, role_label_key};
use rawda_observability as observability;
use tracing::{info, warn};

use crate::navigation::Navigation;
use crate::view::{DashboardScreen, LoginScreen, MenuEntry, ProfileCard, Screen, Sidebar};

/// The platform's "install this app" prompt.
pub trait InstallPrompt {
    fn prompt(&mut self);
}

impl<F: FnMut()> InstallPrompt for F {
    fn prompt(&mut self) {
        (*self)()
    }
}

#[derive(Debug)]
pub struct Shell {
    locale: LocaleService,
    directory: Directory,
    session: Option<Session>,
    navigation: Navigation,
    login_error: Option<AuthError>,
    install_available: bool,
}

impl Shell {
    pub fn new(directory: Directory, locale: LocaleService) -> Self {
        Self::with_navigation(directory, locale, Navigation::new())
    }

    pub fn with_navigation(
        directory: Directory,
        locale: LocaleService,
        navigation: Navigation,
    ) -> Self {
        Self {
            locale,
            directory,
            session: None,
            navigation,
            login_error: None,
            install_available: false,
        }
    }

    /// Builds a shell from configuration, loading the directory and catalog it names.
    pub fn from_config(config: &ShellConfig) -> Result<Self, ConfigError> {
        let directory = config.load_directory()?;
        let catalog = config.load_catalog()?;
        let locale = LocaleService::with_table(config.default_language, catalog);
        let mut shell = Self::new(directory, locale);
        shell.set_install_available(config.show_install_button);
        Ok(shell)
    }

    pub fn locale(&self) -> &LocaleService {
        &self.locale
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn login_error(&self) -> Option<AuthError> {
        self.login_error
    }

    /// The signed-in role's menu; empty while signed out.
    pub fn menu(&self) -> Vec<&'static MenuItem> {
        self.navigation.menu()
    }

    /// Submits the login form.
    ///
    /// On success the session is installed, navigation opens on the role's
    /// default view and any earlier error is cleared. On failure only the
    /// login error changes.
    pub fn submit_login(&mut self, username: &str, password: &str) -> Result<View, AuthError> {
        let request = LoginRequest::new(username, password);
        match authenticate(&self.directory, &request) {
            Ok(user) => {
                if let Some(previous) = self.session.take() {
                    warn!(user_id = %previous.user().id, "Replacing active session");
                }
                let view = self.navigation.login(&user);
                observability::track_login_success(user.role.as_str());
                self.session = Some(Session::start(user));
                self.login_error = None;
                Ok(view)
            }
            Err(e) => {
                observability::track_login_failure(e.reason());
                self.login_error = Some(e);
                Err(e)
            }
        }
    }

    /// Ends the session and resets navigation. Does nothing when signed out.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(
                user_id = %session.user().id,
                role = %session.role(),
                started_at = %session.started_at(),
                "Logged out"
            );
            observability::track_logout(session.role().as_str());
        }
        self.navigation.logout();
    }

    pub fn select_view(&mut self, view: View) -> Result<(), NavigationError> {
        self.navigation.select_view(view)?;
        observability::track_view_selected(view.as_str());
        Ok(())
    }

    pub fn open_profile(&mut self) -> Result<(), NavigationError> {
        self.navigation.open_profile()?;
        observability::track_view_selected(View::Profile.as_str());
        Ok(())
    }

    pub fn toggle_mobile_menu(&mut self, open: bool) -> Result<(), NavigationError> {
        self.navigation.toggle_mobile_menu(open)
    }

    pub fn toggle_language(&mut self) {
        let language = self.locale.toggle_language();
        observability::track_language_toggled(language.as_str());
    }

    pub fn set_install_available(&mut self, available: bool) {
        self.install_available = available;
    }

    pub fn install_available(&self) -> bool {
        self.install_available
    }

    /// Fires the install prompt if installing is currently offered.
    pub fn request_install(&mut self, prompt: &mut dyn InstallPrompt) -> bool {
        if !self.install_available {
            return false;
        }
        info!("Install prompt requested");
        prompt.prompt();
        true
    }

    pub fn render(&self) -> Screen {
        match (&self.session, self.navigation.current_view()) {
            (Some(session), Some(view)) => Screen::Dashboard(self.render_dashboard(session, view)),
            _ => Screen::Login(self.render_login()),
        }
    }

    fn render_login(&self) -> LoginScreen {
        let t = |key: &str| self.locale.translate(key);
        LoginScreen {
            language: self.locale.language(),
            direction: self.locale.direction(),
            app_title: t("appTitle"),
            login_title: t("loginTitle"),
            username_label: t("username"),
            password_label: t("password"),
            submit_label: t("loginButton"),
            error: self.login_error.map(|e| t(e.message_key())),
            language_switch: self.locale.language_switch_label().to_string(),
        }
    }

    fn render_dashboard(&self, session: &Session, active_view: View) -> DashboardScreen {
        let t = |key: &str| self.locale.translate(key);
        let user = session.user();
        let direction = self.locale.direction();

        let entries = self
            .navigation
            .menu()
            .into_iter()
            .map(|item| MenuEntry {
                id: item.id,
                label: t(item.label_key),
                icon: item.icon,
                active: item.id == active_view,
            })
            .collect();

        DashboardScreen {
            language: self.locale.language(),
            direction,
            active_view,
            sidebar: Sidebar {
                anchor: direction.start_edge(),
                mobile_open: self.navigation.is_mobile_menu_open(),
                app_title: t("appTitle"),
                app_subtitle: t("appSubtitle"),
                entries,
                install: self.install_available.then(|| t("installApp")),
                language_switch: self.locale.language_switch_label().to_string(),
                profile: ProfileCard {
                    name: user.name.clone(),
                    avatar: user.avatar_or_fallback().to_string(),
                    role_label: t(role_label_key(Some(user.role))),
                    active: active_view == View::Profile,
                },
                logout_label: t("logout"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rawda_i18n::{Direction, Edge, Language};

    fn shell() -> Shell {
        Shell::new(Directory::demo(), LocaleService::new(Language::En))
    }

    #[test]
    fn test_starts_on_login_screen() {
        let shell = shell();
        assert!(shell.session().is_none());
        assert!(shell.menu().is_empty());
        let Screen::Login(login) = shell.render() else {
            panic!("expected login screen");
        };
        assert_eq!(login.error, None);
        assert_eq!(login.direction, Direction::Ltr);
        assert_eq!(login.submit_label, "Sign In");
    }

    #[test]
    fn test_failed_login_sets_localized_error_only() {
        let mut shell = shell();
        assert_eq!(
            shell.submit_login("admin1", "wrong"),
            Err(AuthError::InvalidCredentials)
        );
        assert!(shell.session().is_none());
        assert_eq!(shell.navigation().current_view(), None);

        let Screen::Login(login) = shell.render() else {
            panic!("expected login screen");
        };
        assert_eq!(login.error.as_deref(), Some("Invalid username or password"));
    }

    #[test]
    fn test_login_error_follows_language() {
        let mut shell = shell();
        let _ = shell.submit_login("nobody", "x");
        shell.toggle_language();
        let Screen::Login(login) = shell.render() else {
            panic!("expected login screen");
        };
        assert_eq!(
            login.error.as_deref(),
            Some("اسم المستخدم أو كلمة المرور غير صحيحة")
        );
        assert_eq!(login.language_switch, "English");
    }

    #[test]
    fn test_successful_login_clears_error_and_opens_dashboard() {
        let mut shell = shell();
        let _ = shell.submit_login("admin1", "nope");
        assert_eq!(shell.submit_login("admin1", "pass123"), Ok(View::Dashboard));
        assert_eq!(shell.login_error(), None);

        let Screen::Dashboard(dashboard) = shell.render() else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.active_view, View::Dashboard);
        assert_eq!(dashboard.sidebar.entries.len(), 6);
        assert!(dashboard.sidebar.entries[0].active);
        assert_eq!(dashboard.sidebar.profile.role_label, "Administrator");
        assert_eq!(dashboard.sidebar.anchor, Edge::Left);
    }

    #[test]
    fn test_logout_returns_to_login_and_keeps_language() {
        let mut shell = shell();
        shell.toggle_language();
        shell.submit_login("teacher1", "pass123").unwrap();
        shell.logout();
        assert!(shell.session().is_none());
        assert!(shell.menu().is_empty());
        assert_eq!(shell.locale().language(), Language::Ar);
        assert!(matches!(shell.render(), Screen::Login(_)));
    }

    #[test]
    fn test_logout_while_signed_out_is_harmless() {
        let mut shell = shell();
        shell.logout();
        assert!(matches!(shell.render(), Screen::Login(_)));
    }

    #[test]
    fn test_install_prompt_only_when_offered() {
        let mut shell = shell();
        let mut calls = 0;
        assert!(!shell.request_install(&mut || calls += 1));
        shell.set_install_available(true);
        assert!(shell.request_install(&mut || calls += 1));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_install_entry_rendered_only_when_offered() {
        let mut shell = shell();
        shell.submit_login("parent1", "pass123").unwrap();
        let Screen::Dashboard(dashboard) = shell.render() else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.sidebar.install, None);

        shell.set_install_available(true);
        let Screen::Dashboard(dashboard) = shell.render() else {
            panic!("expected dashboard");
        };
        assert_eq!(dashboard.sidebar.install.as_deref(), Some("Install App"));
    }

    #[test]
    fn test_from_config_defaults() {
        let config = ShellConfig {
            default_language: Language::Ar,
            show_install_button: true,
            ..ShellConfig::default()
        };
        let shell = Shell::from_config(&config).unwrap();
        assert_eq!(shell.locale().language(), Language::Ar);
        assert!(shell.install_available());
        assert_eq!(shell.render().direction(), Direction::Rtl);
    }
}
