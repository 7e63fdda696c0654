//! Navigation controller.
//!
//! Tracks which view is showing and whether the mobile menu is open. The
//! controller is either `Unauthenticated` or `Authenticated` for one role;
//! every transition that is not allowed in the current state returns a
//! [`NavigationError`] and leaves the state exactly as it was.

use rawda_core::NavigationError;
use rawda_models::{MASTER_MENU, MenuItem, Role, User, View, default_view_for, filter_menu};
use tracing::{debug, warn};

/// View opened when a role has nothing in the master menu.
pub const FALLBACK_VIEW: View = View::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Unauthenticated,
    Authenticated {
        role: Role,
        view: View,
        mobile_menu_open: bool,
    },
}

#[derive(Debug, Clone)]
pub struct Navigation {
    master: &'static [MenuItem],
    state: NavState,
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigation {
    /// A controller over [`MASTER_MENU`].
    pub fn new() -> Self {
        Self::with_master(MASTER_MENU)
    }

    /// A controller over a custom master menu.
    pub fn with_master(master: &'static [MenuItem]) -> Self {
        Self {
            master,
            state: NavState::Unauthenticated,
        }
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn current_view(&self) -> Option<View> {
        match self.state {
            NavState::Authenticated { view, .. } => Some(view),
            NavState::Unauthenticated => None,
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        matches!(
            self.state,
            NavState::Authenticated {
                mobile_menu_open: true,
                ..
            }
        )
    }

    /// Master items `role` may open, in master order. Recomputed on every call.
    pub fn permitted_menu(&self, role: Role) -> Vec<&'static MenuItem> {
        filter_menu(self.master, role)
    }

    /// The signed-in role's menu; empty while unauthenticated.
    pub fn menu(&self) -> Vec<&'static MenuItem> {
        match self.state {
            NavState::Authenticated { role, .. } => self.permitted_menu(role),
            NavState::Unauthenticated => Vec::new(),
        }
    }

    /// Starts navigation for `user` on the first view their role may open.
    ///
    /// Any previous view and menu state is discarded.
    pub fn login(&mut self, user: &User) -> View {
        let view = default_view_for(self.master, user.role).unwrap_or(FALLBACK_VIEW);
        self.state = NavState::Authenticated {
            role: user.role,
            view,
            mobile_menu_open: false,
        };
        debug!(role = %user.role, view = %view, "Navigation started");
        view
    }

    /// Switches to `view` and closes the mobile menu.
    pub fn select_view(&mut self, view: View) -> Result<(), NavigationError> {
        let NavState::Authenticated { role, .. } = self.state else {
            warn!(view = %view, "View selected while signed out");
            return Err(NavigationError::NotAuthenticated);
        };
        if !self.permitted_menu(role).iter().any(|item| item.id == view) {
            warn!(view = %view, role = %role, "View not permitted for role");
            return Err(NavigationError::ViewNotPermitted {
                view: view.to_string(),
                role: role.to_string(),
            });
        }
        self.state = NavState::Authenticated {
            role,
            view,
            mobile_menu_open: false,
        };
        debug!(view = %view, "View selected");
        Ok(())
    }

    /// Opens the signed-in user's profile. Every role may do this; the
    /// mobile menu is left as it is.
    pub fn open_profile(&mut self) -> Result<(), NavigationError> {
        match &mut self.state {
            NavState::Authenticated { view, .. } => {
                *view = View::Profile;
                debug!("Profile opened");
                Ok(())
            }
            NavState::Unauthenticated => {
                warn!("Profile opened while signed out");
                Err(NavigationError::NotAuthenticated)
            }
        }
    }

    pub fn toggle_mobile_menu(&mut self, open: bool) -> Result<(), NavigationError> {
        match &mut self.state {
            NavState::Authenticated {
                mobile_menu_open, ..
            } => {
                *mobile_menu_open = open;
                Ok(())
            }
            NavState::Unauthenticated => {
                warn!(open, "Mobile menu toggled while signed out");
                Err(NavigationError::NotAuthenticated)
            }
        }
    }

    /// Drops all navigation state.
    pub fn logout(&mut self) {
        self.state = NavState::Unauthenticated;
    }
}
