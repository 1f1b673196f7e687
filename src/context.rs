//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::browser;
use crate::error::ApiError;
use crate::models::User;
use crate::routes::Route;
use crate::session::browser_session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page currently shown - read
    pub route: ReadSignal<Route>,
    /// Page currently shown - write
    set_route: WriteSignal<Route>,
    /// Logged-in user mirrored from storage - read
    pub user: ReadSignal<Option<User>>,
    /// Logged-in user mirrored from storage - write
    set_user: WriteSignal<Option<User>>,
}

impl AppContext {
    pub fn new(
        route: (ReadSignal<Route>, WriteSignal<Route>),
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
    ) -> Self {
        Self {
            route: route.0,
            set_route: route.1,
            user: user.0,
            set_user: user.1,
        }
    }

    /// Show another page and record it in browser history
    pub fn navigate(&self, route: Route) {
        log::info!("Navigating to {}", route.path());
        browser::push_path(&route.path());
        self.set_route.set(route);
    }

    /// Follow the address bar after back/forward
    pub fn sync_with_location(&self) {
        self.set_route.set(Route::from_path(&browser::current_path()));
    }

    /// Re-read the cached user after login/register
    pub fn refresh_user(&self) {
        self.set_user.set(browser_session().current_user());
    }

    /// Landing page for the given account
    pub fn dashboard_for(user: &User) -> Route {
        if user.is_vereador() {
            Route::VereadorDashboard
        } else {
            Route::Dashboard
        }
    }

    pub fn logout(&self) {
        browser_session().logout();
        self.set_user.set(None);
        self.navigate(Route::Entrar);
    }

    /// Drop a session the backend rejected and send the user to login
    pub fn end_session(&self) {
        browser_session().clear();
        self.set_user.set(None);
        self.navigate(Route::Entrar);
    }

    /// Message to show for a failed call; session errors also end the session
    pub fn handle_error(&self, err: &ApiError) -> String {
        if let Some(status) = err.status() {
            log::warn!("Backend answered HTTP {}: {}", status, err);
        }
        if err.is_session_error() {
            self.end_session();
        }
        err.to_string()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
