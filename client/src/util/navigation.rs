//! Route targets and full-page redirects.
//!
//! Redirects are plain `location.href` assignments so the next page starts
//! from a fresh load and re-reads persisted state.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// A navigation the page should perform, optionally after a grace period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub route: Route,
    pub delay_ms: u32,
}

impl Redirect {
    pub fn now(route: Route) -> Self {
        Self { route, delay_ms: 0 }
    }

    pub fn after(route: Route, delay_ms: u32) -> Self {
        Self { route, delay_ms }
    }
}

/// Navigate the browser to `redirect.route` once its delay elapses.
/// Does not block the caller. No-op outside the browser.
pub fn perform(redirect: Redirect) {
    #[cfg(feature = "hydrate")]
    {
        let go = move || {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(redirect.route.path());
            }
        };
        if redirect.delay_ms == 0 {
            go();
        } else {
            gloo_timers::callback::Timeout::new(redirect.delay_ms, go).forget();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = redirect;
    }
}
