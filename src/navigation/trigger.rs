use super::route::Route;
use crate::gateway::Gateway;
use crate::store::Store;

/// Tracks the active route and clears the store's current ticket on
/// every transition, so a detail view never shows a previous ticket
/// while its own fetch is in flight.
pub struct Navigator<G> {
    store: Store<G>,
    location: Option<Route>,
    transitions: u64,
}

impl<G: Gateway> Navigator<G> {
    pub fn new(store: Store<G>) -> Self {
        Self {
            store,
            location: None,
            transitions: 0,
        }
    }

    /// Initial mount at `path`. Counts as a transition.
    pub fn mount(&mut self, path: &str) -> Route {
        self.navigate(path)
    }

    /// Resolve `path`, apply the auth guard and move there.
    pub fn navigate(&mut self, path: &str) -> Route {
        let requested = Route::parse(path);
        let is_authenticated = self.store.snapshot().is_authenticated;
        let route = requested.guarded(is_authenticated);
        if route != requested {
            tracing::debug!(from = %requested.path(), to = %route.path(), "Route redirected");
        }
        self.enter(route);
        route
    }

    fn enter(&mut self, route: Route) {
        self.location = Some(route);
        self.transitions += 1;
        self.store.clear_current_ticket();
    }

    pub fn location(&self) -> Option<Route> {
        self.location
    }

    /// Number of route transitions observed, including the mount.
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    pub fn store(&self) -> &Store<G> {
        &self.store
    }
}
