use super::{dispatch, path};
use crate::controller::{BoxedHandler, Controller, Routes};
use crate::error::{Result, TrellisError};
use axum::{Router, routing::any};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
struct RouteBinding {
    controller: String,
    handler: BoxedHandler,
}

/// Application-owned map from full path to bound handler
///
/// # Example
///
/// ```rust,ignore
/// let mut table = RouteTable::new();
/// table.mount(Arc::new(Home::new()))?;
/// let router = table.into_router();
/// ```
#[derive(Clone, Default)]
pub struct RouteTable {
    bindings: BTreeMap<String, RouteBinding>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every route the controller declares and mark it loaded
    ///
    /// Either all of the controller's routes are inserted or none are.
    /// Mounting a path the same controller already owns replaces the
    /// binding in place.
    ///
    /// # Errors
    ///
    /// Returns [`TrellisError::RouteConflict`] when a full path is owned by
    /// another controller and [`TrellisError::InvalidRoute`] for malformed paths.
    pub fn mount(&mut self, controller: Arc<dyn Controller>) -> Result<()> {
        let name = controller.name().to_string();
        if name.is_empty() {
            return Err(TrellisError::RegistrationFailed {
                message: "controller name must not be empty".to_string(),
            });
        }

        let mut routes = Routes::new();
        Arc::clone(&controller).routes(&mut routes);
        if routes.is_empty() {
            tracing::warn!("Controller {} declares no routes", name);
        }

        let mut pending = Vec::with_capacity(routes.len());
        for (relative, handler) in routes.into_bindings() {
            let full = path::join(controller.route_prefix(), &relative)?;
            if let Some(existing) = self.bindings.get(&full) {
                if existing.controller != name {
                    tracing::error!(
                        "Route {} already bound to {}, rejecting {}",
                        full,
                        existing.controller,
                        name
                    );
                    return Err(TrellisError::RouteConflict {
                        path: full,
                        existing: existing.controller.clone(),
                        incoming: name,
                    });
                }
            }
            if pending.iter().any(|(path, _)| path == &full) {
                return Err(TrellisError::RouteConflict {
                    path: full,
                    existing: name.clone(),
                    incoming: name,
                });
            }
            pending.push((full, handler));
        }
        self.check_overlaps(&name, &pending)?;

        for (full, handler) in pending {
            tracing::debug!("Binding {} -> {}", full, name);
            self.bindings.insert(
                full,
                RouteBinding {
                    controller: name.clone(),
                    handler,
                },
            );
        }

        controller.state().mark_loaded();
        tracing::info!("Loaded controller {} at {:?}", name, controller.route_prefix());
        Ok(())
    }

    // Textually different patterns can still collide in the matcher,
    // e.g. `/users/{id}` and `/users/{name}`.
    fn check_overlaps(&self, name: &str, pending: &[(String, BoxedHandler)]) -> Result<()> {
        let replaced = |path: &str| pending.iter().any(|(full, _)| full == path);

        let mut matcher = matchit::Router::new();
        for path in self.bindings.keys().filter(|path| !replaced(path.as_str())) {
            // Every bound path went through this check when it was mounted.
            let _ = matcher.insert(path.as_str(), ());
        }

        for (full, _) in pending {
            match matcher.insert(full.as_str(), ()) {
                Ok(()) => {}
                Err(matchit::InsertError::Conflict { with }) => {
                    let existing = self.owner(&with).unwrap_or(name).to_string();
                    tracing::error!("Route {} overlaps {} ({}), rejecting {}", full, with, existing, name);
                    return Err(TrellisError::RouteConflict {
                        path: full.clone(),
                        existing,
                        incoming: name.to_string(),
                    });
                }
                Err(e) => {
                    tracing::error!("Route {} rejected by the matcher: {}", full, e);
                    return Err(TrellisError::InvalidRoute { path: full.clone() });
                }
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.bindings.contains_key(path)
    }

    /// Name of the controller owning `path`, if any
    pub fn owner(&self, path: &str) -> Option<&str> {
        self.bindings.get(path).map(|binding| binding.controller.as_str())
    }

    /// Full paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Build the dispatcher: one method-agnostic route per binding plus a 404 fallback
    pub fn into_router(self) -> Router {
        let mut router = Router::new();
        for (path, binding) in self.bindings {
            let handler = binding.handler;
            router = router.route(
                &path,
                any(move |request: axum::extract::Request| {
                    dispatch::dispatch(Arc::clone(&handler), request)
                }),
            );
        }
        router.fallback(dispatch::not_found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Reply;
    use crate::controller::{ControllerState, PathParams, Request};

    struct Fixed {
        name: &'static str,
        prefix: &'static str,
        paths: Vec<&'static str>,
        state: ControllerState,
    }

    impl Fixed {
        fn new(name: &'static str, prefix: &'static str, paths: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                name,
                prefix,
                paths,
                state: ControllerState::new(),
            })
        }

        async fn handle(self: Arc<Self>, _request: Request, _params: PathParams) -> Reply {
            Reply::ok(self.name)
        }
    }

    impl Controller for Fixed {
        fn name(&self) -> &str {
            self.name
        }

        fn route_prefix(&self) -> &str {
            self.prefix
        }

        fn state(&self) -> &ControllerState {
            &self.state
        }

        fn routes(self: Arc<Self>, routes: &mut Routes) {
            for path in &self.paths {
                routes.bind(*path, &self, Self::handle);
            }
        }
    }

    #[test]
    fn test_mount_composes_full_paths_and_marks_loaded() {
        let home = Fixed::new("Home", "/home", vec!["/", "/about"]);
        let mut table = RouteTable::new();

        assert!(!home.is_loaded());
        table.mount(home.clone()).unwrap();
        assert!(home.is_loaded());

        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["/home/", "/home/about"]);
        assert_eq!(table.owner("/home/"), Some("Home"));
    }

    #[test]
    fn test_remount_same_controller_is_idempotent() {
        let home = Fixed::new("Home", "/home", vec!["/"]);
        let mut table = RouteTable::new();

        table.mount(home.clone()).unwrap();
        table.mount(home).unwrap();

        assert_eq!(table.len(), 1);
        assert!(table.contains("/home/"));
    }

    #[test]
    fn test_conflicting_controller_is_rejected_whole() {
        let home = Fixed::new("Home", "", vec!["/"]);
        let other = Fixed::new("Other", "/", vec!["/extra", "/"]);
        let mut table = RouteTable::new();

        table.mount(home).unwrap();
        let err = table.mount(other.clone()).unwrap_err();

        assert!(matches!(
            err,
            TrellisError::RouteConflict { ref path, ref existing, ref incoming }
                if path == "/" && existing == "Home" && incoming == "Other"
        ));
        assert!(!table.contains("/extra"));
        assert!(!other.is_loaded());
    }

    #[test]
    fn test_duplicate_path_within_one_controller() {
        let twice = Fixed::new("Twice", "/t", vec!["/", "/"]);
        let mut table = RouteTable::new();

        let err = table.mount(twice).unwrap_err();
        assert!(matches!(err, TrellisError::RouteConflict { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_overlapping_captures_conflict() {
        let by_id = Fixed::new("ById", "/users", vec!["/{id}"]);
        let by_name = Fixed::new("ByName", "/users", vec!["/{name}", "/extra"]);
        let mut table = RouteTable::new();

        table.mount(by_id).unwrap();
        let err = table.mount(by_name.clone()).unwrap_err();

        assert!(matches!(
            err,
            TrellisError::RouteConflict { ref path, ref existing, ref incoming }
                if path == "/users/{name}" && existing == "ById" && incoming == "ByName"
        ));
        assert!(!table.contains("/users/extra"));
        assert!(!by_name.is_loaded());
    }

    #[test]
    fn test_overlap_within_one_controller() {
        let both = Fixed::new("Both", "/users", vec!["/{id}", "/{name}"]);
        let mut table = RouteTable::new();

        let err = table.mount(both).unwrap_err();
        assert!(matches!(err, TrellisError::RouteConflict { .. }));
        assert!(table.is_empty());
    }

    #[test]
    fn test_static_segment_beside_capture_is_accepted() {
        let show = Fixed::new("Show", "/users", vec!["/{id}"]);
        let create = Fixed::new("Create", "/users", vec!["/new"]);
        let mut table = RouteTable::new();

        table.mount(show).unwrap();
        table.mount(create).unwrap();
        assert_eq!(table.len(), 2);
        let _ = table.into_router();
    }

    #[test]
    fn test_unroutable_prefix_is_rejected() {
        for prefix in [":home", "/ho{me", "*all"] {
            let home = Fixed::new("Home", prefix, vec!["/"]);
            let mut table = RouteTable::new();

            let err = table.mount(home.clone()).unwrap_err();
            assert!(matches!(err, TrellisError::InvalidRoute { .. }), "{prefix}");
            assert!(!home.is_loaded());
        }
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let nameless = Fixed::new("", "/x", vec!["/"]);
        let mut table = RouteTable::new();

        let err = table.mount(nameless).unwrap_err();
        assert!(matches!(err, TrellisError::RegistrationFailed { .. }));
    }
}
