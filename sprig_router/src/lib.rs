//! Location resolution for sprig applications.
//!
//! [`Routes`] maps path patterns to page constructors. The same table is
//! shared by the server, which renders one page per request, and by the
//! browser [`ClientRouter`], which remounts the page on navigation.

#![allow(missing_docs)]

use matchit::Router;
use sprig::View;
use std::{collections::HashMap, fmt, sync::Arc};

pub mod navigation;

#[cfg(target_arch = "wasm32")]
mod client_router;

#[cfg(target_arch = "wasm32")]
pub use client_router::ClientRouter;

pub use navigation::{SubscriptionId, navigate, subscribe, unsubscribe};

/// Parameters captured from a matched path pattern such as `/users/{id}`.
pub type Params = HashMap<String, String>;

/// Builds a fresh page view for a matched location.
///
/// Constructors are `Send + Sync` so one table can be shared across server
/// tasks; the views they build never leave the thread that renders them.
pub type PageConstructor = Arc<dyn Fn(&Params) -> Box<dyn View> + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    #[error("failed to insert route '{path}': {source}")]
    Insert {
        path: String,
        #[source]
        source: matchit::InsertError,
    },
}

struct Page {
    pattern: String,
    constructor: PageConstructor,
}

/// Table from path patterns to page constructors, with an optional fallback
/// for locations that match nothing.
pub struct Routes {
    router: Router<Page>,
    patterns: Vec<String>,
    fallback: Option<PageConstructor>,
}

impl fmt::Debug for Routes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Routes")
            .field("patterns", &self.patterns)
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

impl Default for Routes {
    fn default() -> Self {
        Self::new()
    }
}

impl Routes {
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            patterns: Vec::new(),
            fallback: None,
        }
    }

    /// Register a page under `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Insert`] if `path` is malformed or conflicts
    /// with an already registered pattern.
    pub fn page<F>(mut self, path: &str, constructor: F) -> Result<Self, RouteError>
    where
        F: Fn(&Params) -> Box<dyn View> + Send + Sync + 'static,
    {
        let page = Page {
            pattern: path.to_owned(),
            constructor: Arc::new(constructor),
        };

        self.router
            .insert(path, page)
            .map_err(|source| RouteError::Insert {
                path: path.to_owned(),
                source,
            })?;
        self.patterns.push(path.to_owned());

        Ok(self)
    }

    /// Page shown when no pattern matches.
    pub fn fallback<F>(mut self, constructor: F) -> Self
    where
        F: Fn(&Params) -> Box<dyn View> + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(constructor));
        self
    }

    /// Registered patterns, in registration order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Match `location` against the registered patterns. The fallback is not
    /// considered.
    pub fn resolve(&self, location: &str) -> Option<Resolved<'_>> {
        let path = normalize_location(location);
        let matched = self.router.at(path).ok()?;

        let params = matched
            .params
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect();

        Some(Resolved {
            pattern: &matched.value.pattern,
            params,
            constructor: &matched.value.constructor,
        })
    }

    /// Build the view for `location`: the matched page, else the fallback.
    pub fn view_for(&self, location: &str) -> Option<Box<dyn View>> {
        match self.resolve(location) {
            Some(resolved) => Some(resolved.build()),
            None => {
                log::debug!("no page for {location}, using fallback");
                self.fallback
                    .as_ref()
                    .map(|constructor| constructor(&Params::new()))
            }
        }
    }
}

/// A location matched to a registered page.
pub struct Resolved<'a> {
    pub pattern: &'a str,
    pub params: Params,
    constructor: &'a PageConstructor,
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolved")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .finish()
    }
}

impl Resolved<'_> {
    /// Construct a fresh instance of the page.
    pub fn build(&self) -> Box<dyn View> {
        (self.constructor)(&self.params)
    }
}

/// Reduce a location to the path the table is matched against: query and
/// fragment dropped, trailing slashes dropped except for the root.
pub fn normalize_location(location: &str) -> &str {
    let end = location.find(['?', '#']).unwrap_or(location.len());
    let path = location[..end].trim_end_matches('/');

    if path.is_empty() { "/" } else { path }
}
