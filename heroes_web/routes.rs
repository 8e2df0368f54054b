use std::fmt;

/// Screens of the heroes feature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    List,
    Create,
    Edit(String),
    View(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::List => "/heroes/list".to_string(),
            Route::Create => "/heroes/create".to_string(),
            Route::Edit(id) => format!("/heroes/edit/{id}"),
            Route::View(id) => format!("/heroes/view/{id}"),
        }
    }

    /// Maps a path to a route. Anything unknown, including an edit or view
    /// path without an id, lands on the list.
    pub fn resolve(path: &str) -> Route {
        let segments: Vec<&str> = path
            .trim()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["heroes", "create"] => Route::Create,
            ["heroes", "edit", id] => Route::Edit(id.to_string()),
            ["heroes", "view", id] => Route::View(id.to_string()),
            _ => Route::List,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_back() {
        for route in [
            Route::List,
            Route::Create,
            Route::Edit("7".to_string()),
            Route::View("abc".to_string()),
        ] {
            assert_eq!(Route::resolve(&route.path()), route);
        }
    }

    #[test]
    fn test_redirects_to_list() {
        for path in ["", "/", "/heroes", "/heroes/", "/villains", "/heroes/edit/", "/heroes/view", "/heroes/edit/1/extra"] {
            assert_eq!(Route::resolve(path), Route::List, "path {path:?}");
        }
    }
}
