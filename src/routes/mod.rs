use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Home,
    Greetings,
    Album,
}

pub const ROUTES: [Route; 3] = [Route::Home, Route::Greetings, Route::Album];

impl Route {
    /// `None` for paths outside the table. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Route::Home),
            "/greetings" => Some(Route::Greetings),
            "/album" => Some(Route::Album),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Greetings => "/greetings",
            Route::Album => "/album",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Greetings => "Greetings",
            Route::Album => "Album",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

pub fn nav_links(current: Route) -> Vec<NavLink> {
    ROUTES
        .iter()
        .map(|route| NavLink {
            label: route.label(),
            path: route.path(),
            active: *route == current,
        })
        .collect()
}
