use serde::Serialize;

use crate::config::SiteConfig;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeView {
    pub intro: String,
    pub headline: String,
    pub links: Vec<Route>,
}

impl HomeView {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            intro: "Let us present to you . . . ".to_string(),
            headline: site.headline.clone(),
            links: vec![Route::Greetings, Route::Album],
        }
    }
}
