use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::{load_config, Config, SiteConfig};
use crate::constants::CONFIG_PATH;
use crate::error::AppResult;
use crate::gallery::Shuffler;
use crate::routes::{nav_links, NavLink, Route};
use crate::store::{AssetUrlBuilder, MediaStore, SanityClient};
use crate::views::{AlbumView, GreetingsView, HomeView, Outcome, Task};
use crate::VERSION;

/// The view mounted for the current route. Replaced wholesale on navigation.
#[derive(Debug)]
pub enum ActiveView {
    Home(HomeView),
    Greetings(GreetingsView),
    Album(AlbumView),
}

/// Generation of the mounted view a job was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

#[derive(Debug)]
pub struct Job {
    pub ticket: Ticket,
    pub task: Task,
}

impl Job {
    pub async fn run(self, store: &dyn MediaStore) -> Delivery {
        Delivery {
            ticket: self.ticket,
            outcome: self.task.run(store).await,
        }
    }
}

#[derive(Debug)]
pub struct Delivery {
    pub ticket: Ticket,
    pub outcome: Outcome,
}

pub struct App {
    store: Arc<dyn MediaStore>,
    site: SiteConfig,
    route: Route,
    view: ActiveView,
    generation: u64,
    shuffler: Shuffler,
}

/// Build the app against the hosted store described by `config`.
pub fn create_app(config: &Config) -> AppResult<App> {
    let client = SanityClient::new(config.store.clone())?;
    info!(
        "wedding-album {} using project {} dataset {}",
        VERSION, config.store.project_id, config.store.dataset
    );
    Ok(App::new(
        Arc::new(client),
        config.site.clone(),
        Shuffler::from_entropy(),
    ))
}

/// Load `WEDDING_CONFIG` (or `config.yaml`) plus the environment, then build.
pub fn create_app_from_env() -> AppResult<App> {
    let config = load_config(&CONFIG_PATH);
    create_app(&config)
}

impl App {
    pub fn new(store: Arc<dyn MediaStore>, site: SiteConfig, shuffler: Shuffler) -> Self {
        let view = ActiveView::Home(HomeView::new(&site));
        Self {
            store,
            site,
            route: Route::Home,
            view,
            generation: 0,
            shuffler,
        }
    }

    pub fn store(&self) -> Arc<dyn MediaStore> {
        Arc::clone(&self.store)
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn nav_links(&self) -> Vec<NavLink> {
        nav_links(self.route)
    }

    pub fn view(&self) -> &ActiveView {
        &self.view
    }

    pub fn home(&self) -> Option<&HomeView> {
        match &self.view {
            ActiveView::Home(home) => Some(home),
            _ => None,
        }
    }

    pub fn greetings(&self) -> Option<&GreetingsView> {
        match &self.view {
            ActiveView::Greetings(view) => Some(view),
            _ => None,
        }
    }

    pub fn greetings_mut(&mut self) -> Option<&mut GreetingsView> {
        match &mut self.view {
            ActiveView::Greetings(view) => Some(view),
            _ => None,
        }
    }

    pub fn album(&self) -> Option<&AlbumView> {
        match &self.view {
            ActiveView::Album(album) => Some(album),
            _ => None,
        }
    }

    pub fn album_mut(&mut self) -> Option<&mut AlbumView> {
        match &mut self.view {
            ActiveView::Album(album) => Some(album),
            _ => None,
        }
    }

    /// Switch to the view at `path`, returning its initial load job.
    ///
    /// Unknown paths and the current route leave everything as is.
    pub fn navigate(&mut self, path: &str) -> Option<Job> {
        let route = match Route::from_path(path) {
            Some(route) => route,
            None => {
                debug!("No route for {}", path);
                return None;
            }
        };
        if route == self.route {
            return None;
        }

        self.generation += 1;
        self.route = route;
        info!("Navigated to {}", route.path());

        let urls = self.urls();
        let (view, task) = match route {
            Route::Home => (ActiveView::Home(HomeView::new(&self.site)), None),
            Route::Greetings => {
                let mut view = GreetingsView::new(urls);
                let task = view.load();
                (ActiveView::Greetings(view), Some(task))
            }
            Route::Album => {
                let mut album = AlbumView::new(urls);
                let task = album.load();
                (ActiveView::Album(album), Some(task))
            }
        };
        self.view = view;
        task.map(|task| self.job(task))
    }

    pub fn submit_photo(&mut self) -> Option<Job> {
        let task = self.album_mut()?.submit_photo()?;
        Some(self.job(task))
    }

    pub fn submit_video(&mut self) -> Option<Job> {
        let task = self.album_mut()?.submit_video()?;
        Some(self.job(task))
    }

    pub fn submit_greeting(&mut self) -> Option<Job> {
        let task = self.greetings_mut()?.submit()?;
        Some(self.job(task))
    }

    /// Apply a finished job. Returns `false` when it was issued for a view
    /// that has since been replaced, in which case nothing changes.
    pub fn deliver(&mut self, delivery: Delivery) -> bool {
        if delivery.ticket.generation != self.generation {
            debug!(
                "Discarding result for generation {} (now {})",
                delivery.ticket.generation, self.generation
            );
            return false;
        }

        match &mut self.view {
            ActiveView::Album(album) => album.apply(delivery.outcome, &mut self.shuffler),
            ActiveView::Greetings(view) => view.apply(delivery.outcome),
            ActiveView::Home(_) => {
                warn!("Home has no use for {:?}", delivery.outcome);
                return false;
            }
        }
        true
    }

    /// Run `job` against the store and deliver its result.
    pub async fn run(&mut self, job: Job) -> bool {
        let store = self.store();
        let delivery = job.run(store.as_ref()).await;
        self.deliver(delivery)
    }

    fn urls(&self) -> AssetUrlBuilder {
        self.store.url_builder().clone()
    }

    fn job(&self, task: Task) -> Job {
        Job {
            ticket: Ticket {
                generation: self.generation,
            },
            task,
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("generation", &self.generation)
            .field("view", &self.view)
            .finish()
    }
}
