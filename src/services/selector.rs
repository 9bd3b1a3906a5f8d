// src/services/selector.rs
// DOCUMENTATION: Lunch-selection orchestration
// PURPOSE: Run one attempt from location request to a published restaurant

use crate::errors::{LocationError, SelectorError};
use crate::models::{
    RecentResults, Restaurant, SearchCriteria, DETAIL_FIELDS, ORACLE_TAGS, PositionOptions,
};
use crate::services::{LocationProvider, PlacesApi, RandomSource, RecentResultsStore};
use std::future::Future;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;

const NO_RESULTS_MESSAGE: &str = "No restaurants found in your area";

/// Which lookup the display record is built from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DetailMerge {
    /// Details are fetched but the record uses the nearby-search fields only
    #[default]
    CandidateOnly,
    /// Detail fields win; missing ones fall back to the candidate
    PreferDetail,
}

#[derive(Debug, Clone, Default)]
pub struct SelectorOptions {
    pub position: PositionOptions,
    pub detail_merge: DetailMerge,
}

/// Stage of the current attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptState {
    Idle,
    Locating,
    Searching,
    DetailFetching,
    Resolved(Restaurant),
    /// Carries the user-facing message
    Failed(String),
}

impl AttemptState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttemptState::Resolved(_) | AttemptState::Failed(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            AttemptState::Locating | AttemptState::Searching | AttemptState::DetailFetching
        )
    }
}

/// Snapshot handed to the presentation layer
/// DOCUMENTATION: `restaurant` keeps the last resolved result across later failures
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub state: AttemptState,
    pub restaurant: Option<Restaurant>,
    pub loading: bool,
    pub error: Option<String>,
    pub recent: RecentResults,
}

impl SessionView {
    fn new(recent: RecentResults) -> Self {
        Self {
            state: AttemptState::Idle,
            restaurant: None,
            loading: false,
            error: None,
            recent,
        }
    }
}

/// Picks one nearby restaurant per attempt
/// DOCUMENTATION: Attempts take `&self`; the history is updated and saved
/// under one lock so concurrent attempts never lose each other's result
pub struct Selector<L, P, S, R> {
    location: L,
    places: P,
    store: S,
    rng: Mutex<R>,
    recent: Mutex<RecentResults>,
    view: watch::Sender<SessionView>,
    options: SelectorOptions,
}

impl<L, P, S, R> Selector<L, P, S, R>
where
    L: LocationProvider,
    P: PlacesApi,
    S: RecentResultsStore,
    R: RandomSource,
{
    /// Build a selector; the persisted history is read once, here
    pub fn new(location: L, places: P, store: S, rng: R, options: SelectorOptions) -> Self {
        let recent = store.load();
        log::debug!("Loaded {} recent results", recent.len());
        let (view, _) = watch::channel(SessionView::new(recent.clone()));

        Self {
            location,
            places,
            store,
            rng: Mutex::new(rng),
            recent: Mutex::new(recent),
            view,
            options,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionView> {
        self.view.subscribe()
    }

    pub fn view(&self) -> SessionView {
        self.view.borrow().clone()
    }

    pub fn recent(&self) -> RecentResults {
        lock(&self.recent).clone()
    }

    /// Headline for a result, drawn from the injected random source
    pub fn oracle_tag(&self) -> &'static str {
        let index = lock(&self.rng).pick_index(ORACLE_TAGS.len());
        ORACLE_TAGS[index]
    }

    /// Run one attempt for `cuisine` ("All" or empty for any)
    /// DOCUMENTATION: Every failure is converted into one message and
    /// published as `Failed`; nothing is retried. Dropping the returned
    /// future before it finishes publishes a cancelled `Failed` state
    pub async fn summon(&self, cuisine: &str) -> Result<Restaurant, SelectorError> {
        log::info!("Summoning lunch (cuisine: {})", display_cuisine(cuisine));
        let mut guard = AttemptGuard {
            view: &self.view,
            settled: false,
        };
        self.transition(AttemptState::Locating);

        let outcome = self.attempt(cuisine).await;
        guard.settled = true;

        match outcome {
            Ok(restaurant) => {
                self.commit(&restaurant);
                log::info!("Lunch summoned: {} ({})", restaurant.name, restaurant.type_field);
                self.transition(AttemptState::Resolved(restaurant.clone()));
                Ok(restaurant)
            }
            Err(e) => {
                log::error!("Lunch attempt failed: {}", e);
                self.transition(AttemptState::Failed(e.user_message()));
                Err(e)
            }
        }
    }

    /// Like `summon`, but gives up as soon as `cancel` completes
    pub async fn summon_until<F>(&self, cuisine: &str, cancel: F) -> Result<Restaurant, SelectorError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            result = self.summon(cuisine) => result,
            _ = cancel => {
                let e = SelectorError::Cancelled;
                log::warn!("Lunch attempt cancelled");
                self.transition(AttemptState::Failed(e.user_message()));
                Err(e)
            }
        }
    }

    async fn attempt(&self, cuisine: &str) -> Result<Restaurant, SelectorError> {
        let options = &self.options.position;
        let position = tokio::time::timeout(options.timeout, self.location.current_position(options))
            .await
            .map_err(|_| LocationError::Timeout)??;
        log::debug!("User location: {}", position);

        self.transition(AttemptState::Searching);
        let criteria = SearchCriteria::for_cuisine(cuisine);
        let response = self.places.nearby_search(&position, &criteria).await?;

        if !response.is_ok() || response.results.is_empty() {
            log::error!(
                "Nearby search status {} with {} results: {:?}",
                response.status,
                response.results.len(),
                response.error_message
            );
            let message = response
                .error_message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| NO_RESULTS_MESSAGE.to_string());
            return Err(SelectorError::NoResults(message));
        }

        let index = lock(&self.rng).pick_index(response.results.len());
        let candidate = &response.results[index];
        log::debug!(
            "Picked candidate {} of {}: {}",
            index + 1,
            response.results.len(),
            candidate.place_id
        );

        self.transition(AttemptState::DetailFetching);
        let details = self
            .places
            .place_details(&candidate.place_id, &DETAIL_FIELDS)
            .await?;
        log::debug!("Details status: {}", details.status);

        let restaurant = match (self.options.detail_merge, details.result) {
            (DetailMerge::PreferDetail, Some(detail)) if details.status == "OK" => {
                Restaurant::from_detail(&detail, candidate)
            }
            _ => Restaurant::from_candidate(candidate),
        };

        Ok(restaurant)
    }

    /// Record a resolved restaurant in the history and persist it
    fn commit(&self, restaurant: &Restaurant) {
        let mut recent = lock(&self.recent);
        recent.push(restaurant.clone());

        if let Err(e) = self.store.save(&recent) {
            log::warn!("Could not persist recent results: {}", e);
        }

        let snapshot = recent.clone();
        self.view.send_modify(|view| view.recent = snapshot);
    }

    fn transition(&self, state: AttemptState) {
        publish(&self.view, state);
    }
}

/// Publishes a cancelled `Failed` state if an attempt is dropped mid-flight
struct AttemptGuard<'a> {
    view: &'a watch::Sender<SessionView>,
    settled: bool,
}

impl Drop for AttemptGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            log::warn!("Lunch attempt dropped before finishing");
            publish(self.view, AttemptState::Failed(SelectorError::Cancelled.user_message()));
        }
    }
}

fn publish(view: &watch::Sender<SessionView>, state: AttemptState) {
    log::debug!("Attempt state -> {:?}", state);
    view.send_modify(|view| {
        view.loading = state.is_loading();
        match &state {
            AttemptState::Locating => view.error = None,
            AttemptState::Resolved(restaurant) => {
                view.restaurant = Some(restaurant.clone());
                view.error = None;
            }
            AttemptState::Failed(message) => view.error = Some(message.clone()),
            _ => {}
        }
        view.state = state;
    });
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn display_cuisine(cuisine: &str) -> &str {
    if cuisine.is_empty() {
        "All"
    } else {
        cuisine
    }
}
