//! Catalog browsing: stateless queries with view state.
//!
//! Rapid filter changes can complete out of order; the controller keys
//! queries through a sequence gate so a superseded response never
//! overwrites a fresher page.

use karai_api::ApiError;
use karai_api::meals::MealPage;
use karai_domain::id::MealId;
use karai_domain::meal::{Meal, MealFilter};

use crate::gateway::CatalogGateway;
use crate::inflight::SeqGate;
use crate::loadable::Loadable;
use crate::store::Store;

pub struct CatalogController<G> {
    gateway: G,
    page: Store<Loadable<MealPage>>,
    query_gate: SeqGate,
}

impl<G: CatalogGateway> CatalogController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            page: Store::default(),
            query_gate: SeqGate::new(),
        }
    }

    pub fn page(&self) -> Loadable<MealPage> {
        self.page.get()
    }

    /// Run a catalog query. An empty result is `Ready` with no items
    /// ("no meals found"), not a failure.
    pub async fn load(&self, filter: &MealFilter) -> Result<MealPage, ApiError> {
        let seq = self.query_gate.begin();
        self.page.set(Loadable::Loading);
        match self.gateway.list_meals(filter).await {
            Ok(page) => {
                if self.query_gate.try_commit(seq) {
                    self.page.set(Loadable::Ready(page.clone()));
                } else {
                    tracing::debug!(seq, "discarding superseded catalog query");
                }
                Ok(page)
            }
            Err(e) => {
                if self.query_gate.try_commit(seq) {
                    self.page.set(Loadable::Failed(e.to_string()));
                }
                Err(e)
            }
        }
    }

    /// Fetch one meal; an absent id surfaces as [`ApiError::NotFound`] for
    /// the detail page's not-found view.
    pub async fn meal(&self, id: &MealId) -> Result<Meal, ApiError> {
        self.gateway.get_meal(id).await
    }
}
