//! landview-engine: entity resolution and neighborhood materialization.
//!
//! Resolves a loosely-specified parcel identifier against the land-records
//! graph (tolerant of the inconsistent encodings left behind by historical
//! loads) and materializes the parcel's one-hop neighborhood two ways: a
//! denormalized star record for business consumers and a generic node/link
//! graph for visualization. Strictly read-only; every request re-resolves
//! and re-expands from scratch, so staleness is bounded at zero.

pub mod error;
pub mod graph;
pub mod star;

pub use error::ViewError;
pub use graph::GraphView;
pub use star::StarView;

use landview_core::normalize;
use landview_graph::GraphClient;

/// The view-building engine. Stateless apart from the shared graph client.
pub struct ViewEngine {
    graph: GraphClient,
}

impl ViewEngine {
    pub fn new(graph: GraphClient) -> Self {
        Self { graph }
    }

    /// Resolve an identifier and build the star view.
    ///
    /// A miss is `ViewError::NotFound`; store failures propagate as
    /// `ViewError::Graph` untouched (no retries).
    pub async fn star_view(&self, raw_id: &str) -> error::Result<StarView> {
        let candidates = normalize::candidates(raw_id);
        tracing::debug!(
            verbatim = %candidates.verbatim,
            digits = %candidates.digits,
            "resolving parcel for star view"
        );
        match self.graph.find_neighborhood(&candidates).await? {
            Some(neighborhood) => Ok(star::project(&neighborhood)),
            None => Err(ViewError::NotFound {
                identifier: candidates.verbatim,
            }),
        }
    }

    /// Resolve an identifier and build the graph view.
    ///
    /// A miss is an empty graph, never an error: visualization callers
    /// render nothing rather than a failure page.
    pub async fn graph_view(&self, raw_id: &str) -> error::Result<GraphView> {
        let candidates = normalize::candidates(raw_id);
        tracing::debug!(verbatim = %candidates.verbatim, "resolving parcel for graph view");
        match self.graph.find_neighborhood(&candidates).await? {
            Some(neighborhood) => Ok(graph::project(&neighborhood)),
            None => Ok(GraphView::empty()),
        }
    }

    /// List canonical parcel identifiers, optionally filtered by substring.
    pub async fn list_identifiers(
        &self,
        term: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> error::Result<Vec<String>> {
        Ok(self.graph.list_parcel_ids(term, limit, offset).await?)
    }
}
