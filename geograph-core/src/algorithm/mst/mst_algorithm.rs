use rand::Rng;

use crate::model::network::Graph;
use crate::util::geo::DistanceMetric;

use super::{kruskal, prim};

/// minimum-spanning-tree construction selection. both algorithms read the
/// input graph as undirected (an edge and its reversal share a key) and
/// weight edges by cached geometric length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MstAlgorithm {
    Kruskal,
    Prim,
}

pub struct MstRequest<'graph> {
    pub graph: &'graph Graph,
    pub metric: DistanceMetric,
}

impl<'graph> MstRequest<'graph> {
    pub fn new(graph: &'graph Graph) -> Self {
        Self {
            graph,
            metric: DistanceMetric::default(),
        }
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }
}

/// the spanning forest: accepted edges cloned as unkeyed simple edges, with
/// each edge recorded on its source vertex.
pub struct MstResponse {
    pub graph: Graph,
}

impl MstAlgorithm {
    pub fn run<R: Rng>(&self, request: &MstRequest, rng: &mut R) -> MstResponse {
        match self {
            MstAlgorithm::Kruskal => kruskal::run(request),
            MstAlgorithm::Prim => prim::run(request, rng),
        }
    }
}
