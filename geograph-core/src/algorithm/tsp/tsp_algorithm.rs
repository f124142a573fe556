use rand::Rng;

use crate::model::network::Graph;
use crate::model::Path;
use crate::util::geo::DistanceMetric;

use super::{greedy, random};

/// traveling-salesperson heuristic selection. both base heuristics start at
/// a random vertex, walk adjacency while unvisited neighbors remain, and
/// synthesize unkeyed jump edges on dead ends; the tour is closed back to
/// its start. `RepeatBest` reruns an inner heuristic and keeps the shortest
/// tour found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TspAlgorithm {
    Greedy,
    Random,
    RepeatBest {
        algorithm: Box<TspAlgorithm>,
        iterations: usize,
    },
}

pub struct TspRequest<'graph> {
    pub graph: &'graph Graph,
    pub metric: DistanceMetric,
}

impl<'graph> TspRequest<'graph> {
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

pub struct TspResponse {
    pub path: Path,
}

impl TspAlgorithm {
    pub fn run<R: Rng>(&self, request: &TspRequest, rng: &mut R) -> TspResponse {
        match self {
            TspAlgorithm::Greedy => greedy::run(request, rng),
            TspAlgorithm::Random => random::run(request, rng),
            TspAlgorithm::RepeatBest {
                algorithm,
                iterations,
            } => {
                let mut best: Option<TspResponse> = None;
                for _ in 0..*iterations {
                    let response = algorithm.run(request, rng);
                    let improved = match &best {
                        None => true,
                        Some(incumbent) => {
                            response.path.total_distance(request.metric)
                                < incumbent.path.total_distance(request.metric)
                        }
                    };
                    if improved {
                        best = Some(response);
                    }
                }
                best.unwrap_or(TspResponse { path: Path::empty() })
            }
        }
    }
}
