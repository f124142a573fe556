use std::collections::VecDeque;

use crate::model::cost::Cost;
use crate::util::priority_queue::{InternalPriorityQueue, ReversePriority};

use super::RoutingAlgorithm;

/// the open set of a search, holding arena indices of candidate nodes.
/// the discipline decides the traversal order: FIFO explores level by level,
/// LIFO dives depth-first, and the priority heap pops the lowest priority
/// first.
pub enum Frontier {
    Fifo(VecDeque<usize>),
    Lifo(Vec<usize>),
    Priority(InternalPriorityQueue<usize, ReversePriority>),
}

impl Frontier {
    pub fn new(algorithm: &RoutingAlgorithm) -> Frontier {
        match algorithm {
            RoutingAlgorithm::BreadthFirst => Frontier::Fifo(VecDeque::new()),
            RoutingAlgorithm::DepthFirst => Frontier::Lifo(vec![]),
            RoutingAlgorithm::AStar => Frontier::Priority(InternalPriorityQueue::default()),
        }
    }

    /// add a candidate. the priority only orders the heap discipline; for an
    /// index already queued there, the better (lower) priority wins.
    pub fn push(&mut self, index: usize, priority: Cost) {
        match self {
            Frontier::Fifo(queue) => queue.push_back(index),
            Frontier::Lifo(stack) => stack.push(index),
            Frontier::Priority(heap) => {
                heap.push_increase(index, priority.into());
            }
        }
    }

    pub fn pop(&mut self) -> Option<usize> {
        match self {
            Frontier::Fifo(queue) => queue.pop_front(),
            Frontier::Lifo(stack) => stack.pop(),
            Frontier::Priority(heap) => heap.pop().map(|(index, _)| index),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Frontier::Fifo(queue) => queue.len(),
            Frontier::Lifo(stack) => stack.len(),
            Frontier::Priority(heap) => heap.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut frontier = Frontier::new(&RoutingAlgorithm::BreadthFirst);
        frontier.push(0, Cost::ZERO);
        frontier.push(1, Cost::ZERO);
        assert_eq!(frontier.pop(), Some(0));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_lifo_order() {
        let mut frontier = Frontier::new(&RoutingAlgorithm::DepthFirst);
        frontier.push(0, Cost::ZERO);
        frontier.push(1, Cost::ZERO);
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(0));
    }

    #[test]
    fn test_priority_order() {
        let mut frontier = Frontier::new(&RoutingAlgorithm::AStar);
        frontier.push(0, Cost::new(4.0));
        frontier.push(1, Cost::new(2.0));
        frontier.push(2, Cost::new(3.0));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(0));
    }
}
