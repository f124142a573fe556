use std::{
    cmp::Reverse,
    collections::hash_map::RandomState,
    hash::Hash,
    ops::{Deref, DerefMut},
};

use priority_queue::PriorityQueue;

use crate::model::cost::Cost;

/// min-queue priority key. [`PriorityQueue`] pops its maximum entry, so
/// frontier priorities are stored reversed and the cheapest entry pops first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReversePriority(pub Reverse<Cost>);

impl From<Cost> for ReversePriority {
    fn from(value: Cost) -> Self {
        ReversePriority(Reverse(value))
    }
}

pub struct InternalPriorityQueue<I: Hash + Eq, P: Ord, S = RandomState>(pub PriorityQueue<I, P, S>);

impl<H: Hash + Eq, I: Ord, S> Deref for InternalPriorityQueue<H, I, S> {
    type Target = PriorityQueue<H, I, S>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<H: Hash + Eq, I: Ord, S> DerefMut for InternalPriorityQueue<H, I, S> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<I: Hash + Eq, P: Ord> Default for InternalPriorityQueue<I, P, RandomState> {
    fn default() -> InternalPriorityQueue<I, P, RandomState> {
        InternalPriorityQueue(PriorityQueue::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_minimum_cost_first() {
        let mut queue: InternalPriorityQueue<usize, ReversePriority> =
            InternalPriorityQueue::default();
        queue.push(0, Cost::new(10.0).into());
        queue.push(1, Cost::new(1.0).into());
        queue.push(2, Cost::new(5.0).into());

        let order: Vec<usize> = std::iter::from_fn(|| queue.pop().map(|(i, _)| i)).collect();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_push_increase_lowers_cost() {
        let mut queue: InternalPriorityQueue<usize, ReversePriority> =
            InternalPriorityQueue::default();
        queue.push(0, Cost::new(2.0).into());
        queue.push(1, Cost::new(3.0).into());
        // a lower cost is a higher reversed priority
        queue.push_increase(1, Cost::new(1.0).into());

        assert_eq!(queue.pop().map(|(i, _)| i), Some(1));
    }
}
