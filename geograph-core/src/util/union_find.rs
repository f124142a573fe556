/// A disjoint-set ("union & find") structure over dense indices, with path
/// compression and union by rank.
///
/// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// representative of the set containing `x`, flattening the walked chain
    /// so future lookups are cheaper.
    ///
    /// panics if `x` is out of bounds.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut walk = x;
        while self.parent[walk] != root {
            walk = std::mem::replace(&mut self.parent[walk], root);
        }
        root
    }

    /// unify the sets containing `x` and `y`. returns false when they were
    /// already the same set.
    ///
    /// panics if `x` or `y` is out of bounds.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let xroot = self.find(x);
        let yroot = self.find(y);
        if xroot == yroot {
            return false;
        }
        match self.rank[xroot].cmp(&self.rank[yroot]) {
            std::cmp::Ordering::Less => self.parent[xroot] = yroot,
            std::cmp::Ordering::Greater => self.parent[yroot] = xroot,
            std::cmp::Ordering::Equal => {
                self.parent[yroot] = xroot;
                self.rank[xroot] += 1;
            }
        }
        true
    }

    /// number of disjoint sets remaining.
    pub fn component_count(&mut self) -> usize {
        let n = self.parent.len();
        let mut roots = std::collections::HashSet::new();
        for i in 0..n {
            let root = self.find(i);
            roots.insert(root);
        }
        roots.len()
    }
}
