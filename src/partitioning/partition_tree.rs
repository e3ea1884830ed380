use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};
use crate::query::Ray;
use na;
use smallvec::SmallVec;

/// The number of children a node gains when it splits: one per
/// quadrant in 2D, one per octant in 3D.
const SPLIT_FANOUT: usize = 1 << DIM;

/// The default number of shapes a leaf holds before it splits.
pub const DEFAULT_MAX_ITEMS: usize = 8;

/// The default depth cap of the tree.
///
/// The cap is always enforced: a leaf at this depth keeps accumulating
/// shapes past its capacity instead of splitting, so adversarial input
/// (e.g. many identical shapes) cannot recurse unboundedly.
pub const DEFAULT_MAX_LEVEL: u8 = 5;

/// The default margin by which shapes are inflated before a ray hit
/// test.
#[cfg(feature = "dim2")]
pub const DEFAULT_RAYCAST_MARGIN: Real = 0.17;

/// The default margin by which shapes are inflated before a ray hit
/// test.
#[cfg(feature = "dim3")]
pub const DEFAULT_RAYCAST_MARGIN: Real = 0.25;

/// The identity of a shape stored in a [`PartitionTree`].
///
/// A shape overlapping several cells of the tree has its id recorded in
/// every one of them, so [`PartitionTree::query`] may return the same id
/// more than once. Callers needing unique results deduplicate by this
/// id.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObstacleId(u32);

impl ObstacleId {
    /// The index of this shape in the tree's shape storage.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A successful ray cast against the content of a [`PartitionTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// Where the ray crossed the (inflated) boundary of the shape.
    pub point: Point<Real>,
    /// The shape that was hit.
    pub obstacle: ObstacleId,
}

/// Tunable parameters of a [`PartitionTree`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TreeConfig {
    /// Number of shapes a leaf holds before it splits.
    pub max_items: usize,
    /// Depth cap; leaves at this level never split.
    pub max_level: u8,
    /// Margin by which shapes are inflated before a ray hit test,
    /// giving moving queries a small safety buffer against grazing
    /// obstacles.
    pub raycast_margin: Real,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_items: DEFAULT_MAX_ITEMS,
            max_level: DEFAULT_MAX_LEVEL,
            raycast_margin: DEFAULT_RAYCAST_MARGIN,
        }
    }
}

type NodeId = u32;

#[derive(Clone, Debug)]
struct Node {
    bounds: Aabb,
    level: u8,
    items: SmallVec<[ObstacleId; DEFAULT_MAX_ITEMS]>,
    children: Option<[NodeId; SPLIT_FANOUT]>,
}

impl Node {
    fn new_leaf(bounds: Aabb, level: u8) -> Self {
        Node {
            bounds,
            level,
            items: SmallVec::new(),
            children: None,
        }
    }
}

/// A quadtree (2D) or octree (3D) over a fixed bounded region.
///
/// Nodes live in an arena and address each other by index; each node is
/// either a leaf holding a small list of shape ids, or an internal node
/// with exactly `2^D` children covering equal sub-quadrants/octants of
/// its bounds. A leaf splits the first time it reaches its item
/// capacity (unless it sits at the depth cap), and the split is eager:
/// all children are created at once and the leaf's shapes are
/// redistributed into every child they overlap.
///
/// Shapes themselves are stored once, in a side array; only their ids
/// are duplicated across the cells they overlap. This favors query
/// simplicity over storage compactness: `query`, `intersect` and
/// `raycast` never need to reconcile multi-cell shapes, at the price of
/// possible duplicates in `query` results.
#[derive(Clone, Debug)]
pub struct PartitionTree {
    nodes: Vec<Node>,
    shapes: Vec<Aabb>,
    config: TreeConfig,
}

impl PartitionTree {
    /// Creates an empty tree covering `bounds`, with the default
    /// [`TreeConfig`].
    pub fn new(bounds: Aabb) -> Self {
        Self::with_config(bounds, TreeConfig::default())
    }

    /// Creates an empty tree covering `bounds` with the given
    /// configuration.
    pub fn with_config(bounds: Aabb, config: TreeConfig) -> Self {
        PartitionTree {
            nodes: vec![Node::new_leaf(bounds, 0)],
            shapes: Vec::new(),
            config,
        }
    }

    /// The region covered by this tree.
    #[inline]
    pub fn bounds(&self) -> &Aabb {
        &self.nodes[0].bounds
    }

    /// The configuration this tree was built with.
    #[inline]
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// The number of shapes stored in this tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether this tree stores no shape at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The number of nodes of this tree (diagnostics).
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// The shape stored under `id`, if any.
    #[inline]
    pub fn get(&self, id: ObstacleId) -> Option<&Aabb> {
        self.shapes.get(id.index())
    }

    /// Iterates over every stored shape, each exactly once, with its id.
    pub fn shapes(&self) -> impl Iterator<Item = (ObstacleId, &Aabb)> {
        self.shapes
            .iter()
            .enumerate()
            .map(|(i, shape)| (ObstacleId(i as u32), shape))
    }

    /// Inserts `shape` into the tree.
    ///
    /// Returns `None` without storing anything if `shape` does not
    /// overlap the tree bounds. Otherwise the shape's id is threaded
    /// into every cell it overlaps and returned.
    pub fn insert(&mut self, shape: Aabb) -> Option<ObstacleId> {
        if !self.nodes[0].bounds.intersects(&shape) {
            return None;
        }

        let id = ObstacleId(self.shapes.len() as u32);
        self.shapes.push(shape);
        self.insert_into(0, id);
        Some(id)
    }

    fn insert_into(&mut self, node: NodeId, id: ObstacleId) {
        let shape = self.shapes[id.index()];
        if !self.nodes[node as usize].bounds.intersects(&shape) {
            return;
        }

        if let Some(children) = self.nodes[node as usize].children {
            for child in children {
                self.insert_into(child, id);
            }
            return;
        }

        self.nodes[node as usize].items.push(id);

        let len = self.nodes[node as usize].items.len();
        if len >= self.config.max_items {
            if self.nodes[node as usize].level < self.config.max_level {
                self.split(node);
            } else if len == self.config.max_items {
                log::debug!(
                    "partition-tree leaf at the depth cap ({}) exceeded its capacity ({}); \
                     it will keep accumulating",
                    self.config.max_level,
                    self.config.max_items,
                );
            }
        }
    }

    /// Splits `node` into `SPLIT_FANOUT` children and redistributes its
    /// shapes into every child they overlap.
    fn split(&mut self, node: NodeId) {
        let bounds = self.nodes[node as usize].bounds;
        let level = self.nodes[node as usize].level;

        let first_child = self.nodes.len() as NodeId;
        let mut children = [0 as NodeId; SPLIT_FANOUT];
        for (i, sub) in bounds.split_at_center().into_iter().enumerate() {
            children[i] = first_child + i as NodeId;
            self.nodes.push(Node::new_leaf(sub, level + 1));
        }

        let items = std::mem::take(&mut self.nodes[node as usize].items);
        self.nodes[node as usize].children = Some(children);

        for id in items {
            self.insert_into(node, id);
        }
    }

    /// Returns the id of every stored shape overlapping `range`.
    ///
    /// A shape recorded in several of the visited cells appears once per
    /// cell; results are NOT deduplicated.
    pub fn query(&self, range: &Aabb) -> Vec<ObstacleId> {
        let mut items_in_range = Vec::new();
        self.query_into(0, range, &mut items_in_range);
        items_in_range
    }

    fn query_into(&self, node: NodeId, range: &Aabb, out: &mut Vec<ObstacleId>) {
        let node = &self.nodes[node as usize];
        if !node.bounds.intersects(range) {
            return;
        }

        for &id in &node.items {
            if self.shapes[id.index()].intersects(range) {
                out.push(id);
            }
        }

        if let Some(children) = node.children {
            for child in children {
                self.query_into(child, range, out);
            }
        }
    }

    /// Tests whether any stored shape overlaps `range`, short-circuiting
    /// on the first one found.
    pub fn intersect(&self, range: &Aabb) -> bool {
        self.intersect_at(0, range)
    }

    fn intersect_at(&self, node: NodeId, range: &Aabb) -> bool {
        let node = &self.nodes[node as usize];
        if !node.bounds.intersects(range) {
            return false;
        }

        for &id in &node.items {
            if self.shapes[id.index()].intersects(range) {
                return true;
            }
        }

        if let Some(children) = node.children {
            for child in children {
                if self.intersect_at(child, range) {
                    return true;
                }
            }
        }

        false
    }

    /// Casts a ray and returns the closest hit within `max_distance`, if
    /// any.
    ///
    /// The traversal is depth-first: a subtree whose bounds the ray
    /// misses entirely is rejected without looking at its content.
    /// Candidate hits at a distance greater than or equal to
    /// `max_distance` are discarded, and each shape is inflated by the
    /// configured margin before the boundary hit test. Pass
    /// `Real::INFINITY` for an unbounded cast.
    pub fn raycast(&self, ray: &Ray, max_distance: Real) -> Option<RayHit> {
        self.raycast_at(0, ray, max_distance)
    }

    fn raycast_at(&self, node: NodeId, ray: &Ray, max_distance: Real) -> Option<RayHit> {
        let node = &self.nodes[node as usize];
        if !node.bounds.intersects_ray(ray) {
            return None;
        }

        let mut closest = None;
        let mut min_distance = Real::INFINITY;

        if let Some(children) = node.children {
            for child in children {
                if let Some(hit) = self.raycast_at(child, ray, max_distance) {
                    let dist = na::distance(&ray.origin, &hit.point);
                    if dist < min_distance {
                        min_distance = dist;
                        closest = Some(hit);
                    }
                }
            }
        }

        for &id in &node.items {
            let inflated = self.shapes[id.index()].loosened(self.config.raycast_margin);
            if let Some(point) = inflated.cast_boundary_ray(ray) {
                let dist = na::distance(&ray.origin, &point);
                if dist >= max_distance {
                    continue;
                }
                if dist < min_distance {
                    min_distance = dist;
                    closest = Some(RayHit {
                        point,
                        obstacle: id,
                    });
                }
            }
        }

        closest
    }

    /// Removes every shape and every node; the tree becomes a single
    /// empty leaf over the same bounds.
    pub fn clear(&mut self) {
        let bounds = self.nodes[0].bounds;
        self.nodes.clear();
        self.nodes.push(Node::new_leaf(bounds, 0));
        self.shapes.clear();
    }
}
