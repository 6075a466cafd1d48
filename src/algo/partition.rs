/*!
# Partitioning of Vertices

This module provides a data structure to partition vertices into disjoint **classes**,
as produced for example by [strongly connected components](super::Connectivity).

The [`Partition`] struct allows:
- Creating classes of vertices
- Moving vertices between classes
- Querying class membership by vertex id

# Example

```rust
use dgraphs::algo::Partition;

let mut part = Partition::new();

// Add first class with vertices 10, 11
let c0 = part.add_class([10, 11]);

// Add second class with vertices -2, 3
let c1 = part.add_class([-2, 3]);

// Move vertex 4 into class 0
part.move_node(4, c0);

assert_eq!(part.number_of_classes(), 2);
assert_eq!(part.number_in_class(c0), 3);
assert_eq!(part.class_of_edge(10, 4), Some(c0));
assert_eq!(part.class_of_edge(3, 4), None);
```
*/

use fxhash::FxHashMap;

use super::*;

/// Identifier of a class, assigned in order of creation starting at `0`
pub type PartitionClass = NumNodes;

/// Represents a **partition** of vertices into disjoint classes.
///
/// Every vertex belongs to at most one class; vertices never added are *unassigned*.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    members: Vec<Vec<VertexId>>,
    class_of: FxHashMap<VertexId, PartitionClass>,
}

impl Partition {
    /// Creates a new partition without classes
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new class and assigns the given vertices to it.
    /// Returns the new class identifier.
    ///
    /// # Panics
    /// - If any provided vertex was already assigned to a class.
    pub fn add_class<I>(&mut self, vertices: I) -> PartitionClass
    where
        I: IntoIterator<Item = VertexId>,
    {
        let class_id = self.members.len() as PartitionClass;

        let mut members = Vec::new();
        for u in vertices {
            let previous = self.class_of.insert(u, class_id);
            assert!(previous.is_none(), "vertex {u} is already assigned");
            members.push(u);
        }

        self.members.push(members);
        class_id
    }

    /// Moves a vertex into an existing partition class.
    ///
    /// - If the vertex was already in a class, it is removed from its old class.
    /// - If the vertex was unassigned, it becomes assigned.
    ///
    /// # Panics
    /// - If `new_class` does not exist.
    pub fn move_node(&mut self, u: VertexId, new_class: PartitionClass) {
        assert!((new_class as usize) < self.members.len());

        if let Some(old_class) = self.class_of.insert(u, new_class) {
            self.members[old_class as usize].retain(|&v| v != u);
        }
        self.members[new_class as usize].push(u);
    }

    /// Returns the class identifier of a vertex, or `None` if the vertex is unassigned
    pub fn class_of_node(&self, u: VertexId) -> Option<PartitionClass> {
        self.class_of.get(&u).copied()
    }

    /// Returns the class identifier if both endpoints of an edge belong
    /// to the same class, or `None` otherwise
    pub fn class_of_edge(&self, u: VertexId, v: VertexId) -> Option<PartitionClass> {
        let cu = self.class_of_node(u)?;
        let cv = self.class_of_node(v)?;
        if cu == cv { Some(cu) } else { None }
    }

    /// Returns the number of assigned vertices
    pub fn number_of_assigned(&self) -> NumNodes {
        self.class_of.len() as NumNodes
    }

    /// Returns the number of vertices in the specified class
    pub fn number_in_class(&self, class_id: PartitionClass) -> NumNodes {
        self.members[class_id as usize].len() as NumNodes
    }

    /// Returns the number of partition classes
    pub fn number_of_classes(&self) -> NumNodes {
        self.members.len() as NumNodes
    }

    /// Returns the members of a given class in the order they were added
    pub fn members_of_class(&self, class_id: PartitionClass) -> &[VertexId] {
        &self.members[class_id as usize]
    }

    /// Returns an iterator over all classes in order of their identifiers
    pub fn classes(&self) -> impl Iterator<Item = &[VertexId]> + '_ {
        self.members.iter().map(|class| class.as_slice())
    }
}

/// Convenience trait for converting a collection of classes into a [`Partition`].
///
/// Each inner collection is interpreted as one partition class.
pub trait IntoPartition {
    /// Consumes the collection and builds a [`Partition`].
    ///
    /// # Example
    /// ```rust
    /// use dgraphs::algo::IntoPartition;
    ///
    /// let classes = vec![vec![0, 1], vec![2, 3]];
    /// let part = classes.into_partition();
    ///
    /// assert_eq!(part.number_of_classes(), 2);
    /// assert_eq!(part.class_of_edge(0, 1), Some(0));
    /// assert_eq!(part.class_of_edge(2, 3), Some(1));
    /// ```
    fn into_partition(self) -> Partition;
}

impl<N, I> IntoPartition for I
where
    N: IntoIterator<Item = VertexId>,
    I: IntoIterator<Item = N>,
{
    fn into_partition(self) -> Partition {
        let mut partition = Partition::new();
        for class in self {
            partition.add_class(class);
        }
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_between_classes() {
        let mut part = Partition::new();
        let c0 = part.add_class([0, 1, 2]);
        let c1 = part.add_class([]);

        part.move_node(1, c1);
        assert_eq!(part.members_of_class(c0), &[0, 2]);
        assert_eq!(part.members_of_class(c1), &[1]);
        assert_eq!(part.number_of_assigned(), 3);

        part.move_node(5, c1);
        assert_eq!(part.number_in_class(c1), 2);
        assert_eq!(part.number_of_assigned(), 4);
        assert_eq!(part.class_of_node(5), Some(c1));
        assert_eq!(part.class_of_node(6), None);
    }

    #[test]
    #[should_panic]
    fn double_assignment() {
        let mut part = Partition::new();
        part.add_class([0, 1]);
        part.add_class([1]);
    }

    #[test]
    fn classes_in_order() {
        let part = vec![vec![3], vec![1, 2]].into_partition();
        let classes: Vec<_> = part.classes().collect();
        assert_eq!(classes, vec![&[3][..], &[1, 2][..]]);
    }
}
