// src/migrate/registry.rs
//! The revision graph
//!
//! Validated once when built; afterwards every traversal works on the
//! precomputed linear order. A well-formed graph has one root and one head.
//! Forks are tolerated only when a merge revision joins them again, which
//! is exactly the single-head condition.

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use super::revision::Revision;
use crate::error::{Direction, MigrationError, RegistryError};

#[derive(Debug)]
pub struct Registry {
    revisions: Vec<Revision>,
    index: HashMap<&'static str, usize>,
    /// Registration indices in execution order
    order: Vec<usize>,
    /// `position[i]` is where revision `i` sits in `order`
    position: Vec<usize>,
}

impl Registry {
    pub fn new(revisions: impl IntoIterator<Item = Revision>) -> Result<Self, RegistryError> {
        let revisions: Vec<Revision> = revisions.into_iter().collect();

        let mut index = HashMap::with_capacity(revisions.len());
        for (i, rev) in revisions.iter().enumerate() {
            if index.insert(rev.id, i).is_some() {
                return Err(RegistryError::DuplicateId(rev.id.to_string()));
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); revisions.len()];
        for (i, rev) in revisions.iter().enumerate() {
            for parent in rev.parents {
                let p = index
                    .get(parent)
                    .ok_or_else(|| RegistryError::UnknownParent {
                        id: rev.id.to_string(),
                        parent: parent.to_string(),
                    })?;
                children[*p].push(i);
            }
        }

        detect_cycle(&revisions, &children)?;

        let roots: Vec<String> = revisions
            .iter()
            .filter(|r| r.is_root())
            .map(|r| r.id.to_string())
            .collect();
        if roots.len() > 1 {
            return Err(RegistryError::MultipleRoots(roots));
        }

        let heads: Vec<String> = children
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| revisions[i].id.to_string())
            .collect();
        match heads.len() {
            0 => return Err(RegistryError::MissingHead),
            1 => {}
            _ => return Err(RegistryError::AmbiguousHead(heads)),
        }

        let order = topological_order(&revisions, &children);
        let mut position = vec![0; revisions.len()];
        for (pos, &i) in order.iter().enumerate() {
            position[i] = pos;
        }

        debug!(revisions = revisions.len(), head = %heads[0], "revision registry loaded");

        Ok(Self {
            revisions,
            index,
            order,
            position,
        })
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Revision> {
        self.index.get(id).map(|&i| &self.revisions[i])
    }

    /// Position of `id` in the linear order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).map(|&i| self.position[i])
    }

    /// Revision at position `pos` of the linear order
    pub fn at(&self, pos: usize) -> Option<&Revision> {
        self.order.get(pos).map(|&i| &self.revisions[i])
    }

    pub fn root(&self) -> &Revision {
        &self.revisions[self.order[0]]
    }

    pub fn head(&self) -> &Revision {
        &self.revisions[self.order[self.order.len() - 1]]
    }

    /// Root → head; every parent precedes its children
    pub fn linearize(&self) -> Vec<&Revision> {
        self.iter().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Revision> + '_ {
        self.order.iter().map(|&i| &self.revisions[i])
    }

    /// All ids, in registration order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.revisions.iter().map(|r| r.id)
    }

    /// Revisions applied when the database sits at `id` (`None` = base)
    pub(crate) fn applied_count(&self, id: Option<&str>) -> Result<usize, MigrationError> {
        match id {
            None => Ok(0),
            Some(id) => self
                .position(id)
                .map(|pos| pos + 1)
                .ok_or_else(|| MigrationError::NoSuchTarget(id.to_string())),
        }
    }

    /// Revisions to execute, in execution order
    ///
    /// Upgrade: forward, exclusive of `from`, inclusive of `to`.
    /// Downgrade: reversed, inclusive of `from`, exclusive of `to`.
    pub fn slice(
        &self,
        from: Option<&str>,
        to: Option<&str>,
        direction: Direction,
    ) -> Result<Vec<&Revision>, MigrationError> {
        let start = self.applied_count(from)?;
        let end = self.applied_count(to)?;

        let unreachable = || MigrationError::TargetNotReachable {
            direction,
            from: from.map(str::to_string),
            to: to.map(str::to_string),
        };

        let steps = match direction {
            Direction::Upgrade => {
                if end < start {
                    return Err(unreachable());
                }
                self.order[start..end]
                    .iter()
                    .map(|&i| &self.revisions[i])
                    .collect()
            }
            Direction::Downgrade => {
                if end > start {
                    return Err(unreachable());
                }
                self.order[end..start]
                    .iter()
                    .rev()
                    .map(|&i| &self.revisions[i])
                    .collect()
            }
        };
        Ok(steps)
    }

    /// The revision recorded once `id` has been reverted
    pub fn predecessor(&self, id: &str) -> Option<&Revision> {
        let pos = self.position(id)?;
        pos.checked_sub(1).and_then(|p| self.at(p))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    Grey,
    Black,
}

/// Iterative DFS with grey/black marking over parent → child edges
fn detect_cycle(revisions: &[Revision], children: &[Vec<usize>]) -> Result<(), RegistryError> {
    let mut marks = vec![Mark::White; revisions.len()];

    for start in 0..revisions.len() {
        if marks[start] != Mark::White {
            continue;
        }
        marks[start] = Mark::Grey;
        let mut stack = vec![(start, 0usize)];

        while let Some(top) = stack.last_mut() {
            let node = top.0;
            match children[node].get(top.1).copied() {
                Some(child) => {
                    top.1 += 1;
                    match marks[child] {
                        Mark::Grey => {
                            return Err(RegistryError::CycleDetected(
                                revisions[child].id.to_string(),
                            ))
                        }
                        Mark::White => {
                            marks[child] = Mark::Grey;
                            stack.push((child, 0));
                        }
                        Mark::Black => {}
                    }
                }
                None => {
                    marks[node] = Mark::Black;
                    stack.pop();
                }
            }
        }
    }

    Ok(())
}

/// Kahn's algorithm; ties go to the earliest registered revision
fn topological_order(revisions: &[Revision], children: &[Vec<usize>]) -> Vec<usize> {
    let mut pending: Vec<usize> = revisions.iter().map(|r| r.parents.len()).collect();
    let mut ready: BTreeSet<usize> = (0..revisions.len()).filter(|&i| pending[i] == 0).collect();
    let mut order = Vec::with_capacity(revisions.len());

    while let Some(next) = ready.pop_first() {
        order.push(next);
        for &child in &children[next] {
            pending[child] -= 1;
            if pending[child] == 0 {
                ready.insert(child);
            }
        }
    }

    order
}
