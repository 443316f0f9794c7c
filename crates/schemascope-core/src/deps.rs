use tracing::warn;

use crate::schema::{ForeignKey, Table};

/// Outcome of the dependency ordering pass.
#[derive(Debug, Clone)]
pub struct DependencyOrder<'a> {
    /// Tables permuted so parents precede their children where possible.
    pub tables: Vec<&'a Table>,
    /// Whether the relocation loop reached a fixed point. `false` means the
    /// pass cap was hit, which happens when foreign keys form a cycle.
    pub converged: bool,
    /// Number of full passes performed.
    pub passes: usize,
}

/// Reorders `tables` so foreign-key parents come before their children.
///
/// Relocation heuristic: repeat passes over the tables in their original
/// collection order; for each parent table, any child sitting earlier in the
/// working order is pulled out and reinserted immediately after the parent.
/// The parent's position is captured once per table per pass, while child
/// positions are looked up live against the working order. Self-referencing
/// keys never move, and keys whose child is not in the snapshot are ignored.
///
/// A pass with no relocation is the fixed point. Cyclic foreign keys can make
/// tables chase each other forever, so the loop is capped at `n*n + 1` passes;
/// hitting the cap logs a warning and returns the in-progress order.
pub(crate) fn dependency_order<'a>(
    tables: &'a [Table],
    foreign_keys: &[ForeignKey],
) -> DependencyOrder<'a> {
    let mut order: Vec<usize> = (0..tables.len()).collect();
    let max_passes = tables.len() * tables.len() + 1;
    let mut passes = 0;
    let mut converged = false;

    loop {
        let mut moved = false;

        for (parent_idx, parent) in tables.iter().enumerate() {
            let parent_full = parent.full_name();
            let Some(parent_pos) = order.iter().position(|&i| i == parent_idx) else {
                continue;
            };

            for fk in foreign_keys
                .iter()
                .filter(|fk| fk.parent_table().full_name() == parent_full)
            {
                let child_full = fk.child_table().full_name();
                if child_full == parent_full {
                    continue;
                }
                let Some(child_pos) = order
                    .iter()
                    .position(|&i| tables[i].full_name() == child_full)
                else {
                    continue;
                };
                if child_pos < parent_pos {
                    let child_idx = order.remove(child_pos);
                    // The parent is still present after removing the child.
                    let insert_at = order
                        .iter()
                        .position(|&i| i == parent_idx)
                        .map_or(child_pos, |p| p + 1);
                    order.insert(insert_at, child_idx);
                    moved = true;
                }
            }
        }

        passes += 1;
        if !moved {
            converged = true;
            break;
        }
        if passes >= max_passes {
            warn!(
                passes,
                tables = tables.len(),
                "dependency sort did not converge; foreign keys likely form a cycle"
            );
            break;
        }
    }

    DependencyOrder {
        tables: order.into_iter().map(|i| &tables[i]).collect(),
        converged,
        passes,
    }
}
