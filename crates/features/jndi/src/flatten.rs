use jview_domain::record::FlatRecord;
use jview_naming::{NamingDirectory, Resolved, child_path};
use tracing::debug;

/// Counters collected during one traversal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TraversalStats {
    /// Records emitted.
    pub leaves: usize,
    /// Sub-contexts descended into.
    pub contexts: usize,
    /// Paths whose `list` failed; their subtree is missing from the output.
    pub skipped_lists: usize,
    /// Children whose `lookup` failed after being listed.
    pub skipped_lookups: usize,
}

impl TraversalStats {
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_lists + self.skipped_lookups
    }
}

/// Result of flattening one root.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Listing {
    pub records: Vec<FlatRecord>,
    pub stats: TraversalStats,
}

/// Flattens everything reachable from `root` into leaf records, depth-first.
///
/// Never fails: a path that cannot be listed contributes nothing, and a child that
/// cannot be resolved is skipped while its siblings are still visited.
pub fn flatten<D>(directory: &D, root: &str) -> Listing
where
    D: NamingDirectory + ?Sized,
{
    let mut listing = Listing::default();
    flatten_into(directory, root, &mut listing.records, &mut listing.stats);
    listing
}

/// Appends the leaves under `root` to `records`, in the directory's enumeration order.
pub fn flatten_into<D>(
    directory: &D,
    root: &str,
    records: &mut Vec<FlatRecord>,
    stats: &mut TraversalStats,
) where
    D: NamingDirectory + ?Sized,
{
    let bindings = match directory.list(root) {
        Ok(bindings) => bindings,
        Err(err) => {
            stats.skipped_lists += 1;
            debug!(path = root, error = %err, "Skipping unlistable context");
            return;
        },
    };

    for binding in bindings {
        let path = child_path(root, &binding.name);

        match directory.lookup(&path) {
            Ok(Resolved::Context(context)) => {
                stats.contexts += 1;
                debug!(path = %path, children = context.size, "Descending into sub-context");
                flatten_into(directory, &path, records, stats);
            },
            Ok(Resolved::Leaf(value)) => {
                stats.leaves += 1;
                let value = value.map(|v| v.to_string());
                records.push(FlatRecord::new(path, binding.name, value));
            },
            Err(err) => {
                stats.skipped_lookups += 1;
                debug!(path = %path, error = %err, "Skipping unresolvable binding");
            },
        }
    }
}
