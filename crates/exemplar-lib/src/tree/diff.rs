//! Structural equivalence of trees.

use exemplar_core::TreeNode;
use tracing::trace;

/// Whether `a` and `b` have the same shape: equal names and child counts at
/// every level, where a pair with equal values counts as equivalent without
/// descending further.
pub fn structurally_equivalent(a: &dyn TreeNode, b: &dyn TreeNode) -> bool {
    structurally_equivalent_with(a, b, &|_: &dyn TreeNode, _: &dyn TreeNode| false)
}

/// Like [`structurally_equivalent`], also accepting any pair `deem` holds for.
///
/// `deem` is only consulted once names and child counts already agree.
pub fn structurally_equivalent_with<D>(a: &dyn TreeNode, b: &dyn TreeNode, deem: &D) -> bool
where
    D: Fn(&dyn TreeNode, &dyn TreeNode) -> bool + ?Sized,
{
    if a.node_name() != b.node_name() {
        return false;
    }

    let (a_children, b_children) = (a.children(), b.children());
    if a_children.len() != b_children.len() {
        return false;
    }

    if std::ptr::addr_eq(std::ptr::from_ref(a), std::ptr::from_ref(b)) {
        return true;
    }

    if a.value() == b.value() {
        trace!(node = a.node_name(), value = %a.value(), "equal values");
        return true;
    }

    if deem(a, b) {
        trace!(node = a.node_name(), "deemed equivalent");
        return true;
    }

    for (ax, bx) in a_children.into_iter().zip(b_children) {
        if !structurally_equivalent_with(ax, bx, deem) {
            trace!(left = ax.node_name(), right = bx.node_name(), "not equivalent");
            return false;
        }
    }
    true
}

/// Deems two nodes equivalent when they share a name listed in `names`.
pub fn if_named<I, S>(names: I) -> impl Fn(&dyn TreeNode, &dyn TreeNode) -> bool
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    move |a: &dyn TreeNode, b: &dyn TreeNode| {
        a.node_name() == b.node_name() && names.iter().any(|n| n == a.node_name())
    }
}
