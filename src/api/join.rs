//! Parent/child correlation of two procedure result sets.
//!
//! Each parent gets the ordered subsequence of children whose foreign key
//! equals its key. Children are scanned once per parent, so the cost is
//! O(|parents| * |children|); the procedures return small, unpaginated sets.

/// Nest `children` under `parents`, keeping both input orders.
///
/// `assemble` builds the output record from a parent and its (possibly empty)
/// child list. Every parent yields exactly one record.
pub fn nest<P, C, K, R>(
    parents: Vec<P>,
    children: &[C],
    parent_key: impl Fn(&P) -> K,
    child_key: impl Fn(&C) -> K,
    assemble: impl Fn(P, Vec<C>) -> R,
) -> Vec<R>
where
    C: Clone,
    K: PartialEq,
{
    parents
        .into_iter()
        .map(|parent| {
            let key = parent_key(&parent);
            let matched = children
                .iter()
                .filter(|child| child_key(child) == key)
                .cloned()
                .collect();
            assemble(parent, matched)
        })
        .collect()
}
