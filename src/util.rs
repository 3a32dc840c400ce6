/// What happened when a node was asked to remove a value from its subtree.
pub(crate) enum Removal {
    /// The value wasn't found so nothing was removed.
    NotFound,
    /// The node returning this holds the value. Its owner has to detach it.
    RemoveSelf,
    /// A descendant holding the value was detached along with its subtree. Carries how many
    /// nodes went with it.
    RemovedChild(usize),
}
