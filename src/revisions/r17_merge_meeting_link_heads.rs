use crate::migrate::{noop, Revision};

pub const REVISION: Revision = Revision {
    id: "156b3b0d77b9",
    parents: &["12c7e1b34dd6", "a9ca5a4325ec"],
    branch_labels: &[],
    title: "merge meeting link heads",
    created: "2023-08-21 11:18:45",
    forward: noop,
    reverse: Some(noop),
};
