//! Merge the calendar-connection and schedule-provider branches

use crate::migrate::{noop, Revision};

pub const REVISION: Revision = Revision {
    id: "7a2b8c1d9e0f",
    parents: &["0dc429ca07f5", "6e1d5a1f3b2c"],
    branch_labels: &[],
    title: "merge connection heads",
    created: "2023-07-24 09:00:12",
    forward: noop,
    reverse: Some(noop),
};
