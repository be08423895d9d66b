mod analyze;
mod core;
mod dataset_cmds;

pub(crate) use analyze::cmd_analyze;
pub(crate) use core::cmd_dedup;
pub(crate) use dataset_cmds::{cmd_convert, cmd_merge, cmd_recalc, cmd_sort};
