pub(crate) mod debug;
pub(crate) mod jq;

pub(crate) use debug::{debug_log, set_debug};
pub(crate) use jq::filter_json;
