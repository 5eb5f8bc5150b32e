//! Plain-text I/O for problem instances and search traces.
//!
//! # Instance format
//!
//! A file holds one or more instances as a whitespace-separated token
//! stream (line breaks carry no meaning, so OR-Library style wrapped
//! rows parse unchanged):
//!
//! ```text
//! <instance count>
//! <num_agents> <num_tasks>
//! <num_agents rows of num_tasks cost values>
//! <num_agents rows of num_tasks resource values>
//! <num_agents capacities>
//! ```
//!
//! # Trace format
//!
//! One [`PerfRecord`](crate::perf::PerfRecord) per line, rendered
//! space-delimited; the reader also accepts comma-delimited fields and
//! skips blank lines.

mod reader;
mod writer;

pub use reader::{parse_instances, read_instances};
pub use writer::{read_records, read_records_from_path, write_records, write_records_to_path};
