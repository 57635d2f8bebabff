mod base;
mod cluster;
mod provisioner;
mod workload;

pub use base::*;
pub use cluster::*;
pub use provisioner::*;
pub use workload::*;
