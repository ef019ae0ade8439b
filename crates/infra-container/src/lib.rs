// HHN Infrastructure - Container Runtime Adapter
// Implements: ContainerRunner for docker and singularity

pub mod docker;
pub mod singularity;
pub mod subprocess_runner;

pub use subprocess_runner::SubprocessContainerRunner;
