// HHN Infrastructure - Dataset Adapter
// Loads node tables and the interactome from TSV files into a GraphDataset

mod interactome_file;
mod node_file;
mod source;

pub use interactome_file::read_interactome;
pub use node_file::read_node_file;
pub use source::TsvDatasetSource;
