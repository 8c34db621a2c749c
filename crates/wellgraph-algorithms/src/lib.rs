pub mod common;
pub mod decay;
pub mod pagerank;
pub mod ranking;
pub mod similarity;

pub use common::GraphView;
pub use decay::{linear_decay, saturating_ratio};
pub use pagerank::{page_rank, PageRankConfig};
pub use ranking::{rank_top_k, Ranked, Scored};
pub use similarity::{jaccard, level_similarity, overlap_count, LEVEL_NORMALIZATION_FLOOR};
