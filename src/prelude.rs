//! Commonly used imports for convenience.

pub use twilight_analysis::{
    distance_matrix, find_orfs, gc_percent, longest_complement_palindromes, mean,
    pairwise_distances, std_dev,
};
pub use twilight_sim::prelude::*;
