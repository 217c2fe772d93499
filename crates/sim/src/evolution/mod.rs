//! Evolution module providing random sequences, mutation and shuffling.
//!
//! - **Mutation**: uniform single-step insertions, deletions and substitutions
//! - **Shuffle**: composition-preserving permutation of a sequence

pub mod mutation;
pub mod shuffle;

pub use mutation::{
    apply_mutation, apply_mutation_of_kind, generate_random_sequence, mutate_n, sample_mutation,
    sample_mutation_of_kind, MutationEvent, MutationKind,
};
pub use shuffle::shuffle_sequence;
