pub mod baseline;
pub mod config;
pub mod diverge;
pub mod orfs;
pub mod palindromes;
pub mod shuffle;
pub mod twilight;
