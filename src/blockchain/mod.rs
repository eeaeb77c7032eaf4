// Blockchain module
//
// This module contains the core ledger implementation including:
// - Transaction structure
// - Block structure and the proof-of-work mining search
// - Blockchain structure with the pending pool, balance replay and
//   whole-chain validation

pub mod block;
pub mod chain;
pub mod transaction;

// Re-export main components for easier access
pub use block::{Block, MiningError};
pub use chain::{Blockchain, BlockchainError, DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD};
pub use transaction::{Address, Transaction};
