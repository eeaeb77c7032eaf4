use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use super::transaction::Transaction;

/// Errors that can occur while mining a block
#[derive(Debug, Error)]
pub enum MiningError {
    #[error("mining gave up after {attempts} attempts at difficulty {difficulty}")]
    AttemptsExhausted { attempts: u64, difficulty: usize },
}

/// Represents a block in the blockchain
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    /// Timestamp when the block was created
    pub timestamp: DateTime<Utc>,

    /// List of transactions included in this block, in hashing order
    pub transactions: Vec<Transaction>,

    /// Hash of the previous block ("0" for the genesis block)
    pub previous_hash: String,

    /// Hash of the current block (calculated)
    pub hash: String,

    /// Proof-of-work search counter
    pub nonce: u64,
}

impl Block {
    /// Creates a new block with `nonce` 0 and its initial hash computed.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - The creation instant of the block
    /// * `transactions` - The list of transactions to include in the block
    /// * `previous_hash` - The hash of the previous block
    ///
    /// # Returns
    ///
    /// A new Block instance
    pub fn new(
        timestamp: DateTime<Utc>,
        transactions: Vec<Transaction>,
        previous_hash: String,
    ) -> Self {
        let block = Block {
            timestamp,
            transactions,
            previous_hash,
            hash: String::new(),
            nonce: 0,
        };

        let hash = block.calculate_hash();

        Block { hash, ..block }
    }

    /// Calculates the hash of the block.
    ///
    /// The digest covers `previous_hash`, `timestamp`, the full transaction
    /// list (order-significant) and `nonce` — reordering transactions or
    /// mutating any of these fields changes the hash.
    ///
    /// # Returns
    ///
    /// The SHA-256 hash of the block as a hexadecimal string
    pub fn calculate_hash(&self) -> String {
        let mut hasher = Sha256::new();

        // Canonical JSON encoding of the hashed fields
        let block_data = serde_json::json!({
            "previous_hash": self.previous_hash,
            "timestamp": self.timestamp,
            "transactions": self.transactions,
            "nonce": self.nonce,
        });

        let block_string = serde_json::to_string(&block_data).unwrap();

        hasher.update(block_string.as_bytes());

        hex::encode(hasher.finalize())
    }

    /// Mines the block at the given difficulty.
    ///
    /// Increments `nonce` and recomputes `hash` until the hash has at least
    /// `difficulty` leading zero hex digits. Unbounded: expected iterations
    /// grow as 16^difficulty, and the loop only terminates once the target
    /// is met. Use [`Block::mine_bounded`] to cap the search.
    pub fn mine(&mut self, difficulty: usize) {
        let target = "0".repeat(difficulty);

        while !self.hash.starts_with(&target) {
            self.nonce += 1;
            self.hash = self.calculate_hash();
        }

        info!("Block mined: {} (nonce: {})", self.hash, self.nonce);
    }

    /// Mines the block, giving up after `max_attempts` nonce increments.
    ///
    /// On failure the block's `nonce` and `hash` have advanced but no
    /// qualifying hash was found; callers should discard the block.
    pub fn mine_bounded(&mut self, difficulty: usize, max_attempts: u64) -> Result<(), MiningError> {
        let target = "0".repeat(difficulty);
        let mut attempts = 0u64;

        while !self.hash.starts_with(&target) {
            if attempts == max_attempts {
                return Err(MiningError::AttemptsExhausted {
                    attempts: max_attempts,
                    difficulty,
                });
            }

            self.nonce += 1;
            self.hash = self.calculate_hash();
            attempts += 1;
        }

        info!("Block mined: {} (nonce: {})", self.hash, self.nonce);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blockchain::Address;

    fn sample_block() -> Block {
        let transactions = vec![
            Transaction::new(Address::from("alice"), Address::from("bob"), 10.0),
            Transaction::new(Address::from("bob"), Address::from("carol"), 5.0),
        ];

        Block::new(Utc::now(), transactions, "previous_hash".to_string())
    }

    #[test]
    fn test_new_block() {
        let block = sample_block();

        assert_eq!(block.nonce, 0);
        assert_eq!(block.previous_hash, "previous_hash");
        assert!(!block.hash.is_empty());
        assert_eq!(block.hash.len(), 64); // SHA-256 hash is 64 characters in hex
    }

    #[test]
    fn test_hash_determinism() {
        let block = sample_block();

        assert_eq!(block.calculate_hash(), block.calculate_hash());
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn test_hash_changes_with_nonce() {
        let mut block = sample_block();
        let hash_before = block.calculate_hash();

        block.nonce += 1;

        assert_ne!(hash_before, block.calculate_hash());
    }

    #[test]
    fn test_hash_changes_with_transaction_order() {
        let mut block = sample_block();
        let hash_before = block.calculate_hash();

        block.transactions.reverse();

        assert_ne!(hash_before, block.calculate_hash());
    }

    #[test]
    fn test_hash_changes_with_amount() {
        let mut block = sample_block();
        let hash_before = block.calculate_hash();

        block.transactions[0].amount = 999.0;

        assert_ne!(hash_before, block.calculate_hash());
    }

    #[test]
    fn test_mine_meets_difficulty() {
        let mut block = sample_block();

        block.mine(2);

        assert!(block.hash.starts_with("00"));
        assert_eq!(block.hash, block.calculate_hash());
    }

    #[test]
    fn test_mine_bounded_success() {
        let mut block = sample_block();

        // Difficulty 1 succeeds within 16 expected attempts on average;
        // a generous cap makes failure astronomically unlikely.
        block.mine_bounded(1, 1_000_000).unwrap();

        assert!(block.hash.starts_with('0'));
    }

    #[test]
    fn test_mine_bounded_exhaustion() {
        let mut block = sample_block();

        // 64 leading zeros would require inverting SHA-256; a tiny budget
        // must give up.
        let result = block.mine_bounded(64, 10);

        assert!(matches!(
            result,
            Err(MiningError::AttemptsExhausted {
                attempts: 10,
                difficulty: 64
            })
        ));
    }
}
