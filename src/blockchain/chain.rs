use chrono::{TimeZone, Utc};
use log::{debug, info};
use thiserror::Error;

use super::block::{Block, MiningError};
use super::transaction::{Address, Transaction};

/// Default number of leading zero hex digits required in a block hash.
pub const DEFAULT_DIFFICULTY: usize = 4;

/// Default amount credited for mining a block.
pub const DEFAULT_MINING_REWARD: f64 = 50.0;

/// Previous-hash sentinel carried by the genesis block.
const GENESIS_PREVIOUS_HASH: &str = "0";

/// Errors that can occur during blockchain operations
#[derive(Debug, Error)]
pub enum BlockchainError {
    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),
}

/// An append-only chain of proof-of-work blocks with a pending
/// transaction pool.
///
/// The ledger exclusively owns its chain and pool; callers construct and
/// own an instance, and all mutation goes through `&mut self`.
#[derive(Debug, Clone)]
pub struct Blockchain {
    /// The chain of blocks; index 0 is the genesis block
    chain: Vec<Block>,

    /// Mining difficulty (number of leading zeros required in hash)
    difficulty: usize,

    /// Pending transactions to be included in the next block
    pending_transactions: Vec<Transaction>,

    /// Amount credited to the miner, one round in arrears
    mining_reward: f64,
}

impl Blockchain {
    /// Creates a new blockchain with a genesis block and default
    /// difficulty and mining reward.
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DIFFICULTY, DEFAULT_MINING_REWARD)
    }

    /// Creates a new blockchain with the given difficulty and mining reward.
    ///
    /// # Arguments
    ///
    /// * `difficulty` - Required leading zero hex digits in a valid hash.
    ///   Expected mining iterations grow as 16^difficulty.
    /// * `mining_reward` - Amount credited per mined block, settled one
    ///   round in arrears
    pub fn with_config(difficulty: usize, mining_reward: f64) -> Self {
        Blockchain {
            chain: vec![Self::create_genesis_block()],
            difficulty,
            pending_transactions: Vec::new(),
            mining_reward,
        }
    }

    /// Creates the genesis block (first block in the chain).
    ///
    /// The genesis block has a fixed timestamp, no transactions and the
    /// previous-hash sentinel, so every ledger starts from the same root.
    fn create_genesis_block() -> Block {
        let timestamp = Utc.with_ymd_and_hms(2018, 3, 29, 0, 0, 0).unwrap();

        Block::new(timestamp, Vec::new(), GENESIS_PREVIOUS_HASH.to_string())
    }

    /// Gets the last block in the chain.
    ///
    /// Panics if the chain is empty, which cannot occur post-construction;
    /// an empty chain is a broken invariant, not a recoverable state.
    pub fn latest_block(&self) -> &Block {
        self.chain
            .last()
            .expect("chain always contains the genesis block")
    }

    /// Adds a transaction to the pending pool.
    ///
    /// No balance-sufficiency or authorship check is performed here; the
    /// pool accepts any well-formed transaction.
    pub fn create_transaction(&mut self, transaction: Transaction) {
        debug!(
            "Queued transaction of {} to {}",
            transaction.amount, transaction.to
        );

        self.pending_transactions.push(transaction);
    }

    /// Mines a new block from the pending transactions and appends it.
    ///
    /// The pending pool is then replaced with a single reward transaction
    /// paying `reward_address`. The reward is *not* part of the block just
    /// mined: it sits in the pool until the next round, so a miner's
    /// balance reflects the reward for round N only once round N+1 has
    /// been mined. This one-round settlement lag is part of the contract.
    ///
    /// # Arguments
    ///
    /// * `reward_address` - The address credited with the mining reward
    pub fn mine_pending_transactions(&mut self, reward_address: &Address) {
        let transactions = std::mem::take(&mut self.pending_transactions);

        let mut block = Block::new(Utc::now(), transactions, self.latest_block().hash.clone());
        block.mine(self.difficulty);

        info!("Block successfully mined");
        self.chain.push(block);

        self.pending_transactions = vec![Transaction::reward(
            reward_address.clone(),
            self.mining_reward,
        )];
    }

    /// Like [`Blockchain::mine_pending_transactions`], but gives up after
    /// `max_attempts` nonce increments.
    ///
    /// On failure the chain and the pending pool are left untouched; a
    /// partially mined block is never observable.
    pub fn mine_pending_transactions_bounded(
        &mut self,
        reward_address: &Address,
        max_attempts: u64,
    ) -> Result<(), BlockchainError> {
        let mut block = Block::new(
            Utc::now(),
            self.pending_transactions.clone(),
            self.latest_block().hash.clone(),
        );
        block.mine_bounded(self.difficulty, max_attempts)?;

        info!("Block successfully mined");
        self.chain.push(block);

        self.pending_transactions = vec![Transaction::reward(
            reward_address.clone(),
            self.mining_reward,
        )];

        Ok(())
    }

    /// Computes the balance of an address by replaying the whole chain.
    ///
    /// Every transaction in every block is visited in chain order, then
    /// intra-block order: the balance decreases by `amount` where the
    /// address is the sender and increases where it is the recipient.
    /// Pending transactions are excluded — balances reflect only
    /// finalized chain state.
    pub fn get_balance_of_address(&self, address: &Address) -> f64 {
        let mut balance = 0.0;

        for block in &self.chain {
            for transaction in &block.transactions {
                if transaction.from.as_ref() == Some(address) {
                    balance -= transaction.amount;
                }

                if &transaction.to == address {
                    balance += transaction.amount;
                }
            }
        }

        balance
    }

    /// Validates the blockchain.
    ///
    /// Every block after the genesis block is checked: its stored hash
    /// must equal the hash recomputed from its content, and its
    /// `previous_hash` must equal the stored hash of its predecessor.
    /// Returns false on the first violation, true only if every index
    /// passes. The genesis block itself is never recomputed; it only
    /// anchors the first linkage check.
    ///
    /// # Returns
    ///
    /// true if the blockchain is valid, false otherwise
    pub fn is_valid(&self) -> bool {
        for i in 1..self.chain.len() {
            let current_block = &self.chain[i];
            let previous_block = &self.chain[i - 1];

            // Check if the hash is correct
            if current_block.hash != current_block.calculate_hash() {
                return false;
            }

            // Check if the previous hash is correct
            if current_block.previous_hash != previous_block.hash {
                return false;
            }
        }

        true
    }

    /// Gets the chain of blocks, genesis first.
    pub fn chain(&self) -> &[Block] {
        &self.chain
    }

    /// Gets the transactions awaiting inclusion in the next block.
    pub fn pending_transactions(&self) -> &[Transaction] {
        &self.pending_transactions
    }

    /// Gets the mining difficulty.
    pub fn difficulty(&self) -> usize {
        self.difficulty
    }

    /// Gets the mining reward amount.
    pub fn mining_reward(&self) -> f64 {
        self.mining_reward
    }
}

impl Default for Blockchain {
    fn default() -> Self {
        Self::new()
    }
}
