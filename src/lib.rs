//! A minimal append-only ledger secured by proof-of-work.
//!
//! The ledger is an in-process library: callers submit transactions into a
//! pending pool, trigger mining rounds that bind each new block to its
//! predecessor's hash under a difficulty target, query balances by replaying
//! the chain, and validate the whole chain to detect retroactive tampering.
//!
//! Networking, persistence, signatures and wallet management are out of
//! scope.
//!
//! # Example
//!
//! ```rust
//! use powledger::{Address, Blockchain, Transaction};
//!
//! let mut ledger = Blockchain::with_config(2, 50.0);
//! ledger.create_transaction(Transaction::new(
//!     Address::from("alice"),
//!     Address::from("bob"),
//!     50.0,
//! ));
//!
//! ledger.mine_pending_transactions(&Address::from("miner"));
//!
//! assert_eq!(ledger.get_balance_of_address(&Address::from("bob")), 50.0);
//! assert!(ledger.is_valid());
//! ```

pub mod blockchain;

pub use blockchain::{
    Address, Block, Blockchain, BlockchainError, MiningError, Transaction, DEFAULT_DIFFICULTY,
    DEFAULT_MINING_REWARD,
};
