use serde::{Deserialize, Serialize};

use std::fmt;

/// An opaque account identifier on the ledger.
///
/// Addresses are plain strings here; key derivation and signature
/// verification are out of scope for this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address(pub String);

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Address {
    fn from(s: &str) -> Self {
        Address(s.to_string())
    }
}

impl From<String> for Address {
    fn from(s: String) -> Self {
        Address(s)
    }
}

/// A transfer of value between two addresses.
///
/// Transactions are immutable once constructed: they are created by a
/// caller (or by the ledger itself for mining rewards), held in the
/// pending pool, and then owned by the block that includes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's address. `None` denotes a system-minted reward.
    pub from: Option<Address>,

    /// Recipient's address.
    pub to: Address,

    /// Amount being transferred.
    pub amount: f64,
}

impl Transaction {
    /// Creates a new transaction from `from` to `to`.
    ///
    /// No balance or signature validation is performed; the ledger
    /// accepts any well-formed transaction into its pending pool.
    pub fn new(from: Address, to: Address, amount: f64) -> Self {
        Transaction {
            from: Some(from),
            to,
            amount,
        }
    }

    /// Creates a system-minted reward transaction with no sender.
    pub fn reward(to: Address, amount: f64) -> Self {
        Transaction {
            from: None,
            to,
            amount,
        }
    }

    /// Checks whether this transaction is a system-minted reward.
    pub fn is_reward(&self) -> bool {
        self.from.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let tx = Transaction::new(Address::from("alice"), Address::from("bob"), 12.5);

        assert_eq!(tx.from, Some(Address::from("alice")));
        assert_eq!(tx.to, Address::from("bob"));
        assert_eq!(tx.amount, 12.5);
        assert!(!tx.is_reward());
    }

    #[test]
    fn test_reward_transaction() {
        let tx = Transaction::reward(Address::from("miner"), 50.0);

        assert!(tx.from.is_none());
        assert_eq!(tx.to, Address::from("miner"));
        assert_eq!(tx.amount, 50.0);
        assert!(tx.is_reward());
    }

    #[test]
    fn test_transaction_serialization() {
        let tx = Transaction::new(Address::from("alice"), Address::from("bob"), 10.0);
        let json = serde_json::to_string(&tx).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();

        assert_eq!(tx, deserialized);
    }
}
