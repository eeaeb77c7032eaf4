use log::info;

use powledger::{Address, Blockchain, Transaction};

// Demo driver: one user transaction, then a handful of mining rounds showing
// the one-round reward settlement lag.
fn main() {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut ledger = Blockchain::new();
    let miner = Address::from("miner-address");

    ledger.create_transaction(Transaction::new(
        Address::from("address1"),
        Address::from("address2"),
        50.0,
    ));

    for round in 1..=5 {
        info!("Mining attempt: {}", round);
        ledger.mine_pending_transactions(&miner);
        info!(
            "Balance of {} is {}",
            miner,
            ledger.get_balance_of_address(&miner)
        );
    }

    info!("Chain valid: {}", ledger.is_valid());
}
