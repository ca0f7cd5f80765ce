#![allow(dead_code)]

use anchor_lang::prelude::AccountInfo;
use anchor_lang::solana_program::entrypoint::ProgramResult;
use anchor_lang::AccountSerialize;
use counter_app::state::Counter;
use solana_program_test::{processor, BanksClientError, ProgramTest, ProgramTestContext};
use solana_sdk::account::Account;
use solana_sdk::instruction::{Instruction, InstructionError};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::rent::Rent;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::{Transaction, TransactionError};

pub const SOL: u64 = 1_000_000_000;

fn process_instruction(program_id: &Pubkey, accounts: &[AccountInfo], data: &[u8]) -> ProgramResult {
    // Anchor's entry ties the slice and its AccountInfos to one lifetime
    let accounts = Box::leak(Box::new(accounts.to_vec()));
    counter_app::entry(program_id, accounts, data)
}

pub fn program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "counter_app",
        counter_app::ID,
        processor!(process_instruction),
    );
    program_test.prefer_bpf(false);
    program_test
}

pub fn counter_pda(owner: &Pubkey) -> Pubkey {
    counter_app::client::counter_address(owner).expect("counter address must derive")
}

/// System-owned wallet holding `lamports`
pub fn wallet_account(lamports: u64) -> Account {
    Account {
        lamports,
        data: Vec::new(),
        owner: solana_sdk::system_program::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Rent-exempt program-owned account already holding `counter`
pub fn counter_account(counter: &Counter) -> Account {
    let mut data = Vec::with_capacity(Counter::LEN);
    counter.try_serialize(&mut data).expect("counter must serialize");
    Account {
        lamports: Rent::default().minimum_balance(Counter::LEN),
        data,
        owner: counter_app::ID,
        executable: false,
        rent_epoch: 0,
    }
}

/// Sends `ix` paid by the context payer, co-signed by `signers`
pub async fn send(
    context: &mut ProgramTestContext,
    ix: Instruction,
    signers: &[&Keypair],
) -> Result<(), BanksClientError> {
    // Fresh blockhash so repeating an identical instruction is a new transaction
    let blockhash = context
        .get_new_latest_blockhash()
        .await
        .expect("blockhash must be available");

    let tx = {
        let mut all_signers: Vec<&Keypair> = vec![&context.payer];
        all_signers.extend_from_slice(signers);
        Transaction::new_signed_with_payer(
            &[ix],
            Some(&context.payer.pubkey()),
            &all_signers[..],
            blockhash,
        )
    };
    context.banks_client.process_transaction(tx).await
}

pub async fn fetch_counter(context: &mut ProgramTestContext, address: Pubkey) -> Option<Counter> {
    let account = context
        .banks_client
        .get_account(address)
        .await
        .expect("account lookup must succeed")?;
    Counter::from_account_data(&account.data).expect("counter data must decode")
}

pub async fn count_of(context: &mut ProgramTestContext, address: Pubkey) -> i64 {
    fetch_counter(context, address)
        .await
        .expect("counter must exist")
        .count
}

pub async fn lamports_of(context: &mut ProgramTestContext, address: Pubkey) -> u64 {
    context
        .banks_client
        .get_balance(address)
        .await
        .expect("balance lookup must succeed")
}

/// Asserts the single-instruction transaction failed with program error `code`
pub fn assert_program_error(result: Result<(), BanksClientError>, code: impl Into<u32>) {
    let err = result.expect_err("transaction must fail").unwrap();
    assert_eq!(
        err,
        TransactionError::InstructionError(0, InstructionError::Custom(code.into()))
    );
}
