#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

use shared_types::{NEW_USER_GRANT_HOURS, TOKEN_DECIMALS, TOKEN_PER_HOUR};

pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_INSUFFICIENT_FUNDS: &str = "ERR_INSUFFICIENT_FUNDS";
pub const ERR_INSUFFICIENT_ALLOWANCE: &str = "ERR_INSUFFICIENT_ALLOWANCE";
pub const ERR_ALREADY_LINKED: &str = "ERR_ALREADY_LINKED";
pub const ERR_NOT_LINKED: &str = "ERR_NOT_LINKED";

static TOKEN_NAME: &[u8] = b"TIME";
static TOKEN_TICKER: &[u8] = b"TIME";

/// Fungible ledger for the TIME token. One whole token represents one hour
/// of traded time. Minting is reserved to the linked marketplace contract,
/// which grants a fixed bootstrap amount to each newly registered user.
#[multiversx_sc::contract]
pub trait TimeToken {
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owner().set(caller);
        self.total_supply().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// One-time link to the marketplace contract that is allowed to mint.
    #[endpoint(setChronoTradeContract)]
    fn set_chrono_trade_contract(&self, marketplace: ManagedAddress) {
        self.require_owner();
        require!(!marketplace.is_zero(), ERR_INVALID_AMOUNT);
        require!(self.marketplace().is_empty(), ERR_ALREADY_LINKED);

        self.marketplace().set(marketplace.clone());
        self.marketplace_linked_event(&marketplace, self.blockchain().get_block_timestamp());
    }

    #[endpoint(mintForNewUser)]
    fn mint_for_new_user(&self, to: ManagedAddress) {
        require!(!self.marketplace().is_empty(), ERR_NOT_LINKED);
        let caller = self.blockchain().get_caller();
        require!(caller == self.marketplace().get(), ERR_UNAUTHORIZED);

        let grant = self.new_user_grant();
        self.balance(&to).update(|v| *v += &grant);
        self.total_supply().update(|v| *v += &grant);

        self.minted_event(&to, grant, self.blockchain().get_block_timestamp());
    }

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        let caller = self.blockchain().get_caller();
        self.move_balance(&caller, &to, &amount);
        self.transfer_event(&caller, &to, amount);
    }

    #[endpoint(approve)]
    fn approve(&self, spender: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        self.allowance_mapper(&caller, &spender).set(amount.clone());
        self.approval_event(&caller, &spender, amount);
    }

    #[endpoint(transferFrom)]
    fn transfer_from(&self, from: ManagedAddress, to: ManagedAddress, amount: BigUint) {
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        let caller = self.blockchain().get_caller();

        let allowed = self.allowance_mapper(&from, &caller).get();
        require!(allowed >= amount, ERR_INSUFFICIENT_ALLOWANCE);

        self.allowance_mapper(&from, &caller).set(&allowed - &amount);
        self.move_balance(&from, &to, &amount);
        self.transfer_event(&from, &to, amount);
    }

    #[view(balanceOf)]
    fn balance_of(&self, address: ManagedAddress) -> BigUint {
        self.balance(&address).get()
    }

    #[view(allowance)]
    fn allowance(&self, owner: ManagedAddress, spender: ManagedAddress) -> BigUint {
        self.allowance_mapper(&owner, &spender).get()
    }

    #[view(totalSupply)]
    fn get_total_supply(&self) -> BigUint {
        self.total_supply().get()
    }

    #[view(getChronoTradeContract)]
    fn get_chrono_trade_contract(&self) -> OptionalValue<ManagedAddress> {
        if self.marketplace().is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.marketplace().get())
        }
    }

    #[view(getName)]
    fn get_name(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_NAME)
    }

    #[view(getTicker)]
    fn get_ticker(&self) -> ManagedBuffer {
        ManagedBuffer::from(TOKEN_TICKER)
    }

    #[view(getDecimals)]
    fn get_decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn move_balance(&self, from: &ManagedAddress, to: &ManagedAddress, amount: &BigUint) {
        let from_balance = self.balance(from).get();
        require!(from_balance >= *amount, ERR_INSUFFICIENT_FUNDS);

        self.balance(from).set(&from_balance - amount);
        self.balance(to).update(|v| *v += amount);
    }

    fn new_user_grant(&self) -> BigUint {
        BigUint::from(TOKEN_PER_HOUR) * NEW_USER_GRANT_HOURS
    }

    #[event("transfer")]
    fn transfer_event(
        &self,
        #[indexed] from: &ManagedAddress,
        #[indexed] to: &ManagedAddress,
        amount: BigUint,
    );

    #[event("approval")]
    fn approval_event(
        &self,
        #[indexed] owner: &ManagedAddress,
        #[indexed] spender: &ManagedAddress,
        amount: BigUint,
    );

    #[event("minted")]
    fn minted_event(
        &self,
        #[indexed] to: &ManagedAddress,
        #[indexed] amount: BigUint,
        timestamp: u64,
    );

    #[event("marketplaceLinked")]
    fn marketplace_linked_event(&self, #[indexed] marketplace: &ManagedAddress, timestamp: u64);

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("marketplace")]
    fn marketplace(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("totalSupply")]
    fn total_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balance")]
    fn balance(&self, address: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("allowance")]
    fn allowance_mapper(
        &self,
        owner: &ManagedAddress,
        spender: &ManagedAddress,
    ) -> SingleValueMapper<BigUint>;
}
