#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

pub mod schedule;

pub const MAX_PAGE_SIZE: u64 = 100;
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_TITLE_LEN: usize = 128;
pub const MAX_CATEGORY_LEN: usize = 64;
pub const MAX_DESCRIPTION_LEN: usize = 512;
pub const MAX_COMMENT_LEN: usize = 512;
pub const MAX_REASON_LEN: usize = 512;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const MAX_SERVICE_DURATION_HOURS: u8 = 24;

pub const TOKEN_DECIMALS: u32 = 18;
/// Raw units of one whole TIME token (10^18), the price of one traded hour.
pub const TOKEN_PER_HOUR: u64 = 1_000_000_000_000_000_000;
/// Whole TIME tokens granted once to every newly registered user.
pub const NEW_USER_GRANT_HOURS: u64 = 24;

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseStatus {
    Booked,
    Approved,
    Withdrawn,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start_hour: u8,
    pub end_hour: u8,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct Profile<M: ManagedTypeApi> {
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub rating_sum: u64,
    pub rating_count: u64,
    pub joined_at: u64,
}

/// Read shape of a profile. `available_days` and `time_slots` are
/// parallel-indexed and always the same length: one entry per day/slot pair.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ProfileView<M: ManagedTypeApi> {
    pub is_registered: bool,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub rating_sum: u64,
    pub rating_count: u64,
    pub available_days: ManagedVec<M, u8>,
    pub time_slots: ManagedVec<M, TimeSlot>,
    pub joined_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone)]
pub struct Service<M: ManagedTypeApi> {
    pub id: u64,
    pub seller: ManagedAddress<M>,
    pub title: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub category: ManagedBuffer<M>,
    pub duration_hours: u8,
    pub is_active: bool,
    pub created_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone)]
pub struct Purchase<M: ManagedTypeApi> {
    pub service_id: u64,
    pub buyer: ManagedAddress<M>,
    pub scheduled_time: u64,
    pub end_time: u64,
    pub amount: BigUint<M>,
    pub status: PurchaseStatus,
    pub created_at: u64,
    pub approved_at: u64,
    pub withdrawn_at: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone)]
pub struct Comment<M: ManagedTypeApi> {
    pub service_id: u64,
    pub author: ManagedAddress<M>,
    pub content: ManagedBuffer<M>,
    pub rating: u8,
    pub timestamp: u64,
}

/// A confirmed booking interval on a seller's calendar, half-open
/// `[start_time, end_time)`.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct BookedSlot {
    pub service_id: u64,
    pub start_time: u64,
    pub end_time: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ServiceDetails<M: ManagedTypeApi> {
    pub service: Service<M>,
    pub seller_name: ManagedBuffer<M>,
    pub seller_description: ManagedBuffer<M>,
    pub seller_rating_sum: u64,
    pub seller_rating_count: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct PurchasedService<M: ManagedTypeApi> {
    pub service: Service<M>,
    pub purchase: Purchase<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct ServicesPage<M: ManagedTypeApi> {
    pub items: ManagedVec<M, Service<M>>,
    pub total: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketStats {
    pub total_users: u64,
    pub total_services: u64,
    pub active_services: u64,
    pub total_purchases: u64,
    pub approved_purchases: u64,
    pub withdrawn_purchases: u64,
    pub total_comments: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone)]
pub struct MarketConfig<M: ManagedTypeApi> {
    pub owner: ManagedAddress<M>,
    pub time_token: ManagedAddress<M>,
    pub paused: bool,
}
