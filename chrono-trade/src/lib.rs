#![no_std]

multiversx_sc::imports!();
multiversx_sc::derive_imports!();

mod time_token_proxy;

use shared_types::{
    schedule, BookedSlot, Comment, MarketConfig, MarketStats, Profile, ProfileView, Purchase,
    PurchaseStatus, PurchasedService, Service, ServiceDetails, ServicesPage, TimeSlot,
    MAX_CATEGORY_LEN, MAX_COMMENT_LEN, MAX_DESCRIPTION_LEN, MAX_NAME_LEN, MAX_PAGE_SIZE,
    MAX_RATING, MAX_REASON_LEN, MAX_SERVICE_DURATION_HOURS, MAX_TITLE_LEN, MIN_RATING,
    NEW_USER_GRANT_HOURS, TOKEN_PER_HOUR,
};
use time_token_proxy::TimeTokenProxy;

pub const ERR_PAUSED: &str = "ERR_PAUSED";
pub const ERR_UNAUTHORIZED: &str = "ERR_UNAUTHORIZED";
pub const ERR_INVALID_STATE: &str = "ERR_INVALID_STATE";
pub const ERR_INVALID_AMOUNT: &str = "ERR_INVALID_AMOUNT";
pub const ERR_ALREADY_REGISTERED: &str = "ERR_ALREADY_REGISTERED";
pub const ERR_NOT_REGISTERED: &str = "ERR_NOT_REGISTERED";
pub const ERR_INVALID_TIME_SLOT: &str = "ERR_INVALID_TIME_SLOT";
pub const ERR_NO_AVAILABILITY: &str = "ERR_NO_AVAILABILITY";
pub const ERR_SERVICE_INACTIVE: &str = "ERR_SERVICE_INACTIVE";
pub const ERR_SELF_PURCHASE: &str = "ERR_SELF_PURCHASE";
pub const ERR_PAST_SCHEDULE: &str = "ERR_PAST_SCHEDULE";
pub const ERR_SLOT_INVALID: &str = "ERR_SLOT_INVALID";
pub const ERR_SLOT_CONFLICT: &str = "ERR_SLOT_CONFLICT";
pub const ERR_ALREADY_BOOKED: &str = "ERR_ALREADY_BOOKED";
pub const ERR_INSUFFICIENT_FUNDS: &str = "ERR_INSUFFICIENT_FUNDS";
pub const ERR_TIMEOUT_NOT_REACHED: &str = "ERR_TIMEOUT_NOT_REACHED";
pub const ERR_SELF_COMMENT: &str = "ERR_SELF_COMMENT";
pub const ERR_DUPLICATE_COMMENT: &str = "ERR_DUPLICATE_COMMENT";
pub const ERR_INVALID_RATING: &str = "ERR_INVALID_RATING";

/// Marketplace for trading hours of work priced in TIME tokens. Sellers
/// declare recurring weekly availability, list fixed-duration services, and
/// collect escrowed payment after the booked window has elapsed and they
/// approve completion. The token ledger lives in a companion contract and is
/// reached through a synchronous-call proxy.
#[multiversx_sc::contract]
pub trait ChronoTrade {
    #[init]
    fn init(&self, time_token: ManagedAddress) {
        require!(!time_token.is_zero(), ERR_INVALID_AMOUNT);

        let caller = self.blockchain().get_caller();
        self.owner().set(caller);
        self.paused().set(false);
        self.time_token().set(time_token);

        self.user_count().set(0u64);
        self.service_count().set(0u64);
        self.active_service_count().set(0u64);
        self.purchase_count().set(0u64);
        self.approved_purchase_count().set(0u64);
        self.withdrawn_purchase_count().set(0u64);
        self.comment_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(registerUser)]
    fn register_user(&self, name: ManagedBuffer, description: ManagedBuffer) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(self.profiles(&caller).is_empty(), ERR_ALREADY_REGISTERED);
        require!(!name.is_empty(), ERR_INVALID_AMOUNT);
        require!(name.len() <= MAX_NAME_LEN, ERR_INVALID_AMOUNT);
        require!(description.len() <= MAX_DESCRIPTION_LEN, ERR_INVALID_AMOUNT);

        let now = self.blockchain().get_block_timestamp();
        self.profiles(&caller).set(Profile {
            name,
            description,
            rating_sum: 0,
            rating_count: 0,
            joined_at: now,
        });
        self.user_count().update(|v| *v += 1);

        self.tx()
            .to(self.time_token().get())
            .typed(TimeTokenProxy)
            .mint_for_new_user(&caller)
            .sync_call();

        self.user_registered_event(&caller, NEW_USER_GRANT_HOURS, now);
    }

    /// Replaces the caller's whole weekly availability. Every declared day
    /// carries the declared slot list; the day check and the hour check stay
    /// independent during booking validation.
    #[endpoint(updateTimeSlots)]
    fn update_time_slots(&self, days: ManagedVec<u8>, slots: ManagedVec<TimeSlot>) {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(!self.profiles(&caller).is_empty(), ERR_NOT_REGISTERED);
        require!(days.is_empty() == slots.is_empty(), ERR_INVALID_TIME_SLOT);

        for day in days.iter() {
            require!(
                (day as u64) < schedule::DAYS_PER_WEEK,
                ERR_INVALID_TIME_SLOT
            );
        }
        for slot in slots.iter() {
            require!(
                schedule::valid_window(slot.start_hour, slot.end_hour),
                ERR_INVALID_TIME_SLOT
            );
        }

        for day in 0..schedule::DAYS_PER_WEEK as u8 {
            self.weekly_slots(&caller, day).clear();
        }
        for day in days.iter() {
            if !self.weekly_slots(&caller, day).is_empty() {
                continue;
            }
            for slot in slots.iter() {
                self.weekly_slots(&caller, day).push(&slot);
            }
        }

        let now = self.blockchain().get_block_timestamp();
        self.time_slots_updated_event(&caller, days.len() as u64, slots.len() as u64, now);
    }

    #[endpoint(createService)]
    fn create_service(
        &self,
        title: ManagedBuffer,
        description: ManagedBuffer,
        category: ManagedBuffer,
        duration_hours: u8,
    ) -> u64 {
        self.require_not_paused();
        let caller = self.blockchain().get_caller();
        require!(!title.is_empty(), ERR_INVALID_AMOUNT);
        require!(title.len() <= MAX_TITLE_LEN, ERR_INVALID_AMOUNT);
        require!(description.len() <= MAX_DESCRIPTION_LEN, ERR_INVALID_AMOUNT);
        require!(category.len() <= MAX_CATEGORY_LEN, ERR_INVALID_AMOUNT);
        require!(
            duration_hours >= 1 && duration_hours <= MAX_SERVICE_DURATION_HOURS,
            ERR_INVALID_AMOUNT
        );
        require!(self.has_availability(&caller), ERR_NO_AVAILABILITY);

        let service_id = self.service_count().get() + 1;
        self.service_count().set(service_id);

        let now = self.blockchain().get_block_timestamp();
        let service = Service {
            id: service_id,
            seller: caller.clone(),
            title,
            description,
            category,
            duration_hours,
            is_active: true,
            created_at: now,
        };

        self.services(service_id).set(service);
        self.service_ids_by_seller(&caller).push(&service_id);
        self.active_service_count().update(|v| *v += 1);

        self.service_created_event(service_id, &caller, duration_hours, now);
        service_id
    }

    #[endpoint(cancelService)]
    fn cancel_service(&self, service_id: u64, reason: ManagedBuffer) {
        self.require_not_paused();
        let mut service = self.require_service(service_id);
        let caller = self.blockchain().get_caller();
        require!(caller == service.seller, ERR_UNAUTHORIZED);
        require!(service.is_active, ERR_SERVICE_INACTIVE);
        require!(reason.len() <= MAX_REASON_LEN, ERR_INVALID_AMOUNT);

        // a booked, unsettled purchase blocks cancellation
        if !self.purchases(service_id).is_empty() {
            let purchase = self.purchases(service_id).get();
            require!(purchase.status != PurchaseStatus::Booked, ERR_INVALID_STATE);
        }

        service.is_active = false;
        self.services(service_id).set(service);
        self.active_service_count().update(|v| {
            if *v > 0 {
                *v -= 1;
            }
        });

        let now = self.blockchain().get_block_timestamp();
        self.service_cancelled_event(service_id, &caller, &reason, now);
    }

    #[endpoint(buyService)]
    fn buy_service(&self, service_id: u64, scheduled_time: u64) {
        self.require_not_paused();
        let service = self.require_service(service_id);
        require!(service.is_active, ERR_SERVICE_INACTIVE);

        let caller = self.blockchain().get_caller();
        require!(caller != service.seller, ERR_SELF_PURCHASE);

        let now = self.blockchain().get_block_timestamp();
        require!(scheduled_time > now, ERR_PAST_SCHEDULE);
        require!(
            self.fits_weekly_slot(&service.seller, scheduled_time, service.duration_hours),
            ERR_SLOT_INVALID
        );

        let end_time =
            scheduled_time + service.duration_hours as u64 * schedule::SECONDS_PER_HOUR;
        require!(
            !self.has_booking_conflict(&service.seller, scheduled_time, end_time),
            ERR_SLOT_CONFLICT
        );
        require!(self.purchases(service_id).is_empty(), ERR_ALREADY_BOOKED);

        let total_price = self.service_price(service.duration_hours);
        let own_address = self.blockchain().get_sc_address();
        let token = self.time_token().get();

        let balance: BigUint = self
            .tx()
            .to(token.clone())
            .typed(TimeTokenProxy)
            .balance_of(&caller)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(balance >= total_price, ERR_INSUFFICIENT_FUNDS);

        let allowed: BigUint = self
            .tx()
            .to(token.clone())
            .typed(TimeTokenProxy)
            .allowance(&caller, &own_address)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(allowed >= total_price, ERR_INSUFFICIENT_FUNDS);

        self.tx()
            .to(token)
            .typed(TimeTokenProxy)
            .transfer_from(&caller, &own_address, &total_price)
            .sync_call();

        self.purchases(service_id).set(Purchase {
            service_id,
            buyer: caller.clone(),
            scheduled_time,
            end_time,
            amount: total_price.clone(),
            status: PurchaseStatus::Booked,
            created_at: now,
            approved_at: 0,
            withdrawn_at: 0,
        });
        self.booked_slots(&service.seller).push(&BookedSlot {
            service_id,
            start_time: scheduled_time,
            end_time,
        });
        self.purchased_service_ids(&caller).push(&service_id);
        self.purchase_count().update(|v| *v += 1);

        self.service_purchased_event(
            service_id,
            &caller,
            &service.seller,
            scheduled_time,
            total_price,
            now,
        );
    }

    #[endpoint(approveCompletion)]
    fn approve_completion(&self, service_id: u64) {
        self.require_not_paused();
        let service = self.require_service(service_id);
        let caller = self.blockchain().get_caller();
        require!(caller == service.seller, ERR_UNAUTHORIZED);

        let mut purchase = self.require_purchase(service_id);
        require!(purchase.status == PurchaseStatus::Booked, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= purchase.end_time, ERR_TIMEOUT_NOT_REACHED);

        purchase.status = PurchaseStatus::Approved;
        purchase.approved_at = now;
        self.purchases(service_id).set(purchase.clone());
        self.approved_purchase_count().update(|v| *v += 1);

        self.completion_approved_event(service_id, &caller, &purchase.buyer, now);
    }

    #[endpoint(withdrawSeller)]
    fn withdraw_seller(&self, service_id: u64) {
        self.require_not_paused();
        let service = self.require_service(service_id);
        let caller = self.blockchain().get_caller();
        require!(caller == service.seller, ERR_UNAUTHORIZED);

        let mut purchase = self.require_purchase(service_id);
        require!(purchase.status == PurchaseStatus::Approved, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        let amount = purchase.amount.clone();

        // effects before the external token call
        purchase.status = PurchaseStatus::Withdrawn;
        purchase.withdrawn_at = now;
        self.purchases(service_id).set(purchase);
        self.withdrawn_purchase_count().update(|v| *v += 1);

        self.tx()
            .to(self.time_token().get())
            .typed(TimeTokenProxy)
            .transfer(&caller, &amount)
            .sync_call();

        self.seller_withdrawn_event(service_id, &caller, amount, now);
    }

    #[endpoint(createComment)]
    fn create_comment(&self, service_id: u64, content: ManagedBuffer, rating: u8) {
        self.require_not_paused();
        let service = self.require_service(service_id);
        let caller = self.blockchain().get_caller();
        require!(caller != service.seller, ERR_SELF_COMMENT);
        require!(
            rating >= MIN_RATING && rating <= MAX_RATING,
            ERR_INVALID_RATING
        );
        require!(!content.is_empty(), ERR_INVALID_AMOUNT);
        require!(content.len() <= MAX_COMMENT_LEN, ERR_INVALID_AMOUNT);
        require!(
            !self.has_commented(service_id, &caller).get(),
            ERR_DUPLICATE_COMMENT
        );

        // Only the buyer of an approved purchase may rate the service.
        require!(!self.purchases(service_id).is_empty(), ERR_INVALID_STATE);
        let purchase = self.purchases(service_id).get();
        require!(purchase.buyer == caller, ERR_INVALID_STATE);
        require!(purchase.status != PurchaseStatus::Booked, ERR_INVALID_STATE);

        let now = self.blockchain().get_block_timestamp();
        self.comments(service_id).push(&Comment {
            service_id,
            author: caller.clone(),
            content,
            rating,
            timestamp: now,
        });
        self.has_commented(service_id, &caller).set(true);
        self.comment_count().update(|v| *v += 1);

        let mut seller_profile = self.profiles(&service.seller).get();
        seller_profile.rating_sum += rating as u64;
        seller_profile.rating_count += 1;
        self.profiles(&service.seller).set(seller_profile);

        self.comment_created_event(service_id, &caller, rating, now);
    }

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        self.require_owner();
        self.paused().set(paused);
    }

    #[endpoint(setOwner)]
    fn set_owner(&self, new_owner: ManagedAddress) {
        self.require_owner();
        require!(!new_owner.is_zero(), ERR_INVALID_AMOUNT);
        self.owner().set(new_owner);
    }

    #[view(getProfile)]
    fn get_profile(&self, address: ManagedAddress) -> ProfileView<Self::Api> {
        if self.profiles(&address).is_empty() {
            return ProfileView {
                is_registered: false,
                name: ManagedBuffer::new(),
                description: ManagedBuffer::new(),
                rating_sum: 0,
                rating_count: 0,
                available_days: ManagedVec::new(),
                time_slots: ManagedVec::new(),
                joined_at: 0,
            };
        }

        let profile = self.profiles(&address).get();
        let mut available_days = ManagedVec::new();
        let mut time_slots = ManagedVec::new();
        for day in 0..schedule::DAYS_PER_WEEK as u8 {
            for slot in self.weekly_slots(&address, day).iter() {
                available_days.push(day);
                time_slots.push(slot);
            }
        }

        ProfileView {
            is_registered: true,
            name: profile.name,
            description: profile.description,
            rating_sum: profile.rating_sum,
            rating_count: profile.rating_count,
            available_days,
            time_slots,
            joined_at: profile.joined_at,
        }
    }

    #[view(isUserRegistered)]
    fn is_user_registered(&self, address: ManagedAddress) -> bool {
        !self.profiles(&address).is_empty()
    }

    #[view(getService)]
    fn get_service(&self, service_id: u64) -> OptionalValue<ServiceDetails<Self::Api>> {
        if self.services(service_id).is_empty() {
            return OptionalValue::None;
        }
        let service = self.services(service_id).get();
        let seller_profile = self.profiles(&service.seller).get();

        OptionalValue::Some(ServiceDetails {
            service,
            seller_name: seller_profile.name,
            seller_description: seller_profile.description,
            seller_rating_sum: seller_profile.rating_sum,
            seller_rating_count: seller_profile.rating_count,
        })
    }

    #[view(getAllServices)]
    fn get_all_services(&self) -> MultiValueEncoded<Service<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        let count = self.service_count().get();
        let mut service_id = 1;
        while service_id <= count {
            if !self.services(service_id).is_empty() {
                out.push(self.services(service_id).get());
            }
            service_id += 1;
        }
        out
    }

    #[view(getServicesPaginated)]
    fn get_services_paginated(&self, from: u64, size: u64) -> ServicesPage<Self::Api> {
        let total = self.service_count().get();
        let mut items = ManagedVec::new();

        let effective_size = core::cmp::min(size, MAX_PAGE_SIZE);
        let mut idx = from + 1;
        let mut emitted = 0;
        while idx <= total && emitted < effective_size {
            if !self.services(idx).is_empty() {
                items.push(self.services(idx).get());
            }
            idx += 1;
            emitted += 1;
        }

        ServicesPage { items, total }
    }

    #[view(getProvidedServices)]
    fn get_provided_services(&self, address: ManagedAddress) -> MultiValueEncoded<Service<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        for service_id in self.service_ids_by_seller(&address).iter() {
            if !self.services(service_id).is_empty() {
                out.push(self.services(service_id).get());
            }
        }
        out
    }

    #[view(getReceivedServices)]
    fn get_received_services(
        &self,
        address: ManagedAddress,
    ) -> MultiValue2<ManagedVec<Service<Self::Api>>, ManagedVec<Purchase<Self::Api>>> {
        require!(!self.profiles(&address).is_empty(), ERR_NOT_REGISTERED);

        let mut services = ManagedVec::new();
        let mut purchases = ManagedVec::new();
        for service_id in self.purchased_service_ids(&address).iter() {
            if self.services(service_id).is_empty() || self.purchases(service_id).is_empty() {
                continue;
            }
            services.push(self.services(service_id).get());
            purchases.push(self.purchases(service_id).get());
        }

        (services, purchases).into()
    }

    #[view(getPurchasedService)]
    fn get_purchased_service(&self, service_id: u64) -> OptionalValue<PurchasedService<Self::Api>> {
        if self.services(service_id).is_empty() || self.purchases(service_id).is_empty() {
            return OptionalValue::None;
        }
        OptionalValue::Some(PurchasedService {
            service: self.services(service_id).get(),
            purchase: self.purchases(service_id).get(),
        })
    }

    #[view(getComments)]
    fn get_comments(&self, service_id: u64) -> MultiValueEncoded<Comment<Self::Api>> {
        let mut out = MultiValueEncoded::new();
        for comment in self.comments(service_id).iter() {
            out.push(comment);
        }
        out
    }

    #[view(isDayAvailable)]
    fn is_day_available(&self, seller: ManagedAddress, day: u8) -> bool {
        if (day as u64) >= schedule::DAYS_PER_WEEK {
            return false;
        }
        !self.weekly_slots(&seller, day).is_empty()
    }

    #[view(getTimeSlot)]
    fn get_time_slot(&self, seller: ManagedAddress, start_hour: u8) -> OptionalValue<TimeSlot> {
        for day in 0..schedule::DAYS_PER_WEEK as u8 {
            for slot in self.weekly_slots(&seller, day).iter() {
                if slot.start_hour == start_hour {
                    return OptionalValue::Some(slot);
                }
            }
        }
        OptionalValue::None
    }

    #[view(getTimeSlotStartHours)]
    fn get_time_slot_start_hours(&self, seller: ManagedAddress) -> MultiValueEncoded<u8> {
        let mut out = MultiValueEncoded::new();
        for day in 0..schedule::DAYS_PER_WEEK as u8 {
            let slots = self.weekly_slots(&seller, day);
            if slots.is_empty() {
                continue;
            }
            // every declared day carries the same slot list
            for slot in slots.iter() {
                out.push(slot.start_hour);
            }
            break;
        }
        out
    }

    /// Booking-conflict check only; weekly-hours compliance is validated
    /// separately during purchase.
    #[view(isTimeSlotAvailable)]
    fn is_time_slot_available(&self, seller: ManagedAddress, start: u64, end: u64) -> bool {
        !self.has_booking_conflict(&seller, start, end)
    }

    #[view(getBookedTimeSlots)]
    fn get_booked_time_slots(
        &self,
        seller: ManagedAddress,
        from: u64,
        to: u64,
    ) -> MultiValueEncoded<u64> {
        let mut out = MultiValueEncoded::new();
        for booked in self.booked_slots(&seller).iter() {
            if booked.start_time >= from && booked.start_time < to {
                out.push(booked.start_time);
            }
        }
        out
    }

    #[view(getDayOfWeek)]
    fn get_day_of_week(&self, timestamp: u64) -> u8 {
        schedule::day_of_week(timestamp)
    }

    #[view(getHour)]
    fn get_hour(&self, timestamp: u64) -> u8 {
        schedule::hour_of(timestamp)
    }

    #[view(getMarketStats)]
    fn get_market_stats(&self) -> MarketStats {
        MarketStats {
            total_users: self.user_count().get(),
            total_services: self.service_count().get(),
            active_services: self.active_service_count().get(),
            total_purchases: self.purchase_count().get(),
            approved_purchases: self.approved_purchase_count().get(),
            withdrawn_purchases: self.withdrawn_purchase_count().get(),
            total_comments: self.comment_count().get(),
        }
    }

    #[view(getConfig)]
    fn get_config(&self) -> MarketConfig<Self::Api> {
        MarketConfig {
            owner: self.owner().get(),
            time_token: self.time_token().get(),
            paused: self.paused().get(),
        }
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.owner().get(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    fn require_service(&self, service_id: u64) -> Service<Self::Api> {
        require!(!self.services(service_id).is_empty(), ERR_INVALID_STATE);
        self.services(service_id).get()
    }

    fn require_purchase(&self, service_id: u64) -> Purchase<Self::Api> {
        require!(!self.purchases(service_id).is_empty(), ERR_INVALID_STATE);
        self.purchases(service_id).get()
    }

    fn has_availability(&self, address: &ManagedAddress) -> bool {
        for day in 0..schedule::DAYS_PER_WEEK as u8 {
            if !self.weekly_slots(address, day).is_empty() {
                return true;
            }
        }
        false
    }

    fn fits_weekly_slot(&self, seller: &ManagedAddress, timestamp: u64, duration_hours: u8) -> bool {
        let day = schedule::day_of_week(timestamp);
        let hour = schedule::hour_of(timestamp);
        for slot in self.weekly_slots(seller, day).iter() {
            if schedule::fits_window(slot.start_hour, slot.end_hour, hour, duration_hours) {
                return true;
            }
        }
        false
    }

    fn has_booking_conflict(&self, seller: &ManagedAddress, start: u64, end: u64) -> bool {
        for booked in self.booked_slots(seller).iter() {
            if schedule::intervals_overlap(start, end, booked.start_time, booked.end_time) {
                return true;
            }
        }
        false
    }

    fn service_price(&self, duration_hours: u8) -> BigUint {
        BigUint::from(TOKEN_PER_HOUR) * duration_hours as u64
    }

    #[event("userRegistered")]
    fn user_registered_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] grant_hours: u64,
        timestamp: u64,
    );

    #[event("timeSlotsUpdated")]
    fn time_slots_updated_event(
        &self,
        #[indexed] user: &ManagedAddress,
        #[indexed] day_count: u64,
        #[indexed] slot_count: u64,
        timestamp: u64,
    );

    #[event("serviceCreated")]
    fn service_created_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] seller: &ManagedAddress,
        #[indexed] duration_hours: u8,
        timestamp: u64,
    );

    #[event("serviceCancelled")]
    fn service_cancelled_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] seller: &ManagedAddress,
        #[indexed] reason: &ManagedBuffer,
        timestamp: u64,
    );

    #[event("servicePurchased")]
    fn service_purchased_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] buyer: &ManagedAddress,
        #[indexed] seller: &ManagedAddress,
        #[indexed] scheduled_time: u64,
        #[indexed] amount: BigUint,
        timestamp: u64,
    );

    #[event("completionApproved")]
    fn completion_approved_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] seller: &ManagedAddress,
        #[indexed] buyer: &ManagedAddress,
        timestamp: u64,
    );

    #[event("sellerWithdrawn")]
    fn seller_withdrawn_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] seller: &ManagedAddress,
        #[indexed] amount: BigUint,
        timestamp: u64,
    );

    #[event("commentCreated")]
    fn comment_created_event(
        &self,
        #[indexed] service_id: u64,
        #[indexed] author: &ManagedAddress,
        #[indexed] rating: u8,
        timestamp: u64,
    );

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("timeToken")]
    fn time_token(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("userCount")]
    fn user_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("profiles")]
    fn profiles(&self, address: &ManagedAddress) -> SingleValueMapper<Profile<Self::Api>>;

    #[storage_mapper("weeklySlots")]
    fn weekly_slots(&self, address: &ManagedAddress, day: u8) -> VecMapper<TimeSlot>;

    #[storage_mapper("serviceCount")]
    fn service_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("activeServiceCount")]
    fn active_service_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("services")]
    fn services(&self, service_id: u64) -> SingleValueMapper<Service<Self::Api>>;

    #[storage_mapper("serviceIdsBySeller")]
    fn service_ids_by_seller(&self, seller: &ManagedAddress) -> VecMapper<u64>;

    #[storage_mapper("purchases")]
    fn purchases(&self, service_id: u64) -> SingleValueMapper<Purchase<Self::Api>>;

    #[storage_mapper("purchasedServiceIds")]
    fn purchased_service_ids(&self, buyer: &ManagedAddress) -> VecMapper<u64>;

    #[storage_mapper("bookedSlots")]
    fn booked_slots(&self, seller: &ManagedAddress) -> VecMapper<BookedSlot>;

    #[storage_mapper("purchaseCount")]
    fn purchase_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("approvedPurchaseCount")]
    fn approved_purchase_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("withdrawnPurchaseCount")]
    fn withdrawn_purchase_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("comments")]
    fn comments(&self, service_id: u64) -> VecMapper<Comment<Self::Api>>;

    #[storage_mapper("hasCommented")]
    fn has_commented(
        &self,
        service_id: u64,
        author: &ManagedAddress,
    ) -> SingleValueMapper<bool>;

    #[storage_mapper("commentCount")]
    fn comment_count(&self) -> SingleValueMapper<u64>;
}
