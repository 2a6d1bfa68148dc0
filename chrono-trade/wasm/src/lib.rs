#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    chrono_trade
    (
        init => init
        upgrade => upgrade
        registerUser => register_user
        updateTimeSlots => update_time_slots
        createService => create_service
        cancelService => cancel_service
        buyService => buy_service
        approveCompletion => approve_completion
        withdrawSeller => withdraw_seller
        createComment => create_comment
        setPaused => set_paused
        setOwner => set_owner
        getProfile => get_profile
        isUserRegistered => is_user_registered
        getService => get_service
        getAllServices => get_all_services
        getServicesPaginated => get_services_paginated
        getProvidedServices => get_provided_services
        getReceivedServices => get_received_services
        getPurchasedService => get_purchased_service
        getComments => get_comments
        isDayAvailable => is_day_available
        getTimeSlot => get_time_slot
        getTimeSlotStartHours => get_time_slot_start_hours
        isTimeSlotAvailable => is_time_slot_available
        getBookedTimeSlots => get_booked_time_slots
        getDayOfWeek => get_day_of_week
        getHour => get_hour
        getMarketStats => get_market_stats
        getConfig => get_config
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
