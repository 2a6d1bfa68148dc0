#![no_std]

multiversx_sc_wasm_adapter::allocator!();
multiversx_sc_wasm_adapter::panic_handler!();

multiversx_sc_wasm_adapter::endpoints! {
    time_token
    (
        init => init
        upgrade => upgrade
        setChronoTradeContract => set_chrono_trade_contract
        mintForNewUser => mint_for_new_user
        transfer => transfer
        approve => approve
        transferFrom => transfer_from
        balanceOf => balance_of
        allowance => allowance
        totalSupply => get_total_supply
        getChronoTradeContract => get_chrono_trade_contract
        getName => get_name
        getTicker => get_ticker
        getDecimals => get_decimals
    )
}

multiversx_sc_wasm_adapter::async_callback_empty! {}
