//! Model-level tests for the ChronoTrade contracts live in `tests/`.
