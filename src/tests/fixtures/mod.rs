// Shared test fixtures. Compiled only for tests via `src/lib.rs`.

pub mod commands {
    pub mod create_order;
    pub mod create_pizza;
}
