// Crate root.
//
// Purpose
// - Only declare and expose modules. No business logic here.

pub mod shared {
    pub mod core {
        pub mod outcome;
        pub mod validation;
    }
    pub mod dispatch {
        pub mod contracts;
        pub mod dispatcher;
        pub mod error;
        pub mod registry;
    }
    pub mod infrastructure {
        pub mod http;
        pub mod outbox;
        pub mod persistence;
    }
}

pub mod modules {
    pub mod pizzas {
        pub mod core {
            pub mod pizza;
        }
        pub mod use_cases {
            pub mod create_pizza {
                pub mod command;
                pub mod handler;
            }
            pub mod update_pizza {
                pub mod command;
                pub mod handler;
            }
            pub mod delete_pizza {
                pub mod command;
                pub mod handler;
            }
            pub mod get_pizza {
                pub mod handler;
                pub mod query;
            }
            pub mod search_pizzas {
                pub mod handler;
                pub mod query;
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http;
            }
        }
    }
    pub mod orders {
        pub mod core {
            pub mod order;
        }
        pub mod use_cases {
            pub mod create_order {
                pub mod command;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod complete_order {
                pub mod command;
                pub mod handler;
                pub mod notifications;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_order_status {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_orders {
                pub mod handler;
                pub mod query;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;

#[cfg(test)]
pub mod tests {
    pub mod fixtures;
}
