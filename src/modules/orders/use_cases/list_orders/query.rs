use crate::modules::orders::core::order::OrderModel;
use crate::shared::core::outcome::FieldErrors;
use crate::shared::core::validation::{Rules, Validate};
use crate::shared::dispatch::contracts::Query;
use crate::shared::infrastructure::persistence::{PAGE_LIMIT_MESSAGE, Paging, default_page_size};
use serde::Deserialize;

/// Read from the query string, so paging is flat rather than nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ListOrders {
    #[serde(default)]
    pub offset: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize,
}

impl Default for ListOrders {
    fn default() -> Self {
        let Paging { offset, limit } = Paging::default();
        Self { offset, limit }
    }
}

impl ListOrders {
    pub fn paging(&self) -> Paging {
        Paging::new(self.offset, self.limit)
    }
}

impl Query for ListOrders {
    const NAME: &'static str = "ListOrders";
    type Output = Vec<OrderModel>;
}

impl Validate for ListOrders {
    fn validate(&self) -> FieldErrors {
        Rules::new()
            .check("limit", self.paging().has_valid_limit(), PAGE_LIMIT_MESSAGE)
            .finish()
    }
}
