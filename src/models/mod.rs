pub mod daily_metric;
pub mod order_type;
pub mod portfolio_allocation;
pub mod side;
pub mod trade;
pub mod trade_builder;
pub mod trade_query;
