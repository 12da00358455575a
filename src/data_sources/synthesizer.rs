use crate::{
    data_sources::seeded_random::SeededRandom,
    models::{order_type::OrderType, side::Side, trade::Trade, trade_builder::TradeBuilder},
    utils::constants::{
        DURATION_SPAN, LONG_THRESHOLD, MARKET_CATALOG, MAX_DAYS_AGO, MAX_TAG_DRAWS, MIN_DURATION,
        MIN_SIZE, PNL_PERCENT_CENTER, PNL_PERCENT_SCALE, PRICE_JITTER, SIZE_SPAN, TAG_VOCABULARY,
    },
};
use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// # Trade Synthesizer
///
/// Generates a journal of synthetic trades anchored to a reference instant.
/// Every random choice is drawn from the owned `SeededRandom`, one draw per
/// choice, in a fixed order:
///
/// 1. days, hours and minutes before the reference instant
/// 2. market
/// 3. side
/// 4. entry price jitter
/// 5. pnl percent
/// 6. size
/// 7. duration
/// 8. order type
/// 9. tag count, then one draw per tag
///
/// The draw order is part of the output: changing it changes every trade
/// after the first.
#[derive(Debug, Clone)]
pub struct TradeSynthesizer {
    rng: SeededRandom,
    reference: DateTime<Utc>,
    count: usize,
}

impl TradeSynthesizer {
    pub fn new(rng: SeededRandom, reference: DateTime<Utc>, count: usize) -> Self {
        Self {
            rng,
            reference,
            count,
        }
    }

    /// Trades sorted newest first. Trades sharing a timestamp keep their
    /// generation order.
    pub fn generate(&mut self) -> Result<Vec<Trade>> {
        let mut trades = (0..self.count)
            .map(|i| self.next_trade(i))
            .collect::<Result<Vec<Trade>>>()?;

        trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        debug!(
            seed = self.rng.seed(),
            count = trades.len(),
            "Synthesized trade journal"
        );

        Ok(trades)
    }

    fn next_trade(&mut self, index: usize) -> Result<Trade> {
        let days_ago = self.rng.floor_scaled(MAX_DAYS_AGO) as i64;
        let hours_ago = self.rng.floor_scaled(24.0) as i64;
        let minutes_ago = self.rng.floor_scaled(60.0) as i64;
        let timestamp =
            self.reference - Duration::minutes(days_ago * 24 * 60 + hours_ago * 60 + minutes_ago);

        let (market, base_price) = MARKET_CATALOG[self.rng.pick(MARKET_CATALOG.len())];
        let side = if self.rng.next_f64() > LONG_THRESHOLD {
            Side::Long
        } else {
            Side::Short
        };
        let entry_price = base_price * (1.0 + (self.rng.next_f64() - 0.5) * PRICE_JITTER);
        let pnl_percent = (self.rng.next_f64() - PNL_PERCENT_CENTER) * PNL_PERCENT_SCALE;
        let size = self.rng.floor_scaled(SIZE_SPAN) + MIN_SIZE;
        let duration = self.rng.floor_scaled(DURATION_SPAN) as u32 + MIN_DURATION;
        let order_type = OrderType::ALL[self.rng.pick(OrderType::ALL.len())];

        let mut builder = TradeBuilder::new()
            .id(format!("trade-{:03}", index))
            .timestamp(timestamp)
            .market(market.to_string())
            .side(side)
            .size(size)
            .entry_price(entry_price)
            .pnl_percent(pnl_percent)
            .duration(duration)
            .order_type(order_type);

        let tag_count = self.rng.floor_scaled(MAX_TAG_DRAWS) as usize;
        for _ in 0..tag_count {
            let tag = TAG_VOCABULARY[self.rng.pick(TAG_VOCABULARY.len())];
            builder = builder.tag(tag.to_string());
        }

        builder.build()
    }
}
