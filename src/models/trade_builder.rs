use crate::{
    models::{order_type::OrderType, side::Side, trade::Trade},
    utils::{constants::FEE_RATE, rounding::round_to},
};
use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};

/// Collects the raw draws for a trade and derives the rest on `build`.
///
/// Exit price is taken from the unrounded pnl percent. Fees and net pnl are
/// taken from the rounded size and pnl percent, so a built trade always
/// satisfies `pnl == round(size * pnl_percent / 100 - fees, 2)`.
///
/// This is deliberately not the pnl of the unrounded draws: the two can
/// differ by a cent or two, so totals will not match a dataset that derives
/// pnl from the raw percent and fee.
#[derive(Debug, Clone, Default)]
pub struct TradeBuilder {
    pub id: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub market: Option<String>,
    pub side: Option<Side>,
    pub size: Option<f64>,
    pub entry_price: Option<f64>,
    pub pnl_percent: Option<f64>,
    pub duration: Option<u32>,
    pub order_type: Option<OrderType>,
    pub tags: Vec<String>,
    pub notes: Option<String>,
}

impl TradeBuilder {
    pub fn new() -> Self {
        TradeBuilder::default()
    }

    pub fn id(mut self, id: String) -> Self {
        self.id = Some(id);
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn market(mut self, market: String) -> Self {
        self.market = Some(market);
        self
    }

    pub fn side(mut self, side: Side) -> Self {
        self.side = Some(side);
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn entry_price(mut self, entry_price: f64) -> Self {
        self.entry_price = Some(entry_price);
        self
    }

    pub fn pnl_percent(mut self, pnl_percent: f64) -> Self {
        self.pnl_percent = Some(pnl_percent);
        self
    }

    pub fn duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    /// Adds a tag unless it is already present.
    pub fn tag(mut self, tag: String) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
        self
    }

    pub fn notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    pub fn build(&self) -> Result<Trade> {
        let id = self
            .id
            .clone()
            .ok_or(anyhow!("Id is required to build Trade."))?;
        let timestamp = self
            .timestamp
            .ok_or(anyhow!("Timestamp is required to build Trade."))?;
        let market = self
            .market
            .clone()
            .ok_or(anyhow!("Market is required to build Trade."))?;
        let side = self
            .side
            .ok_or(anyhow!("Side is required to build Trade."))?;
        let size = self
            .size
            .ok_or(anyhow!("Size is required to build Trade."))?;
        let entry_price = self
            .entry_price
            .ok_or(anyhow!("Entry price is required to build Trade."))?;
        let raw_pnl_percent = self
            .pnl_percent
            .ok_or(anyhow!("PnL percent is required to build Trade."))?;
        let duration = self
            .duration
            .ok_or(anyhow!("Duration is required to build Trade."))?;
        let order_type = self
            .order_type
            .ok_or(anyhow!("Order type is required to build Trade."))?;

        let exit_price = side.exit_price(entry_price, raw_pnl_percent);

        let size = round_to(size, 2);
        let fees = round_to(size * FEE_RATE, 2);
        let pnl_percent = round_to(raw_pnl_percent, 2);
        let pnl = round_to(size * pnl_percent / 100.0 - fees, 2);

        let trade = Trade {
            id,
            timestamp,
            market,
            side,
            size,
            entry_price: round_to(entry_price, 4),
            exit_price: round_to(exit_price, 4),
            fees,
            pnl,
            pnl_percent,
            duration,
            order_type,
            tags: self.tags.clone(),
            notes: self.notes.clone(),
        };

        Ok(trade)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn complete() -> TradeBuilder {
        TradeBuilder::new()
            .id("trade-042".to_string())
            .timestamp(Utc.with_ymd_and_hms(2026, 1, 20, 9, 15, 0).unwrap())
            .market("ETH-PERP".to_string())
            .side(Side::Short)
            .size(2500.0)
            .entry_price(3456.789012)
            .pnl_percent(-1.23456)
            .duration(120)
            .order_type(OrderType::Market)
    }

    #[test]
    fn test_build_derives_fees_and_pnl() {
        let trade = complete().build().unwrap();

        assert_eq!(trade.fees, 2.0);
        assert_eq!(trade.pnl_percent, -1.23);
        assert_eq!(trade.pnl, round_to(2500.0 * -1.23 / 100.0 - 2.0, 2));
        assert_eq!(trade.pnl, -32.75);
        assert_eq!(trade.entry_price, 3456.789);
    }

    #[test]
    fn test_pnl_uses_rounded_percent_not_raw_draw() {
        let trade = complete()
            .side(Side::Long)
            .size(1000.0)
            .pnl_percent(1.234)
            .build()
            .unwrap();

        // Raw draw would give 12.34 - 0.8 = 11.54.
        assert_eq!(trade.pnl_percent, 1.23);
        assert_eq!(trade.fees, 0.8);
        assert_eq!(trade.pnl, 11.5);
        // Exit still follows the raw percent.
        assert_eq!(
            trade.exit_price,
            round_to(Side::Long.exit_price(3456.789012, 1.234), 4)
        );
    }

    #[test]
    fn test_short_exit_rises_on_loss() {
        let trade = complete().build().unwrap();

        assert!(trade.exit_price > trade.entry_price);
    }

    #[test]
    fn test_tags_are_deduplicated() {
        let trade = complete()
            .tag("news".to_string())
            .tag("news".to_string())
            .tag("dca".to_string())
            .build()
            .unwrap();

        assert_eq!(trade.tags, vec!["news".to_string(), "dca".to_string()]);
    }

    #[test]
    fn test_notes_are_optional() {
        assert_eq!(complete().build().unwrap().notes, None);

        let trade = complete().notes("faded the open".to_string()).build().unwrap();
        assert_eq!(trade.notes.as_deref(), Some("faded the open"));
    }

    #[test]
    fn test_missing_field_fails() {
        let mut builder = complete();
        builder.market = None;

        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("Market is required"));
    }
}
