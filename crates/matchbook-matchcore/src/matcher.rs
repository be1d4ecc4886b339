//! The matching loop.
//!
//! Runs after every INSERT and after every UPDATE, draining fills from the
//! current top-of-book pair until the book no longer crosses. The initiating
//! order is the taker; its counterparty — already resting when the initiator
//! was admitted or reprised — is the maker, and every fill executes at the
//! maker's resting price.

use chrono::Utc;
use matchbook_types::{OrderId, Side, Trade};
use tracing::debug;

use crate::{clock::SeqClock, orderbook::OrderBook};

impl OrderBook {
    /// Drain as many fills as the current book allows.
    ///
    /// `initiator` attributes maker vs taker on each fill; it does not
    /// affect which orders match — that is decided purely by price-time
    /// priority on both ladders.
    ///
    /// Terminates: every iteration either consumes resting volume or pops a
    /// cancelled top.
    pub(crate) fn match_crossing(
        &mut self,
        initiator: OrderId,
        initiator_side: Side,
        clock: &mut SeqClock,
    ) {
        loop {
            let Some(buy_id) = self.bids.best() else { break };
            let Some(sell_id) = self.asks.best() else { break };

            if self.order_expect(sell_id).cancelled {
                self.asks.pop_best();
                continue;
            }
            if self.order_expect(buy_id).cancelled {
                self.bids.pop_best();
                continue;
            }

            let sell = self.order_expect(sell_id);
            let (sell_price, sell_volume) = (sell.price, sell.volume);
            let buy = self.order_expect(buy_id);
            let (buy_price, buy_volume) = (buy.price, buy.volume);

            if sell_price > buy_price {
                break;
            }

            let traded = sell_volume.min(buy_volume);

            // The maker is whichever side the initiator is not; the fill
            // executes at the maker's resting price.
            let (taker_id, maker_id, exec_price) =
                if initiator == sell_id && initiator_side == Side::Sell {
                    (sell_id, buy_id, buy_price)
                } else {
                    (buy_id, sell_id, sell_price)
                };

            self.order_mut(sell_id).fill(traded);
            self.order_mut(buy_id).fill(traded);

            let trade = Trade {
                symbol: self.symbol().clone(),
                price: exec_price,
                volume: traded,
                taker_order_id: taker_id,
                maker_order_id: maker_id,
                seq: clock.tick(),
                executed_at: Utc::now(),
            };
            debug!(
                symbol = %trade.symbol,
                price = %trade.price,
                volume = trade.volume,
                taker = %taker_id,
                maker = %maker_id,
                "fill"
            );
            self.trades.push(trade);

            if sell_volume == traded {
                self.asks.pop_best();
            }
            if buy_volume == traded {
                self.bids.pop_best();
            }
        }
    }
}
