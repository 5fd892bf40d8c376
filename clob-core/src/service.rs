//! Thin boundary in front of `MatchingEngine`: request/response value types
//! matching the wire table in spec.md §6, plus the validation (`price`/
//! `quantity` must be positive) that keeps invalid input from ever reaching
//! the engine. A real transport (gRPC, HTTP, whatever) sits in front of
//! this, not built here.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::engine::MatchingEngine;
use crate::error::EngineError;
use crate::types::{OrderId, Side};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderRequest {
    pub side: Side,
    pub instrument_id: u64,
    pub price: u64,
    pub quantity: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlaceOrderResponse {
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetOrderStatusRequest {
    pub side: Side,
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetOrderStatusResponse {
    pub order_id: OrderId,
    pub timestamp_ns: u64,
    pub balance: i64,
    pub price: u64,
    pub quantity: u64,
    pub filled_quantity: u64,
    pub is_cancelled: bool,
    pub found: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub side: Side,
    pub order_id: OrderId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CancelOrderResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuoteBestBidAskRequest {
    pub instrument_id: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QuoteBestBidAskResponse {
    pub best_bid: u64,
    pub best_ask: u64,
}

/// Wraps a `MatchingEngine`, validating requests ahead of the façade.
pub struct EngineService<C: Clock = crate::clock::SystemClock> {
    engine: MatchingEngine<C>,
}

impl<C: Clock> EngineService<C> {
    pub fn new(engine: MatchingEngine<C>) -> Self {
        EngineService { engine }
    }

    pub fn engine(&self) -> &MatchingEngine<C> {
        &self.engine
    }

    pub fn add_instrument(&self, name: impl Into<String>, ticker: impl Into<String>) -> u64 {
        self.engine.add_instrument(name, ticker)
    }

    pub fn place_order(&self, req: PlaceOrderRequest) -> Result<PlaceOrderResponse, EngineError> {
        if req.price == 0 {
            return Err(EngineError::InvalidArgument("price must be positive"));
        }
        if req.quantity == 0 {
            return Err(EngineError::InvalidArgument("quantity must be positive"));
        }
        let order_id = self
            .engine
            .place_order(req.side, req.instrument_id, req.price, req.quantity)?;
        Ok(PlaceOrderResponse { order_id })
    }

    pub fn get_order_status(&self, req: GetOrderStatusRequest) -> GetOrderStatusResponse {
        let snapshot = self.engine.query_order(req.side, req.order_id);
        GetOrderStatusResponse {
            order_id: snapshot.order_id,
            timestamp_ns: snapshot.timestamp_ns,
            balance: snapshot.balance,
            price: snapshot.price,
            quantity: snapshot.quantity,
            filled_quantity: snapshot.filled_quantity,
            is_cancelled: snapshot.is_cancelled,
            found: snapshot.found,
        }
    }

    pub fn cancel_order(&self, req: CancelOrderRequest) -> CancelOrderResponse {
        let success = self.engine.cancel_order(req.side, req.order_id);
        CancelOrderResponse { success }
    }

    pub fn quote_best_bid_ask(
        &self,
        req: QuoteBestBidAskRequest,
    ) -> Result<QuoteBestBidAskResponse, EngineError> {
        let (best_bid, best_ask) = self
            .engine
            .quote_best_bid_ask(req.instrument_id)
            .ok_or(EngineError::UnknownInstrument)?;
        Ok(QuoteBestBidAskResponse { best_bid, best_ask })
    }
}
