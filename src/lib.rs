//! Irops - Airline irregular-operations decision-support engine
//!
//! This library provides the core functionality for resolving flight
//! disruptions (crew, fuel, and MEL dispatch legality evaluated independently
//! and merged by an ordered arbitration policy) and for handling crew
//! repositioning requests (eligibility gates, alternate-deadhead selection,
//! preference-weighted flight scoring).

pub mod api;
pub mod arbitration;
pub mod audit;
pub mod cli;
pub mod config;
pub mod context;
pub mod decision;
pub mod engine;
pub mod evaluator;
pub mod logging;
pub mod travel;
