//! Client-layer specs

mod commands;
mod dispatch;
mod send;
mod subscriptions;
