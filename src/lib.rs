//! lsaddr: list local interface addresses
//!
//! A library for discovering the network interfaces of the local host and
//! the IPv4 and IPv6 addresses assigned to them.

pub mod config;
pub mod network;
