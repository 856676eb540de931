// SPDX-License-Identifier: MPL-2.0
//! `iced_counter` is a persistent click counter built with the Iced GUI framework.
//!
//! The counter value survives restarts through a small key-value store, every
//! change is announced in a transient notification banner, and the readout
//! pulses briefly after each update.

#![doc(html_root_url = "https://docs.rs/iced_counter/0.1.0")]

pub mod app;
pub mod counter;
pub mod error;
pub mod i18n;
pub mod storage;
pub mod ui;
