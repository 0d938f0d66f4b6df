//! # IO Layer
//!
//! Interfaces through which the ledger is exposed. Currently only the
//! JSON REST API in [`rest`].

pub mod rest;
