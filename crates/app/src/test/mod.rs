//! Test support: a disposable PostgreSQL database per test and helpers on top.

pub(crate) mod helpers;

pub(crate) use context::TestContext;
