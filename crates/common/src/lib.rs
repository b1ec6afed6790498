//! Ambient pieces shared by bridge client binaries and services.

pub mod logging;
