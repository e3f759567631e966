//! HTTP surface of the portal.

pub mod rest;
