//! HTTP handlers

pub mod pages;
