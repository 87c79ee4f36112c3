//! Configuration management for the liftdesk system.
//!
//! Handles loading and saving `.liftdesk/config.yaml`, discovering the
//! `.liftdesk/` directory in the filesystem, and typed access to the rate
//! table and team roster.

pub mod config;
pub mod workspace_dir;
