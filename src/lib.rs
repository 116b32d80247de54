//! todosync - client-side state for a todolist application
//!
//! This library keeps an in-memory mirror of todolists and their tasks, keeps it in
//! sync with a remote REST service, and exposes it as a subscribable state container
//! for a user-interface layer.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`backend`] - Remote service trait, wire types and the HTTP client
//! * [`store`] - State slices, actions and the subscribable store
//! * [`sync`] - Synchronization operations against the remote service
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup

/// Remote service abstraction and REST client
pub mod backend;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Subscribable state container
pub mod store;

/// Synchronization operations keeping the store and the remote service in sync
pub mod sync;
