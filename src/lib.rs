//! # mnk tic-tac-toe
//!
//! Tic-tac-toe generalized to any `rows x cols` board, where a run of
//! `min(rows, cols)` equal marks wins, with an exhaustive minimax opponent.
//! Features a terminal UI built with Ratatui and a small query CLI.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, grid encoding, win detection, history
//! - [`ai`] — Agent trait, minimax move search, random agent
//! - [`session`] — Human-versus-agent orchestration with automatic replies
//! - [`selfplay`] — Agent-versus-agent matches and result tallies
//! - [`ui`] — Terminal UI: board, move history, status
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod selfplay;
pub mod session;
pub mod ui;
