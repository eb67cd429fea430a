//! Remote play command
//!
//! Starts a session on the game server and reconstructs its hidden code.

use crate::config::RemoteConfig;
use crate::oracle::RemoteOracle;
use crate::solver::{Reconstruction, Solver, Strategy};
use anyhow::{Context, Result};
use tracing::info;

/// Result of a remote game
pub struct PlayResult {
    pub game_id: String,
    pub reconstruction: Reconstruction,
}

/// Play one game of `length` slots against the configured server
///
/// # Errors
///
/// Returns an error if the identity is incomplete, the session cannot be
/// started, any guess fails, or the final submission is rejected.
pub fn run_play<S: Strategy>(
    solver: &Solver<S>,
    config: &RemoteConfig,
    length: usize,
) -> Result<PlayResult> {
    let identity = config.identity()?;
    info!(base_url = %config.base_url, nickname = %identity.nickname, length, "starting remote game");

    let mut oracle = RemoteOracle::start(config, &identity, length)
        .with_context(|| format!("Failed to start a game at {}", config.base_url))?;
    let game_id = oracle.game_id().to_string();

    let reconstruction = solver
        .solve(&mut oracle)
        .with_context(|| format!("Game {game_id} was not solved"))?;

    Ok(PlayResult {
        game_id,
        reconstruction,
    })
}
