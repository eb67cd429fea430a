//! HTTP oracle backed by the game server
//!
//! Protocol:
//! - `POST {base}/start` with `{nickname, email, slots}` returns `{gameId}`
//! - `POST {base}/guess` with `{gameId, guess}` returns
//!   `{evaluation: {black, white}, guessCount}`

use super::{Oracle, OracleError, Response};
use crate::config::{Identity, RemoteConfig};
use crate::core::{Code, Evaluation, Symbol};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Body of the session start request
#[derive(Debug, Serialize)]
pub struct SessionStart<'a> {
    pub nickname: &'a str,
    pub email: &'a str,
    pub slots: usize,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StartResponse {
    game_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GuessRequest<'a> {
    game_id: &'a str,
    guess: &'a [Symbol],
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GuessResponse {
    evaluation: Evaluation,
    guess_count: usize,
}

/// A live game session on the remote server
pub struct RemoteOracle {
    client: Client,
    guess_url: String,
    game_id: String,
    length: usize,
}

impl RemoteOracle {
    /// Start a new game of `length` slots for `identity`
    ///
    /// # Errors
    /// Returns `OracleError` if the HTTP client cannot be built, the request
    /// fails, the server answers with a non-success status, or the body is
    /// not a valid start response.
    pub fn start(
        config: &RemoteConfig,
        identity: &Identity,
        length: usize,
    ) -> Result<Self, OracleError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| OracleError::Transport {
                endpoint: "client setup".to_string(),
                source,
            })?;

        let start_url = config.endpoint("start");
        let body = SessionStart {
            nickname: &identity.nickname,
            email: &identity.email,
            slots: length,
        };
        let response: StartResponse = post_json(&client, &start_url, &body)?;
        info!(game_id = %response.game_id, length, "remote game started");

        Ok(Self {
            client,
            guess_url: config.endpoint("guess"),
            game_id: response.game_id,
            length,
        })
    }

    #[must_use]
    pub fn game_id(&self) -> &str {
        &self.game_id
    }
}

impl Oracle for RemoteOracle {
    fn length(&self) -> usize {
        self.length
    }

    fn submit(&mut self, guess: &Code) -> Result<Response, OracleError> {
        guess.check_guess(self.length)?;

        let body = GuessRequest {
            game_id: &self.game_id,
            guess: guess.symbols(),
        };
        let response: GuessResponse = post_json(&self.client, &self.guess_url, &body)?;
        debug!(
            evaluation = %response.evaluation,
            guess_count = response.guess_count,
            "remote guess answered"
        );

        Ok(Response {
            evaluation: response.evaluation,
            guess_count: response.guess_count,
        })
    }
}

fn post_json<B, R>(client: &Client, url: &str, body: &B) -> Result<R, OracleError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let res = client
        .post(url)
        .json(body)
        .send()
        .map_err(|source| OracleError::Transport {
            endpoint: url.to_string(),
            source,
        })?;

    if !res.status().is_success() {
        let status = res.status().as_u16();
        let body = res.text().unwrap_or_default();
        return Err(OracleError::Status {
            endpoint: url.to_string(),
            status,
            body,
        });
    }

    res.json().map_err(|source| OracleError::Decode {
        endpoint: url.to_string(),
        source,
    })
}
