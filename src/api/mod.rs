//! Routing layer translating operation results into response envelopes
//!
//! Each [`Route`] maps to one client operation. Successes become an envelope
//! with `status: true` and the serialized record; failures become an
//! envelope carrying the error message and a 400 (validation) or 500 code.

mod envelope;

pub use envelope::Envelope;

use crate::client::{DramaboxClient, Fetcher};
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// One callable operation with its inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Latest,
    Trending,
    Search { query: String },
    Detail { book_id: String },
    Stream { book_id: String, episode: String },
}

impl Route {
    /// Message reported when the operation succeeds
    pub fn success_message(&self) -> String {
        match self {
            Self::Latest => "Latest updates retrieved successfully".to_string(),
            Self::Trending => "Trending content retrieved successfully".to_string(),
            Self::Search { query } => {
                format!("Search results for \"{}\" retrieved successfully", query)
            }
            Self::Detail { book_id } => {
                format!("Details for \"{}\" retrieved successfully", book_id)
            }
            Self::Stream { book_id, episode } => {
                format!("Stream for \"{}/{}\" retrieved successfully", book_id, episode)
            }
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "/api/latest"),
            Self::Trending => write!(f, "/api/trending"),
            Self::Search { .. } => write!(f, "/api/search"),
            Self::Detail { .. } => write!(f, "/api/detail/[bookId]"),
            Self::Stream { .. } => write!(f, "/api/stream/[bookId]/[episode]"),
        }
    }
}

/// Runs the operation behind `route` and wraps its outcome
pub async fn dispatch<F: Fetcher>(client: &DramaboxClient<F>, route: &Route) -> Envelope<Value> {
    let outcome = match route {
        Route::Latest => client.latest().await.and_then(to_value),
        Route::Trending => client.trending().await.and_then(to_value),
        Route::Search { query } => client.search(query).await.and_then(to_value),
        Route::Detail { book_id } => client.detail(book_id).await.and_then(to_value),
        Route::Stream { book_id, episode } => {
            client.stream(book_id, episode).await.and_then(to_value)
        }
    };

    respond(route, outcome)
}

/// Wraps an operation outcome in the envelope for `route`
pub fn respond(route: &Route, outcome: Result<Value>) -> Envelope<Value> {
    match outcome {
        Ok(data) => Envelope::ok(route.success_message(), data),
        Err(e) => {
            tracing::error!("Error in {}: {}", route, e);
            Envelope::from_error(&e)
        }
    }
}

fn to_value<T: Serialize>(data: T) -> Result<Value> {
    Ok(serde_json::to_value(data)?)
}
