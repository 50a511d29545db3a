//! Share tokens
//!
//! A share token carries the public progress of a session: the catalog index of
//! the current word, the round's guesses and the session tallies. The payload
//! is compact JSON compressed with the lz-string URI-component transform, so the
//! token can travel as the `id` query parameter of a link.
//!
//! Letter feedback and the in-progress guess are not shared. A restored session
//! starts with blank feedback even when it already has guesses.

use super::CodecError;
use crate::core::Word;
use crate::game::{GameState, GameStatus, LetterSet, MAX_GUESSES};
use crate::wordlists::Catalog;
use serde::{Deserialize, Serialize};

/// Query parameter carrying the token in share links
pub const SHARE_PARAM: &str = "id";

/// Decoded token payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Catalog index of the current word
    pub w: usize,
    /// Guesses of the active round
    pub g: Vec<Word>,
    /// Used words
    pub u: Vec<Word>,
    /// Won words
    pub wn: Vec<Word>,
    /// Lost words
    pub ls: Vec<Word>,
}

/// Encode the shareable part of `state` as a URL-safe token
///
/// # Errors
///
/// Returns `CodecError::WordNotInCatalog` if the current word has no catalog
/// index, or `CodecError::Json` if the payload cannot be serialized.
pub fn to_share_token(state: &GameState, catalog: &Catalog) -> Result<String, CodecError> {
    let w = catalog
        .index_of(&state.current_word)
        .ok_or_else(|| CodecError::WordNotInCatalog(state.current_word.to_string()))?;

    let payload = SharePayload {
        w,
        g: state.guesses.clone(),
        u: state.used_words.clone(),
        wn: state.won_words.clone(),
        ls: state.lost_words.clone(),
    };

    let json = serde_json::to_string(&payload)?;
    Ok(lz_str::compress_to_encoded_uri_component(json.as_str()))
}

/// Decode a share token into a playable state
///
/// The restored state is always `Playing` with an empty guess and empty
/// feedback sets.
///
/// # Errors
///
/// Returns `CodecError::InvalidShareToken` if the token does not decompress to
/// a payload this catalog can play.
///
/// # Examples
/// ```
/// use adoble::codec::from_share_token;
/// use adoble::wordlists::Catalog;
///
/// assert!(from_share_token("invalid-string", &Catalog::embedded()).is_err());
/// ```
pub fn from_share_token(token: &str, catalog: &Catalog) -> Result<GameState, CodecError> {
    let payload = decode_payload(token)?;

    let current_word = catalog.get(payload.w).cloned().ok_or_else(|| {
        CodecError::InvalidShareToken(format!("word index {} out of range", payload.w))
    })?;
    if payload.g.len() > MAX_GUESSES {
        return Err(CodecError::InvalidShareToken(format!(
            "{} guesses in one round",
            payload.g.len()
        )));
    }

    Ok(GameState {
        current_word,
        current_guess: String::new(),
        guesses: payload.g,
        status: GameStatus::Playing,
        used_words: payload.u,
        won_words: payload.wn,
        lost_words: payload.ls,
        guessed_letters: LetterSet::default(),
        correct_letters: LetterSet::default(),
        wrong_pos_letters: LetterSet::default(),
        not_in_word_letters: LetterSet::default(),
    })
}

/// Decompress and parse a token without resolving it against a catalog
///
/// # Errors
///
/// Returns `CodecError::InvalidShareToken` on empty input, failed
/// decompression or an unparseable payload.
pub fn decode_payload(token: &str) -> Result<SharePayload, CodecError> {
    let token = token.trim();
    if token.is_empty() {
        return Err(CodecError::InvalidShareToken("empty token".to_string()));
    }

    let raw = lz_str::decompress_from_encoded_uri_component(token)
        .and_then(|units| String::from_utf16(&units).ok())
        .filter(|text| !text.is_empty())
        .ok_or_else(|| CodecError::InvalidShareToken("token does not decompress".to_string()))?;

    serde_json::from_str(&raw).map_err(|e| CodecError::InvalidShareToken(e.to_string()))
}

/// Build a share link for `token`
///
/// # Examples
/// ```
/// use adoble::codec::share_url;
///
/// assert_eq!(share_url("https://example.com/", "abc"), "https://example.com/?id=abc");
/// assert_eq!(share_url("https://example.com/?v=2", "abc"), "https://example.com/?v=2&id=abc");
/// ```
#[must_use]
pub fn share_url(base: &str, token: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{SHARE_PARAM}={token}")
}

/// Pull the token out of a share link, or return the input as a bare token
#[must_use]
pub fn extract_token(input: &str) -> &str {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        return input;
    };

    query
        .split(['&', '#'])
        .find_map(|pair| {
            pair.split_once('=')
                .filter(|(key, _)| *key == SHARE_PARAM)
                .map(|(_, value)| value)
        })
        .unwrap_or(input)
}
