//! Collaborator seams the recorder calls out to: commit gate, decoder,
//! validator, localizer and alert.

mod alert;
mod decoder;
mod gate;
mod localizer;
mod validator;

pub use {
    alert::{AlertSink, SilentAlert},
    decoder::{CodeNameDecoder, ShortcutDecoder},
    gate::{GateFuture, PersistenceGate, accept_all},
    localizer::{EnglishLabels, Localizer, PlaceholderKey},
    validator::{AllowAll, Rejection, ShortcutValidator},
};
