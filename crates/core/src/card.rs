//! Card records and their staging input.
//!
//! [`Card`] is the committed record as last seen from the remote store.
//! [`CardInput`] is the fixed-field staging shape a create or edit submits;
//! it carries the balance as the raw string the user typed, validated before
//! any network call. [`CardDisplay`] is the only representation handed to
//! presentation code -- it never contains the full card number.

use serde::Serialize;

use crate::error::CoreError;
use crate::masking;
use crate::types::{CardId, OwnerId};

/// A committed payment-card record for one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    /// Unique within one owner's collection; assigned by the remote store.
    pub id: CardId,
    pub owner_id: OwnerId,
    /// Free-text category, e.g. "Crédito" or "Débito".
    pub kind: String,
    /// Free-text bank name.
    pub issuer: String,
    /// Canonical full digit string. Sensitive -- display code must go
    /// through [`Card::display_number`] instead.
    pub number: String,
    /// Remote-supplied mask, when the store provides one post-fetch.
    pub masked_number: Option<String>,
    /// Finite decimal; non-negative by convention, not enforced.
    pub balance: f64,
    /// Opaque "MM/YY" token; not parsed or validated.
    pub expiration: String,
    /// Cosmetic color token, e.g. "#a8ff78".
    pub color: Option<String>,
}

impl Card {
    /// The display-safe number: the remote-supplied mask when present,
    /// otherwise a locally computed one. The raw number is never returned,
    /// so a missing remote mask degrades to local masking rather than to
    /// exposure.
    pub fn display_number(&self) -> String {
        match &self.masked_number {
            Some(masked) => masked.clone(),
            None => masking::mask(&self.number),
        }
    }

    /// Masked-safe projection for presentation code.
    pub fn to_display(&self) -> CardDisplay {
        CardDisplay {
            id: self.id.clone(),
            kind: self.kind.clone(),
            issuer: self.issuer.clone(),
            display_number: self.display_number(),
            balance: self.balance,
            expiration: self.expiration.clone(),
            color: self.color.clone(),
        }
    }
}

/// What presentation layers are allowed to see of a card.
///
/// Deliberately has no `number` field; only [`CardDisplay::display_number`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardDisplay {
    pub id: CardId,
    pub kind: String,
    pub issuer: String,
    pub display_number: String,
    pub balance: f64,
    pub expiration: String,
    pub color: Option<String>,
}

/// Candidate field values for a create or edit, as entered.
///
/// The balance stays a raw string until validation so the form can hold
/// whatever was typed; [`CardInput::balance_value`] parses it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardInput {
    pub kind: String,
    pub issuer: String,
    pub number: String,
    pub balance: String,
    pub expiration: String,
    pub color: Option<String>,
}

impl CardInput {
    /// Check the input is submittable: non-empty kind, issuer, and number,
    /// and a balance that parses to a finite decimal.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.kind.trim().is_empty() {
            return Err(CoreError::Validation("card type must not be empty".into()));
        }
        if self.issuer.trim().is_empty() {
            return Err(CoreError::Validation("issuer must not be empty".into()));
        }
        if self.number.trim().is_empty() {
            return Err(CoreError::Validation(
                "card number must not be empty".into(),
            ));
        }
        self.balance_value().map(|_| ())
    }

    /// Parse the staged balance string as a finite decimal.
    pub fn balance_value(&self) -> Result<f64, CoreError> {
        let parsed: f64 = self.balance.trim().parse().map_err(|_| {
            CoreError::Validation(format!("balance '{}' is not a decimal", self.balance))
        })?;
        if !parsed.is_finite() {
            return Err(CoreError::Validation(format!(
                "balance '{}' is not finite",
                self.balance
            )));
        }
        Ok(parsed)
    }
}
