//! Staging buffer for an in-progress card create or edit.
//!
//! Holds candidate field values detached from the committed collection
//! until the user confirms. Switching between add and edit always goes
//! through [`CardForm::begin_add`] / [`CardForm::begin_edit`], which build a
//! fresh buffer -- an abandoned add can never bleed fields into a
//! subsequent edit.

use crate::card::CardInput;
use crate::error::CoreError;
use crate::types::CardId;

/// Whether the buffer stages a new card or edits an existing one.
#[derive(Debug, Clone, PartialEq)]
pub enum FormMode {
    Add,
    Edit(CardId),
}

/// The editable fields of a card form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardField {
    Kind,
    Issuer,
    Number,
    Balance,
    Expiration,
    Color,
}

/// In-progress form state for one create or edit.
#[derive(Debug, Clone, PartialEq)]
pub struct CardForm {
    mode: FormMode,
    input: CardInput,
}

impl CardForm {
    /// Start staging a brand-new card with empty fields.
    pub fn begin_add() -> Self {
        Self {
            mode: FormMode::Add,
            input: CardInput::default(),
        }
    }

    /// Start editing an existing card, pre-filled from its current values.
    pub fn begin_edit(id: CardId, initial: CardInput) -> Self {
        Self {
            mode: FormMode::Edit(id),
            input: initial,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Current staged values, uncommitted.
    pub fn staged(&self) -> &CardInput {
        &self.input
    }

    /// Overwrite a single staged field.
    pub fn set(&mut self, field: CardField, value: String) {
        match field {
            CardField::Kind => self.input.kind = value,
            CardField::Issuer => self.input.issuer = value,
            CardField::Number => self.input.number = value,
            CardField::Balance => self.input.balance = value,
            CardField::Expiration => self.input.expiration = value,
            CardField::Color => self.input.color = Some(value),
        }
    }

    /// Validate and hand back the staged input for submission.
    ///
    /// Performs no network call; the caller passes the result to the view
    /// model's create or update request.
    pub fn commit(&self) -> Result<CardInput, CoreError> {
        self.input.validate()?;
        Ok(self.input.clone())
    }

    /// Drop all staged values, keeping the mode.
    pub fn discard(&mut self) {
        self.input = CardInput::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CardInput {
        CardInput {
            kind: "Débito".into(),
            issuer: "Banco Local".into(),
            number: "9876543210987654".into(),
            balance: "1200.00".into(),
            expiration: "05/24".into(),
            color: None,
        }
    }

    #[test]
    fn add_starts_empty() {
        let form = CardForm::begin_add();
        assert_eq!(form.mode(), &FormMode::Add);
        assert_eq!(form.staged(), &CardInput::default());
    }

    #[test]
    fn set_then_commit_round_trips_fields() {
        let mut form = CardForm::begin_add();
        form.set(CardField::Kind, "Crédito".into());
        form.set(CardField::Issuer, "BBVA".into());
        form.set(CardField::Number, "1111222233334444".into());
        form.set(CardField::Balance, "1500.00".into());
        form.set(CardField::Expiration, "08/26".into());
        form.set(CardField::Color, "#a8ff78".into());

        let input = form.commit().unwrap();
        assert_eq!(input.issuer, "BBVA");
        assert_eq!(input.color.as_deref(), Some("#a8ff78"));
    }

    #[test]
    fn commit_rejects_incomplete_input() {
        let mut form = CardForm::begin_add();
        form.set(CardField::Kind, "Crédito".into());
        assert!(form.commit().is_err());
    }

    #[test]
    fn edit_prefills_from_existing_card() {
        let form = CardForm::begin_edit("card2".into(), filled());
        assert_eq!(form.mode(), &FormMode::Edit("card2".into()));
        assert_eq!(form.staged().issuer, "Banco Local");
    }

    #[test]
    fn switching_modes_discards_prior_contents() {
        let mut abandoned = CardForm::begin_add();
        abandoned.set(CardField::Number, "0000111122223333".into());

        // A new edit buffer starts strictly from the card's own values.
        let edit = CardForm::begin_edit("card2".into(), filled());
        assert_eq!(edit.staged().number, "9876543210987654");

        // And a new add buffer after an edit starts empty.
        let add = CardForm::begin_add();
        assert_eq!(add.staged(), &CardInput::default());
    }

    #[test]
    fn discard_clears_staged_fields() {
        let mut form = CardForm::begin_edit("card2".into(), filled());
        form.discard();
        assert_eq!(form.staged(), &CardInput::default());
        assert_eq!(form.mode(), &FormMode::Edit("card2".into()));
    }
}
