//! Wire-format records for the remote PHP endpoints.
//!
//! The remote speaks Spanish field names (`tipo`, `banco`, `numero`,
//! `saldo`, `fecha_expiracion`) and, being PHP-backed, is loose about
//! scalar types: ids and balances arrive as strings or numbers depending
//! on the row. Deserializers here tolerate both and normalize into the
//! domain types before anything else sees the data.

use serde::{Deserialize, Deserializer, Serialize};
use tarjetero_core::{Card, CardInput, OwnerId, User};

// ---------------------------------------------------------------------------
// Tolerant scalar deserializers
// ---------------------------------------------------------------------------

/// A scalar that may arrive as a JSON string or number.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Int(i64),
    Float(f64),
    Str(String),
}

fn de_id_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match StringOrNumber::deserialize(d)? {
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(f) => f.to_string(),
        StringOrNumber::Str(s) => s,
    })
}

fn de_id_i64<'de, D: Deserializer<'de>>(d: D) -> Result<i64, D::Error> {
    match StringOrNumber::deserialize(d)? {
        StringOrNumber::Int(n) => Ok(n),
        StringOrNumber::Float(f) => Ok(f as i64),
        StringOrNumber::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid numeric id '{s}'"))),
    }
}

fn de_decimal<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    match StringOrNumber::deserialize(d)? {
        StringOrNumber::Int(n) => Ok(n as f64),
        StringOrNumber::Float(f) => Ok(f),
        StringOrNumber::Str(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid decimal '{s}'"))),
    }
}

fn de_opt_age<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
    let raw: Option<StringOrNumber> = Option::deserialize(d)?;
    match raw {
        None => Ok(None),
        Some(StringOrNumber::Int(n)) => Ok(u32::try_from(n).ok()),
        Some(StringOrNumber::Float(f)) => Ok(Some(f as u32)),
        Some(StringOrNumber::Str(s)) => Ok(s.trim().parse().ok()),
    }
}

// ---------------------------------------------------------------------------
// Card records
// ---------------------------------------------------------------------------

/// One card row as returned by `GET apitarjetas.php?id={owner}`.
#[derive(Debug, Deserialize)]
pub struct CardRecord {
    #[serde(deserialize_with = "de_id_string")]
    pub id: String,
    pub tipo: String,
    pub banco: String,
    pub numero: String,
    /// Server-side mask; may appear only post-fetch.
    #[serde(default)]
    pub numero_masked: Option<String>,
    #[serde(deserialize_with = "de_decimal")]
    pub saldo: f64,
    pub fecha_expiracion: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl CardRecord {
    /// Normalize into the domain record, attaching the owner the request
    /// was scoped to.
    pub fn into_card(self, owner_id: OwnerId) -> Card {
        Card {
            id: self.id,
            owner_id,
            kind: self.tipo,
            issuer: self.banco,
            number: self.numero,
            masked_number: self.numero_masked,
            balance: self.saldo,
            expiration: self.fecha_expiracion,
            color: self.color,
        }
    }
}

/// JSON body for `POST`/`PUT apitarjetas.php`.
///
/// Full-replace semantics: every editable field is resent on update.
#[derive(Debug, Serialize)]
pub struct CardPayload<'a> {
    /// Target card id; present on updates only (creates let the remote
    /// assign one).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    pub tipo: &'a str,
    pub banco: &'a str,
    pub numero: &'a str,
    pub saldo: &'a str,
    pub fecha_expiracion: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'a str>,
}

impl<'a> CardPayload<'a> {
    pub fn create(input: &'a CardInput) -> Self {
        Self {
            id: None,
            tipo: &input.kind,
            banco: &input.issuer,
            numero: &input.number,
            saldo: &input.balance,
            fecha_expiracion: &input.expiration,
            color: input.color.as_deref(),
        }
    }

    pub fn update(id: &'a str, input: &'a CardInput) -> Self {
        Self {
            id: Some(id),
            ..Self::create(input)
        }
    }
}

/// Response envelope for `POST`/`PUT`/`DELETE` on `apitarjetas.php`.
///
/// The remote discriminates outcomes with a `status` string; anything
/// other than `"success"` is a failure the client maps into [`StoreError`].
///
/// [`StoreError`]: crate::StoreError
#[derive(Debug, Deserialize)]
pub struct MutationResponse {
    pub status: String,
    /// The affected card; absent on deletes.
    #[serde(default)]
    pub tarjeta: Option<CardRecord>,
    /// Human-readable remote message accompanying a failure status.
    #[serde(default)]
    pub message: Option<String>,
}

impl MutationResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }

    pub fn is_not_found(&self) -> bool {
        self.status == "not_found"
    }
}

// ---------------------------------------------------------------------------
// Roster records
// ---------------------------------------------------------------------------

/// One user row as returned by `GET api.php?endpoint=usuarios`.
#[derive(Debug, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "de_id_i64")]
    pub id: i64,
    pub username: String,
    pub password: String,
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_age")]
    pub edad: Option<u32>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username,
            password: record.password,
            name: record.name,
            age: record.edad,
        }
    }
}
