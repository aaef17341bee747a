use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidateEmail;

use crate::{
    domain::{ClienteDraft, ClienteField},
    error::{ClientesFailure, ErrorCode},
};

pub const NOME_MIN_CHARS: usize = 3;
pub const NOME_MAX_CHARS: usize = 50;
pub const NASCIMENTO_FORMAT: &str = "%Y-%m-%d";

pub const NOME_OBRIGATORIO: &str = "Nome é obrigatório";
pub const NOME_CURTO: &str = "Nome muito curto";
pub const NOME_LONGO: &str = "Nome muito longo";
pub const EMAIL_OBRIGATORIO: &str = "E-mail é obrigatório";
pub const EMAIL_INVALIDO: &str = "E-mail inválido";
pub const NASCIMENTO_OBRIGATORIO: &str = "Data de nascimento é obrigatória";
pub const NASCIMENTO_INVALIDO: &str = "Data de nascimento inválida";
pub const CEP_OBRIGATORIO: &str = "CEP é obrigatório";
pub const CEP_INVALIDO: &str = "CEP inválido";

static CEP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("Invalid CEP regex"));

/// One message per invalid field, iterated in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<ClienteField, &'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: ClienteField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn contains(&self, field: ClienteField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ClienteField, &'static str)> + '_ {
        self.errors.iter().map(|(field, message)| (*field, *message))
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    fn insert(&mut self, field: ClienteField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Summary of a blocked submission, naming the invalid fields in form order.
impl From<&FieldErrors> for ClientesFailure {
    fn from(errors: &FieldErrors) -> Self {
        let labels: Vec<&str> = errors.iter().map(|(field, _)| field.label()).collect();
        ClientesFailure::new(ErrorCode::Validation, labels.join(", "))
    }
}

pub fn validate_draft(draft: &ClienteDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in ClienteField::ALL {
        if let Some(message) = validate_field(field, draft.get(field)) {
            errors.insert(field, message);
        }
    }
    errors
}

pub fn validate_field(field: ClienteField, value: &str) -> Option<&'static str> {
    match field {
        ClienteField::Nome => validate_nome(value),
        ClienteField::Email => validate_email(value),
        ClienteField::Nascimento => validate_nascimento(value),
        ClienteField::Cep => validate_cep(value),
    }
}

fn validate_nome(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(NOME_OBRIGATORIO);
    }
    let chars = trimmed.chars().count();
    if chars < NOME_MIN_CHARS {
        Some(NOME_CURTO)
    } else if chars > NOME_MAX_CHARS {
        Some(NOME_LONGO)
    } else {
        None
    }
}

fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(EMAIL_OBRIGATORIO);
    }
    if value.to_string().validate_email() {
        None
    } else {
        Some(EMAIL_INVALIDO)
    }
}

fn validate_nascimento(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(NASCIMENTO_OBRIGATORIO);
    }
    match NaiveDate::parse_from_str(trimmed, NASCIMENTO_FORMAT) {
        Ok(_) => None,
        Err(_) => Some(NASCIMENTO_INVALIDO),
    }
}

fn validate_cep(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(CEP_OBRIGATORIO);
    }
    if CEP_PATTERN.is_match(value) {
        None
    } else {
        Some(CEP_INVALIDO)
    }
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
