use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned record identifier. Numeric and textual ids are both seen on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClienteId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for ClienteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClienteId::Numeric(id) => write!(f, "{id}"),
            ClienteId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ClienteId {
    fn from(value: i64) -> Self {
        ClienteId::Numeric(value)
    }
}

impl From<&str> for ClienteId {
    fn from(value: &str) -> Self {
        ClienteId::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cliente {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClienteId>,
    pub nome: String,
    pub email: String,
    pub nascimento: String,
    pub cep: String,
}

/// Uncommitted form values. Only lives while the creation modal is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClienteDraft {
    pub nome: String,
    pub email: String,
    pub nascimento: String,
    pub cep: String,
}

impl ClienteDraft {
    pub fn get(&self, field: ClienteField) -> &str {
        match field {
            ClienteField::Nome => &self.nome,
            ClienteField::Email => &self.email,
            ClienteField::Nascimento => &self.nascimento,
            ClienteField::Cep => &self.cep,
        }
    }

    pub fn get_mut(&mut self, field: ClienteField) -> &mut String {
        match field {
            ClienteField::Nome => &mut self.nome,
            ClienteField::Email => &mut self.email,
            ClienteField::Nascimento => &mut self.nascimento,
            ClienteField::Cep => &mut self.cep,
        }
    }

    pub fn set(&mut self, field: ClienteField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn is_blank(&self) -> bool {
        ClienteField::ALL
            .iter()
            .all(|field| self.get(*field).is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClienteField {
    Nome,
    Email,
    Nascimento,
    Cep,
}

impl ClienteField {
    pub const ALL: [ClienteField; 4] = [
        ClienteField::Nome,
        ClienteField::Email,
        ClienteField::Nascimento,
        ClienteField::Cep,
    ];

    /// JSON key of the field.
    pub fn key(self) -> &'static str {
        match self {
            ClienteField::Nome => "nome",
            ClienteField::Email => "email",
            ClienteField::Nascimento => "nascimento",
            ClienteField::Cep => "cep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClienteField::Nome => "Nome",
            ClienteField::Email => "E-mail",
            ClienteField::Nascimento => "Data de Nascimento",
            ClienteField::Cep => "CEP",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ClienteField::Nome => "Digite o nome",
            ClienteField::Email => "Digite o email",
            ClienteField::Nascimento => "Digite a data de nascimento",
            ClienteField::Cep => "Digite o CEP.",
        }
    }
}

impl fmt::Display for ClienteField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
