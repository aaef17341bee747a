use serde::{Deserialize, Serialize};

use crate::domain::{Cliente, ClienteDraft, ClienteId};

pub const CLIENTES_PATH: &str = "/clientes";

/// Body of `POST /clientes`. Values are sent exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovoClienteRequest {
    pub nome: String,
    pub email: String,
    pub nascimento: String,
    pub cep: String,
}

impl From<&ClienteDraft> for NovoClienteRequest {
    fn from(draft: &ClienteDraft) -> Self {
        Self {
            nome: draft.nome.clone(),
            email: draft.email.clone(),
            nascimento: draft.nascimento.clone(),
            cep: draft.cep.clone(),
        }
    }
}

/// Response of `POST /clientes`. Servers differ in how much they echo back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedClienteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ClienteId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nascimento: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
}

impl CreatedClienteResponse {
    /// Server values win; anything the server left out comes from the submitted draft.
    pub fn into_cliente(self, draft: &ClienteDraft) -> Cliente {
        Cliente {
            id: self.id,
            nome: self.nome.unwrap_or_else(|| draft.nome.clone()),
            email: self.email.unwrap_or_else(|| draft.email.clone()),
            nascimento: self.nascimento.unwrap_or_else(|| draft.nascimento.clone()),
            cep: self.cep.unwrap_or_else(|| draft.cep.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ClienteDraft {
        ClienteDraft {
            nome: " Joana Silva".to_string(),
            email: "j@x.com".to_string(),
            nascimento: "1995-05-05".to_string(),
            cep: "01310-000".to_string(),
        }
    }

    #[test]
    fn request_body_has_exactly_the_four_fields_untrimmed() {
        let body = serde_json::to_value(NovoClienteRequest::from(&draft())).expect("json");
        assert_eq!(
            body,
            serde_json::json!({
                "nome": " Joana Silva",
                "email": "j@x.com",
                "nascimento": "1995-05-05",
                "cep": "01310-000",
            })
        );
    }

    #[test]
    fn full_echo_is_taken_from_the_server() {
        let response: CreatedClienteResponse = serde_json::from_str(
            r#"{"id":7,"nome":"Joana Silva","email":"j@x.com","nascimento":"1995-05-05","cep":"01310-000"}"#,
        )
        .expect("response");
        let cliente = response.into_cliente(&draft());
        assert_eq!(cliente.id, Some(ClienteId::Numeric(7)));
        assert_eq!(cliente.nome, "Joana Silva");
    }

    #[test]
    fn id_only_echo_falls_back_to_draft_values() {
        let response: CreatedClienteResponse =
            serde_json::from_str(r#"{"id":"abc"}"#).expect("response");
        let cliente = response.into_cliente(&draft());
        assert_eq!(cliente.id, Some(ClienteId::from("abc")));
        assert_eq!(cliente.nome, " Joana Silva");
        assert_eq!(cliente.cep, "01310-000");
    }

    #[test]
    fn empty_echo_keeps_the_draft_without_id() {
        let cliente = CreatedClienteResponse::default().into_cliente(&draft());
        assert_eq!(cliente.id, None);
        assert_eq!(cliente.email, "j@x.com");
    }
}
