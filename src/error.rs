use crate::models::RucValidationError;

/// Logical operation a request belongs to.
///
/// Only used to pick the right "service unreachable" message; the HTTP
/// method and path are derived by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    List,
    Delete,
    Restore,
}

impl Operation {
    /// Message shown when the service could not be reached at all.
    pub fn unreachable_message(self) -> &'static str {
        match self {
            Operation::Fetch => "No se pudo conectar con el servicio de RUC. Intente más tarde.",
            Operation::List => {
                "No se pudo conectar con el servicio para listar RUCs. Intente más tarde."
            }
            Operation::Delete => {
                "No se pudo conectar con el servicio para borrar el RUC. Intente más tarde."
            }
            Operation::Restore => {
                "No se pudo conectar con el servicio para restaurar el RUC. Intente más tarde."
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RucError {
    #[error("No se encontró el RUC. Por favor, verifique el número.")]
    NotFound,

    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{}", .operation.unreachable_message())]
    Unreachable {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Invalid(#[from] RucValidationError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl RucError {
    /// Build a server error from a non-2xx status and the `message` field of
    /// its body, if the body carried one.
    pub fn server(status: u16, reported: Option<String>) -> Self {
        let message = reported
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("Error del servidor: {status}"));
        RucError::Server { status, message }
    }

    /// HTTP status code, for errors that came with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RucError::NotFound => Some(404),
            RucError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RucError>;
