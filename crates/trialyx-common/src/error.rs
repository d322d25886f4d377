use thiserror::Error;

/// Failure taxonomy for every registry operation.
///
/// Handlers flatten all of these into a uniform `{"error", "kind"}` body;
/// `kind()` is the wire discriminator.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Missing or inconsistent request parameters. Display is the exact
    /// message sent to the client.
    #[error("{0}")]
    Validation(String),

    /// Transport failure, timeout, or non-2xx from the external registry.
    #[error("Error consultando el registro externo: {0}")]
    Upstream(String),

    /// The upstream payload was not well-formed XML.
    #[error("Respuesta XML no válida: {0}")]
    Parse(String),

    /// PDF/CSV byte-stream generation failure.
    #[error("Error generando la exportación: {0}")]
    Export(String),
}

impl RegistryError {
    pub fn kind(&self) -> &'static str {
        match self {
            RegistryError::Validation(_) => "validation",
            RegistryError::Upstream(_) => "upstream",
            RegistryError::Parse(_) => "parse",
            RegistryError::Export(_) => "export",
        }
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(e: reqwest::Error) -> Self {
        RegistryError::Upstream(e.to_string())
    }
}

impl From<quick_xml::Error> for RegistryError {
    fn from(e: quick_xml::Error) -> Self {
        RegistryError::Parse(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_display_is_verbatim() {
        let e = RegistryError::Validation("Debe especificar al menos 'molecula' o 'patologia'".into());
        assert_eq!(e.to_string(), "Debe especificar al menos 'molecula' o 'patologia'");
        assert_eq!(e.kind(), "validation");
    }

    #[test]
    fn kinds_are_distinct() {
        assert_eq!(RegistryError::Upstream("x".into()).kind(), "upstream");
        assert_eq!(RegistryError::Parse("x".into()).kind(), "parse");
        assert_eq!(RegistryError::Export("x".into()).kind(), "export");
    }
}
