/// Failures reported by the market data gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum GatewayError {
    /// The request never produced a response.
    Transport(String),
    /// The provider answered with a non-success HTTP status.
    Status { code: u16, text: String },
    /// The response body could not be decoded.
    Parse(String),
    /// The provider reported an error for this lookup.
    Lookup { code: String, description: String },
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Transport(msg) => write!(f, "request failed: {}", msg),
            GatewayError::Status { code, text } => write!(f, "HTTP {} {}", code, text),
            GatewayError::Parse(msg) => write!(f, "malformed response: {}", msg),
            GatewayError::Lookup { code, description } => write!(f, "{} ({})", description, code),
        }
    }
}

impl std::error::Error for GatewayError {}

#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    Config(String),
    Presentation(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(msg) => write!(f, "Config Error: {}", msg),
            AppError::Presentation(msg) => write!(f, "Presentation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type GatewayResult<T> = Result<T, GatewayError>;
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_errors_render_as_label_text() {
        assert_eq!(GatewayError::Status { code: 404, text: "Not Found".into() }.to_string(), "HTTP 404 Not Found");
        assert_eq!(AppError::Config("bad".into()).to_string(), "Config Error: bad");
    }
}
