use loto_slip::SlipError;

/// Every failure a service operation can surface, one variant family per
/// error kind. [`ServiceError::kind`] is what the HTTP layer keys status
/// codes and wire error codes on.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] SlipError),

    #[error("Drawn numbers are required and must be a non-empty array")]
    EmptyDraw,

    #[error("No active round")]
    NoActiveRound,

    #[error("No closed round is awaiting drawn numbers")]
    NoEligibleRound,

    #[error("Drawn numbers are already recorded for round {0}")]
    AlreadyDrawn(i32),

    #[error("Round {0} is not closed")]
    RoundStillActive(i32),

    #[error("Ticket {0} not found")]
    TicketNotFound(i32),

    #[error("Missing or invalid admin credentials")]
    Unauthorized,

    #[error("Database error: {0}")]
    Store(#[from] diesel::result::Error),

    #[error("Connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("Malformed stored numbers: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to render confirmation code: {0}")]
    Confirmation(#[from] qrcode::types::QrError),
}

impl ServiceError {
    /// Stable discriminator for callers that need to branch on the error
    /// family without matching every variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::EmptyDraw => "validation",
            Self::NoActiveRound
            | Self::NoEligibleRound
            | Self::AlreadyDrawn(_)
            | Self::RoundStillActive(_) => "conflict",
            Self::TicketNotFound(_) => "not_found",
            Self::Unauthorized => "unauthorized",
            Self::Store(_) | Self::Pool(_) | Self::Decode(_) => "store",
            Self::Confirmation(_) => "internal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_distinguish_the_error_families() {
        assert_eq!(
            ServiceError::Validation(SlipError::DuplicateNumber).kind(),
            "validation"
        );
        assert_eq!(ServiceError::EmptyDraw.kind(), "validation");
        assert_eq!(ServiceError::NoActiveRound.kind(), "conflict");
        assert_eq!(ServiceError::AlreadyDrawn(3).kind(), "conflict");
        assert_eq!(ServiceError::TicketNotFound(9).kind(), "not_found");
        assert_eq!(ServiceError::Unauthorized.kind(), "unauthorized");
        assert_eq!(
            ServiceError::Store(diesel::result::Error::NotFound).kind(),
            "store"
        );
    }
}
