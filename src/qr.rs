//! Ticket presentation gateway: turns a ticket URL into an
//! image-embeddable confirmation artifact. Deterministic, no side
//! effects; the rest of the service treats the encoder as a black box.

use crate::error::ServiceError;
use base64::Engine as _;
use qrcode::QrCode;
use qrcode::render::svg;

/// Render `url` as a QR code and wrap it in an SVG data URL suitable for
/// an `<img src=...>` attribute.
pub fn ticket_qr_data_url(url: &str) -> Result<String, ServiceError> {
    let code = QrCode::new(url.as_bytes())?;
    let image = code
        .render::<svg::Color<'_>>()
        .min_dimensions(220, 220)
        .build();
    let encoded = base64::engine::general_purpose::STANDARD.encode(image);
    Ok(format!("data:image/svg+xml;base64,{encoded}"))
}
